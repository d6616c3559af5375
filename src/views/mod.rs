//! Page templates.
//!
//! Pages are plain structs rendered to HTML strings. Handlers build them from
//! structured values; nothing here touches requests, sessions or storage.
//! Every piece of user-supplied text is escaped on the way out.

mod auth;
mod dashboard;
mod error;

pub use auth::{LoginPage, RegisterPage};
pub use dashboard::DashboardPage;
pub use error::ErrorPage;

use crate::utils::escape_html;

/// Wrap page content in the shared document shell.
fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
{content}
</body>
</html>
"#,
        title = escape_html(title),
    )
}

/// Optional one-line notice shown above a form.
fn notice(message: Option<&str>) -> String {
    match message {
        Some(message) => format!("<p class=\"notice\">{}</p>\n", escape_html(message)),
        None => String::new(),
    }
}
