//! Role-aware dashboard.

use super::layout;
use crate::config::LOGOUT_PATH;
use crate::domain::user::dashboard_title;
use crate::utils::escape_html;

/// Dashboard for an authenticated user
#[derive(Debug)]
pub struct DashboardPage<'a> {
    pub title: String,
    pub username: &'a str,
    pub diseases: &'a [&'a str],
}

impl<'a> DashboardPage<'a> {
    pub fn new(username: &'a str, role: &str, diseases: &'a [&'a str]) -> Self {
        Self {
            title: dashboard_title(role),
            username,
            diseases,
        }
    }

    pub fn render(&self) -> String {
        let items: String = self
            .diseases
            .iter()
            .map(|name| format!("  <li>{}</li>\n", escape_html(name)))
            .collect();

        let content = format!(
            r#"<h2>{title}</h2>
<p>Welcome, {username}</p>

<h3>Diseases ({count})</h3>
<ul>
{items}</ul>

<a href="{logout}">Logout</a>"#,
            title = escape_html(&self.title),
            username = escape_html(self.username),
            count = self.diseases.len(),
            logout = LOGOUT_PATH,
        );

        layout(&self.title, &content)
    }
}
