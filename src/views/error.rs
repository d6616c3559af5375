//! Generic error page.

use axum::http::StatusCode;

use super::layout;
use crate::config::LOGIN_PATH;
use crate::utils::escape_html;

#[derive(Debug)]
pub struct ErrorPage {
    pub status: StatusCode,
    pub message: String,
}

impl ErrorPage {
    pub fn render(&self) -> String {
        let reason = self.status.canonical_reason().unwrap_or("Error");
        let heading = format!("{} {}", self.status.as_u16(), reason);

        let content = format!(
            r#"<h2>{heading}</h2>
<p>{message}</p>
<a href="{login}">Back to Login</a>"#,
            heading = escape_html(&heading),
            message = escape_html(&self.message),
            login = LOGIN_PATH,
        );

        layout(&heading, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_page() {
        let page = ErrorPage {
            status: StatusCode::BAD_REQUEST,
            message: "username is required".to_string(),
        };
        let html = page.render();
        assert!(html.contains("<h2>400 Bad Request</h2>"));
        assert!(html.contains("<p>username is required</p>"));
    }
}
