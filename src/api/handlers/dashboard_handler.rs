//! Dashboard handler.

use axum::{response::Html, Extension};

use crate::api::middleware::CurrentUser;
use crate::domain::catalog;
use crate::views::DashboardPage;

/// Role heading, greeting and the full disease catalog.
pub async fn dashboard(Extension(current_user): Extension<CurrentUser>) -> Html<String> {
    Html(
        DashboardPage::new(&current_user.username, &current_user.role, catalog::list()).render(),
    )
}
