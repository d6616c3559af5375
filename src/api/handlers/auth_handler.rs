//! Login, registration and logout handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Extension, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use validator::Validate;

use crate::api::extractors::ValidatedForm;
use crate::api::middleware::{expired_session_cookie, session_cookie, CurrentUser};
use crate::api::AppState;
use crate::config::{DASHBOARD_PATH, LOGIN_PATH, REGISTER_PATH, SESSION_COOKIE_NAME};
use crate::errors::{AppError, AppResult};
use crate::views::{LoginPage, RegisterPage};

/// Shown when login fails, whatever the reason
pub const INVALID_LOGIN_NOTICE: &str = "Invalid username or password.";

/// Shown when registration hits an existing username
pub const DUPLICATE_USERNAME_NOTICE: &str = "That username is already taken.";

/// Login form
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration form
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

/// Public authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(LOGIN_PATH, get(login_page).post(login))
        .route(REGISTER_PATH, get(register_page).post(register))
}

/// Render the login form
pub async fn login_page() -> Html<String> {
    Html(LoginPage::default().render())
}

/// Check credentials; on success set the session cookie and go to the dashboard.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedForm(form): ValidatedForm<LoginForm>,
) -> AppResult<Response> {
    match state.auth_service.login(&form.username, &form.password).await {
        Ok(session) => {
            // a login replaces whatever session this browser already held
            if let Some(previous) = jar.get(SESSION_COOKIE_NAME) {
                state.auth_service.logout(previous.value()).await?;
            }

            let jar = jar.add(session_cookie(session.token, state.cookie_secure));
            Ok((jar, Redirect::to(DASHBOARD_PATH)).into_response())
        }
        Err(AppError::InvalidCredentials) => {
            Ok(Html(LoginPage::with_notice(INVALID_LOGIN_NOTICE).render()).into_response())
        }
        Err(e) => Err(e),
    }
}

/// Render the registration form
pub async fn register_page() -> Html<String> {
    Html(RegisterPage::default().render())
}

/// Create the account, then send the user to the login page.
pub async fn register(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<RegisterForm>,
) -> AppResult<Response> {
    match state
        .auth_service
        .register(form.username, form.password, form.role)
        .await
    {
        Ok(_) => Ok(Redirect::to(LOGIN_PATH).into_response()),
        Err(AppError::Conflict(_)) => Ok((
            StatusCode::CONFLICT,
            Html(RegisterPage::with_notice(DUPLICATE_USERNAME_NOTICE).render()),
        )
            .into_response()),
        Err(e) => Err(e),
    }
}

/// End the current session and clear the cookie.
pub async fn logout(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Redirect)> {
    state
        .auth_service
        .logout(&current_user.session_token)
        .await?;

    tracing::info!(user_id = current_user.id, "User logged out");
    Ok((jar.remove(expired_session_cookie()), Redirect::to(LOGIN_PATH)))
}
