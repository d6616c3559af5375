//! Session authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::api::AppState;
use crate::config::SESSION_COOKIE_NAME;
use crate::domain::{User, UserId};
use crate::errors::AppError;

/// Authenticated user resolved from the session cookie
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: UserId,
    pub username: String,
    pub role: String,
    /// Token of the session that authenticated this request
    pub session_token: String,
}

impl CurrentUser {
    fn new(user: User, session_token: String) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            session_token,
        }
    }
}

/// Session middleware.
///
/// Resolves the session cookie to a user and injects `CurrentUser` into the
/// request extensions. Requests without a live session are answered with
/// `AppError::Unauthorized`, which redirects to the login page.
pub async fn session_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = jar
        .get(SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_owned())
        .filter(|token| !token.is_empty())
        .ok_or(AppError::Unauthorized)?;

    let user = state.auth_service.current_user(&token).await?;

    tracing::debug!(user_id = user.id, "Session resolved");
    request
        .extensions_mut()
        .insert(CurrentUser::new(user, token));

    Ok(next.run(request).await)
}

/// Cookie carrying a freshly issued session token.
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Removal cookie matching `session_cookie`'s path.
pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE_NAME).path("/").build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc".to_string(), false);
        assert_eq!(cookie.name(), "session");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.secure(), Some(false));

        assert_eq!(session_cookie("abc".to_string(), true).secure(), Some(true));
    }

    #[test]
    fn test_current_user_from_user() {
        let user = User {
            id: 3,
            username: "carol".to_string(),
            password_hash: "$argon2id$...".to_string(),
            role: "staff".to_string(),
        };
        let current = CurrentUser::new(user, "tok".to_string());

        assert_eq!(current.id, 3);
        assert_eq!(current.username, "carol");
        assert_eq!(current.role, "staff");
        assert_eq!(current.session_token, "tok");
        assert!(!format!("{:?}", current).contains("argon2"));
    }
}
