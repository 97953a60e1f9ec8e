//! Authentication extractor for browser routes

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use std::sync::Arc;

use crate::AppState;
use crate::domain::users;
use crate::services::error::LogErr;
use crate::services::session::{self, ACCESS_TOKEN_COOKIE};

/// Extractor that validates the access_token cookie and returns the user_id.
///
/// Requests without a valid session, or whose user no longer exists, are
/// redirected to the login URL.
pub struct AuthUser(pub i64);

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let to_login = || Redirect::to(&state.login_url).into_response();

        let user_id = {
            let jar = CookieJar::from_headers(&parts.headers);
            let access_token = jar.get(ACCESS_TOKEN_COOKIE).ok_or_else(to_login)?;

            session::validate_access_token(access_token.value(), &state.jwt_secret).map_err(|e| {
                tracing::debug!(error = %e, "Rejected access token");
                to_login()
            })?
        };

        let user = users::get_user_by_id(&state.db, user_id)
            .await
            .log_500("Get user by ID error")
            .map_err(|e| e.into_response())?;

        // A valid token for a deleted user is still unauthenticated
        match user {
            Some(_) => Ok(AuthUser(user_id)),
            None => Err(to_login()),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header};

    use crate::routes::names;
    use crate::test_support::{TestApp, auth_cookie};

    #[tokio::test]
    async fn test_missing_cookie_redirects_to_login() {
        let app = TestApp::new().await;

        let response = app.get(&names::tweets_index(), None).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }

    #[tokio::test]
    async fn test_token_for_unknown_user_redirects_to_login() {
        let app = TestApp::new().await;

        let response = app
            .get_with_cookie(&names::tweets_index(), &auth_cookie(4242))
            .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_bad_token_redirects_to_login() {
        let app = TestApp::new().await;

        let response = app
            .get_with_cookie(&names::tweets_index(), "access_token=forged")
            .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }
}
