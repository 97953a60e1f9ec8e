//! Shared fixtures for route and query tests

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::Request,
    http::{Method, header},
    middleware,
    response::Response,
};
use http_body_util::BodyExt;
use serde::Serialize;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::{Layer, ServiceExt};

use crate::AppState;
use crate::domain::users::{self, User};
use crate::routes::{self, method_override::method_override};
use crate::services::db;
use crate::services::session::{self, ACCESS_TOKEN_COOKIE};
use crate::views::RenderedView;

pub const TEST_SECRET: &str = "test-secret-test-secret-test-secret";

/// Fresh in-memory database with migrations applied
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    // One connection that never expires, so the in-memory database lives as long as the pool
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    db::migrate(&pool).await.unwrap();
    pool
}

pub async fn seed_user(pool: &SqlitePool, name: &str) -> User {
    users::create_user(pool, name, &format!("{name}@example.com"))
        .await
        .unwrap()
}

/// Cookie header value authenticating `user_id`
pub fn auth_cookie(user_id: i64) -> String {
    let token = session::create_access_token(user_id, TEST_SECRET.as_bytes()).unwrap();
    format!("{ACCESS_TOKEN_COOKIE}={token}")
}

pub fn to_json<T: Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap()
}

pub fn rendered(response: &Response) -> &RenderedView {
    response
        .extensions()
        .get::<RenderedView>()
        .expect("response was not rendered from a view")
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// The app under test plus a handle on its database
pub struct TestApp {
    pub pool: SqlitePool,
    pub router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = test_pool().await;
        let state = Arc::new(AppState {
            db: pool.clone(),
            jwt_secret: TEST_SECRET.as_bytes().to_vec(),
            login_url: "/login".to_string(),
        });

        Self {
            pool,
            router: routes::build_app(state),
        }
    }

    pub async fn send(&self, request: Request) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str, user_id: Option<i64>) -> Response {
        self.send(build_request(Method::GET, uri, user_id.map(auth_cookie), None))
            .await
    }

    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> Response {
        self.send(build_request(Method::GET, uri, Some(cookie.to_string()), None))
            .await
    }

    pub async fn post_form(&self, uri: &str, user_id: Option<i64>, form: &str) -> Response {
        self.send(build_request(Method::POST, uri, user_id.map(auth_cookie), Some(form)))
            .await
    }

    pub async fn put_form(&self, uri: &str, user_id: Option<i64>, form: &str) -> Response {
        self.send(build_request(Method::PUT, uri, user_id.map(auth_cookie), Some(form)))
            .await
    }

    pub async fn delete(&self, uri: &str, user_id: Option<i64>) -> Response {
        self.send(build_request(Method::DELETE, uri, user_id.map(auth_cookie), None))
            .await
    }

    /// POST through the method override middleware, the way a browser form submits
    pub async fn post_form_with_override(
        &self,
        uri: &str,
        user_id: Option<i64>,
        form: &str,
    ) -> Response {
        let service = middleware::from_fn(method_override).layer(self.router.clone());
        service
            .oneshot(build_request(Method::POST, uri, user_id.map(auth_cookie), Some(form)))
            .await
            .unwrap()
    }
}

fn build_request(method: Method, uri: &str, cookie: Option<String>, form: Option<&str>) -> Request {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let body = match form {
        Some(form) => {
            builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
            Body::from(form.to_string())
        }
        None => Body::empty(),
    };

    builder.body(body).unwrap()
}
