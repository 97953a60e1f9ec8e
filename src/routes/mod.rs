pub mod auth;
pub mod method_override;
pub mod names;
pub mod tweets;

use axum::{
    Router,
    response::{Redirect, Response},
    routing::get,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::AppState;
use crate::views::RenderedView;

/// Build all routes for the app
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .merge(tweets::routes())
}

/// Routes with request tracing and state attached, ready to serve
pub fn build_app(state: Arc<AppState>) -> Router {
    build_routes()
        .layer(TraceLayer::new_for_http().on_response(log_response))
        .with_state(state)
}

/// Log status, latency and, for pages, the view name with its bound keys
fn log_response(response: &Response, latency: Duration, _span: &Span) {
    let view = response.extensions().get::<RenderedView>();

    tracing::info!(
        status = %response.status(),
        latency_ms = latency.as_millis() as u64,
        view = view.map(|v| v.name),
        bound = ?view.map(|v| v.data.keys().collect::<Vec<_>>()),
        "Response sent"
    );
}

async fn home() -> Redirect {
    Redirect::to(&names::tweets_index())
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestApp;
    use crate::views::View;
    use axum::{http::StatusCode, response::IntoResponse};

    #[test]
    fn test_log_response_handles_pages_and_plain_bodies() {
        let page = View::new("tweets.index", String::new())
            .with("tweets", &Vec::<i64>::new())
            .into_response();
        let plain = "ok".into_response();

        assert!(page.extensions().get::<RenderedView>().is_some());
        log_response(&page, Duration::from_millis(3), &Span::none());
        log_response(&plain, Duration::ZERO, &Span::none());
    }

    #[tokio::test]
    async fn test_home_redirects_to_tweets() {
        let app = TestApp::new().await;

        let response = app.get("/", None).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], names::tweets_index());
    }
}
