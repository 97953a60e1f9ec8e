mod config;
mod domain;
mod logging;
mod routes;
mod services;
#[cfg(test)]
mod test_support;
mod views;

use axum::{ServiceExt, extract::Request, middleware};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::Layer;

use config::Config;
use routes::method_override::method_override;

pub struct AppState {
    pub db: SqlitePool,
    pub jwt_secret: Vec<u8>,
    pub login_url: String,
}

#[tokio::main]
async fn main() {
    logging::init();

    let config = Config::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });

    let pool = services::db::connect(&config)
        .await
        .expect("Failed to connect to database");

    services::db::migrate(&pool)
        .await
        .expect("Failed to run database migrations");

    let state = Arc::new(AppState {
        db: pool,
        jwt_secret: config.jwt_secret.clone().into_bytes(),
        login_url: config.login_url.clone(),
    });

    // Method override has to run before routing, so it wraps the router
    let app = middleware::from_fn(method_override).layer(routes::build_app(state));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {}: {}", addr, e));

    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .await
        .expect("Server failed");
}
