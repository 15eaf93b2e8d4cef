//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   GET    /api/employees
//!   POST   /api/employee
//!   GET    /api/employee/{id}
//!   PUT    /api/employee/{id}
//!   DELETE /api/employee/{id}
//!   GET    /api/departments
//!   GET    /api/positions
//!   GET    /api/geographies
//!   GET    /api/provinces
//!   GET    /api/districts
//!   GET    /api/subdistricts

pub mod error;
pub mod handlers;

use std::net::SocketAddr;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use db::DbPool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub use error::ApiError;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: DbPool,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Build the full router with CORS and request tracing applied.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/employees", get(handlers::employees::list))
        .route("/employee", post(handlers::employees::create))
        .route(
            "/employee/:id",
            get(handlers::employees::get)
                .put(handlers::employees::update)
                .delete(handlers::employees::delete),
        )
        .route("/departments", get(handlers::lookups::departments))
        .route("/positions", get(handlers::lookups::positions))
        .route("/geographies", get(handlers::lookups::geographies))
        .route("/provinces", get(handlers::lookups::provinces))
        .route("/districts", get(handlers::lookups::districts))
        .route("/subdistricts", get(handlers::lookups::sub_districts));

    Router::new()
        .nest("/api", api)
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

/// Bind `addr` and serve until ctrl-c.
pub async fn serve(addr: SocketAddr, pool: DbPool) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");

    axum::serve(listener, router(AppState::new(pool)))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
