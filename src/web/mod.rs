//! Web layer module
//!
//! This module provides the HTTP interface for the jobs API. Handlers are
//! thin: they validate the request at the boundary and delegate to the job
//! repository.
//!
//! # Architecture
//!
//! - **Handlers**: HTTP request handlers organized by domain
//! - **Responses**: Response envelopes and error mapping
//! - **Extractors**: Request validation and the admin gate
//! - **Middleware**: Request logging and bearer-token authentication
//! - **Utils**: Path parameter parsing

use anyhow::Result;
use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    config::Config,
    database::Database,
    repositories::{DynJobRepository, JobRepository},
};

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod responses;
pub mod utils;

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: Config, database: Database) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;
        let app = Self::create_router(AppState::new(config, database));

        Ok(Self { app, addr })
    }

    /// Create the router with all routes and middleware
    pub fn create_router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(handlers::health::health_check))
            .route(
                "/jobs",
                get(handlers::jobs::list_jobs).post(handlers::jobs::create_job),
            )
            .route(
                "/jobs/:id",
                get(handlers::jobs::get_job)
                    .patch(handlers::jobs::update_job)
                    .delete(handlers::jobs::delete_job),
            )
            .fallback(not_found)
            // Middleware (applied in reverse order)
            .layer(from_fn_with_state(state.clone(), middleware::authenticate))
            .layer(from_fn(middleware::request_logging_middleware))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Start the web server and run until Ctrl+C
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("Web server listening on {}", self.addr);

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down gracefully"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}

async fn not_found() -> impl axum::response::IntoResponse {
    responses::not_found("Not Found")
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub config: Config,
    pub jobs: DynJobRepository,
}

impl AppState {
    pub fn new(config: Config, database: Database) -> Self {
        let jobs: DynJobRepository = Arc::new(JobRepository::new(database.pool()));
        Self {
            database,
            config,
            jobs,
        }
    }
}
