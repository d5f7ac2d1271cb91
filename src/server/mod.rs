//! REST API
//!
//! JSON over HTTP on top of `LedgerUseCase`:
//!
//! - `GET/POST /api/trips`, `PUT/DELETE /api/trips/{ref}`
//! - `GET/POST /api/expenses`, `PUT/DELETE /api/expenses/{ref}`
//! - `GET/POST /api/templates`, `PUT/DELETE /api/templates/{ref}`,
//!   `POST /api/templates/{ref}/trips`
//! - `GET /api/summaries[?week=YYYY-MM-DD]`, `GET /api/totals`
//! - `GET /health`
//!
//! `{ref}` is a list index or a record id.

mod dtos;
mod error;
mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::application::LedgerUseCase;

pub use dtos::{
    ExpenseRequest, Indexed, InstantiateRequest, SummaryQuery, TemplateRequest, TripRequest,
};
pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<LedgerUseCase>,
}

impl AppState {
    pub fn new(ledger: Arc<LedgerUseCase>) -> Self {
        Self { ledger }
    }
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/trips",
            get(handlers::list_trips).post(handlers::create_trip),
        )
        .route(
            "/trips/{reference}",
            put(handlers::update_trip).delete(handlers::delete_trip),
        )
        .route(
            "/expenses",
            get(handlers::list_expenses).post(handlers::create_expense),
        )
        .route(
            "/expenses/{reference}",
            put(handlers::update_expense).delete(handlers::delete_expense),
        )
        .route(
            "/templates",
            get(handlers::list_templates).post(handlers::create_template),
        )
        .route(
            "/templates/{reference}",
            put(handlers::update_template).delete(handlers::delete_template),
        )
        .route(
            "/templates/{reference}/trips",
            post(handlers::create_trip_from_template),
        )
        .route("/summaries", get(handlers::list_summaries))
        .route("/totals", get(handlers::totals));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api)
        .with_state(state)
}

/// Serve the API on `addr` until Ctrl-C.
pub async fn serve(addr: &str, ledger: Arc<LedgerUseCase>) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(
        addr = %listener.local_addr()?,
        data_file = %ledger.location().display(),
        rate_per_mile = ledger.rate_per_mile(),
        "server listening"
    );

    axum::serve(listener, router(AppState::new(ledger)))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(e) => {
            warn!(error = %e, "cannot listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
