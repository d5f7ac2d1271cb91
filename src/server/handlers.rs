//! Route handlers
//!
//! Ledger calls do blocking file I/O under a lock, so each one runs on the
//! blocking thread pool.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use super::dtos::{
    ExpenseRequest, Indexed, InstantiateRequest, SummaryQuery, TemplateRequest, TripRequest,
};
use super::error::ApiError;
use super::AppState;
use crate::application::LedgerUseCase;
use crate::domain::entities::{Expense, Trip, TripTemplate, WeeklySummary};
use crate::domain::services::Totals;
use crate::domain::value_objects::RecordRef;
use crate::error::{LedgerError, LedgerResult};

async fn run<T, F>(state: &AppState, call: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&LedgerUseCase) -> LedgerResult<T> + Send + 'static,
{
    let ledger = state.ledger.clone();
    Ok(tokio::task::spawn_blocking(move || call(&ledger)).await??)
}

fn record_ref(raw: &str) -> Result<RecordRef, ApiError> {
    raw.parse::<RecordRef>()
        .map_err(|e| ApiError::from(LedgerError::from(e)))
}

pub async fn health() -> &'static str {
    "OK"
}

// Trips

#[instrument(skip(state))]
pub async fn list_trips(
    State(state): State<AppState>,
) -> Result<Json<Vec<Indexed<Trip>>>, ApiError> {
    let trips = run(&state, |ledger| ledger.trips()).await?;
    Ok(Json(Indexed::enumerate(trips)))
}

#[instrument(skip(state, payload))]
pub async fn create_trip(
    State(state): State<AppState>,
    Json(payload): Json<TripRequest>,
) -> Result<(StatusCode, Json<Trip>), ApiError> {
    let trip = payload.into_trip().map_err(LedgerError::from)?;
    let stored = run(&state, move |ledger| ledger.add_trip(trip)).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

#[instrument(skip(state, payload))]
pub async fn update_trip(
    Path(reference): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<TripRequest>,
) -> Result<Json<Trip>, ApiError> {
    let reference = record_ref(&reference)?;
    let trip = payload.into_trip().map_err(LedgerError::from)?;
    let stored = run(&state, move |ledger| ledger.edit_trip(reference, trip)).await?;
    Ok(Json(stored))
}

#[instrument(skip(state))]
pub async fn delete_trip(
    Path(reference): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Trip>, ApiError> {
    let reference = record_ref(&reference)?;
    let removed = run(&state, move |ledger| ledger.delete_trip(reference)).await?;
    Ok(Json(removed))
}

// Expenses

#[instrument(skip(state))]
pub async fn list_expenses(
    State(state): State<AppState>,
) -> Result<Json<Vec<Indexed<Expense>>>, ApiError> {
    let expenses = run(&state, |ledger| ledger.expenses()).await?;
    Ok(Json(Indexed::enumerate(expenses)))
}

#[instrument(skip(state, payload))]
pub async fn create_expense(
    State(state): State<AppState>,
    Json(payload): Json<ExpenseRequest>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let expense = Expense::from(payload);
    let stored = run(&state, move |ledger| ledger.add_expense(expense)).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

#[instrument(skip(state, payload))]
pub async fn update_expense(
    Path(reference): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<ExpenseRequest>,
) -> Result<Json<Expense>, ApiError> {
    let reference = record_ref(&reference)?;
    let expense = Expense::from(payload);
    let stored = run(&state, move |ledger| ledger.edit_expense(reference, expense)).await?;
    Ok(Json(stored))
}

#[instrument(skip(state))]
pub async fn delete_expense(
    Path(reference): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Expense>, ApiError> {
    let reference = record_ref(&reference)?;
    let removed = run(&state, move |ledger| ledger.delete_expense(reference)).await?;
    Ok(Json(removed))
}

// Trip templates

#[instrument(skip(state))]
pub async fn list_templates(
    State(state): State<AppState>,
) -> Result<Json<Vec<Indexed<TripTemplate>>>, ApiError> {
    let templates = run(&state, |ledger| ledger.trip_templates()).await?;
    Ok(Json(Indexed::enumerate(templates)))
}

#[instrument(skip(state, payload))]
pub async fn create_template(
    State(state): State<AppState>,
    Json(payload): Json<TemplateRequest>,
) -> Result<(StatusCode, Json<TripTemplate>), ApiError> {
    let template = payload.into_template().map_err(LedgerError::from)?;
    let stored = run(&state, move |ledger| ledger.add_trip_template(template)).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

#[instrument(skip(state, payload))]
pub async fn update_template(
    Path(reference): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<TemplateRequest>,
) -> Result<Json<TripTemplate>, ApiError> {
    let reference = record_ref(&reference)?;
    let template = payload.into_template().map_err(LedgerError::from)?;
    let stored = run(&state, move |ledger| {
        ledger.edit_trip_template(reference, template)
    })
    .await?;
    Ok(Json(stored))
}

#[instrument(skip(state))]
pub async fn delete_template(
    Path(reference): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<TripTemplate>, ApiError> {
    let reference = record_ref(&reference)?;
    let removed = run(&state, move |ledger| ledger.delete_trip_template(reference)).await?;
    Ok(Json(removed))
}

/// `POST /templates/{ref}/trips`: log a trip along the template's route.
#[instrument(skip(state, payload))]
pub async fn create_trip_from_template(
    Path(reference): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<InstantiateRequest>,
) -> Result<(StatusCode, Json<Trip>), ApiError> {
    let stored = run(&state, move |ledger| {
        ledger.add_trip_from_template(&reference, &payload.date, payload.miles)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

// Reports

#[instrument(skip(state))]
pub async fn list_summaries(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<Vec<WeeklySummary>>, ApiError> {
    let summaries = run(&state, move |ledger| match query.week {
        Some(week) => Ok(ledger.summary_for_week(&week)?.into_iter().collect()),
        None => ledger.weekly_summaries(),
    })
    .await?;
    Ok(Json(summaries))
}

#[instrument(skip(state))]
pub async fn totals(State(state): State<AppState>) -> Result<Json<Totals>, ApiError> {
    let totals = run(&state, |ledger| ledger.totals()).await?;
    Ok(Json(totals))
}
