/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Handlers for the lead endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use leads_types::{Lead, NewLead};
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::state::AppState;

fn candidate_from_body(body: Value) -> Result<Map<String, Value>, AppError> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::malformed_body("Expected object")),
    }
}

/// POST /api/leads
///
/// The body is re-validated here with the same rules the form applies;
/// nothing the client claims is trusted.
pub async fn create_lead(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Lead>), AppError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!("Rejected lead body: {rejection}");
        AppError::malformed_body(&rejection.body_text())
    })?;

    let candidate = candidate_from_body(body)?;
    let new_lead = NewLead::from_candidate(&candidate).map_err(|errors| {
        tracing::debug!("Lead failed validation: {}", errors.summary());
        AppError::validation(&errors)
    })?;

    let lead = state.store.create(new_lead).await.map_err(|err| {
        tracing::error!("Error creating lead: {err}");
        AppError::save_failed()
    })?;

    tracing::info!(lead_id = %lead.id, "Lead captured");
    Ok((StatusCode::CREATED, Json(lead)))
}

/// GET /api/leads
///
/// Unfiltered and unauthenticated; meant for internal use only.
pub async fn list_leads(State(state): State<AppState>) -> Result<Json<Vec<Lead>>, AppError> {
    let leads = state.store.list_all().await.map_err(|err| {
        tracing::error!("Error fetching leads: {err}");
        AppError::fetch_failed()
    })?;
    Ok(Json(leads))
}
