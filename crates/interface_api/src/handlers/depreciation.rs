//! Depreciation handlers

use axum::{extract::State, Json};
use validator::Validate;

use domain_asset::{calculate_depreciation, schedule_summary, DepreciationMethod, DepreciationResult};

use crate::dto::depreciation::*;
use crate::{error::ApiError, AppState};

/// Lists the supported methods with their descriptions
pub async fn list_methods() -> Json<Vec<MethodResponse>> {
    Json(
        DepreciationMethod::ALL
            .iter()
            .map(|method| MethodResponse {
                method: *method,
                description: method.description().to_string(),
            })
            .collect(),
    )
}

/// Values an asset, as of the request's instant or now
pub async fn value_asset(
    State(state): State<AppState>,
    Json(request): Json<ValuationRequest>,
) -> Result<Json<DepreciationResult>, ApiError> {
    let result = match request.as_of {
        Some(as_of) => calculate_depreciation(&request.asset, as_of)?,
        None => state.engine.calculate(&request.asset)?,
    };
    Ok(Json(result))
}

/// Projects the lifetime schedule of an asset
pub async fn project_schedule(
    State(state): State<AppState>,
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<ScheduleResponse>, ApiError> {
    request.validate()?;

    let entries = state.engine.schedule(&request.asset, request.years)?;
    let summary = schedule_summary(&entries);

    Ok(Json(ScheduleResponse { entries, summary }))
}
