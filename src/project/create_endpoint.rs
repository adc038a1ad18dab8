//! Endpoint for creating a project.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::{
    AppState, Error,
    project::{ProjectSummary, create_project},
    validation::validate_project_input,
};

/// Handle project creation requests.
///
/// A newly created project has no expenses, so the derived totals are zeroed
/// without consulting the expenses table.
pub async fn create_project_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Response, Error> {
    let data = validate_project_input(&payload).map_err(Error::Validation)?;

    let connection = state.connection()?;
    let project = create_project(data, &connection)?;

    let remaining_budget = project.estimated_budget;
    let summary = ProjectSummary {
        project,
        total_expenses: 0.0,
        remaining_budget,
    };

    Ok((StatusCode::CREATED, Json(summary)).into_response())
}
