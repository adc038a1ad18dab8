//! Endpoint for updating an expense.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::{
    AppState, Error,
    expense::{parse_expense_id, update_expense},
    validation::validate_expense_patch,
};

/// Handle partial expense updates.
///
/// The payload is validated before the expense is looked up, so a malformed
/// patch against a missing expense reports the validation errors.
pub async fn update_expense_endpoint(
    State(state): State<AppState>,
    Path(expense_id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Response, Error> {
    let patch = validate_expense_patch(&payload).map_err(Error::Validation)?;
    let expense_id = parse_expense_id(&expense_id)?;

    let connection = state.connection()?;
    let expense = update_expense(expense_id, patch, &connection)?;

    Ok(Json(expense).into_response())
}
