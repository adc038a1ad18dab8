//! Endpoint for deleting an expense.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    expense::{delete_expense, parse_expense_id},
};

/// Handle expense deletion requests.
pub async fn delete_expense_endpoint(
    State(state): State<AppState>,
    Path(expense_id): Path<String>,
) -> Result<Response, Error> {
    let expense_id = parse_expense_id(&expense_id)?;

    let connection = state.connection()?;
    delete_expense(expense_id, &connection)?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
