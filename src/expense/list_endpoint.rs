//! Endpoint for listing the expenses of a project.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    expense::{Expense, list_expenses},
    project::{get_project, parse_project_id},
};

/// The response body for a project's expense listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseListResponse {
    /// The project's expenses, newest first.
    pub expenses: Vec<Expense>,
}

/// Handle requests for the expense list of a project.
pub async fn list_expenses_endpoint(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Response, Error> {
    let project_id = parse_project_id(&project_id)?;

    let connection = state.connection()?;
    get_project(project_id, &connection)?;
    let expenses = list_expenses(project_id, &connection)?;

    Ok(Json(ExpenseListResponse { expenses }).into_response())
}
