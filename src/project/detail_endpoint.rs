//! Endpoint for fetching a single project with its expenses.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    expense::list_expenses,
    project::{ProjectDetail, get_project, parse_project_id},
};

/// Handle requests for one project and its full expense list.
///
/// The detail view carries the raw expense list rather than recomputing the
/// aggregated totals; callers that need them can derive them from the list.
pub async fn get_project_endpoint(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Response, Error> {
    let project_id = parse_project_id(&project_id)?;

    let connection = state.connection()?;
    let project = get_project(project_id, &connection)?;
    let expenses = list_expenses(project_id, &connection)?;

    Ok(Json(ProjectDetail { project, expenses }).into_response())
}
