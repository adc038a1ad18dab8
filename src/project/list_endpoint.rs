//! Endpoint for listing all projects with their spend totals.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    project::{ProjectSummary, list_projects},
};

/// The response body for the project listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectListResponse {
    /// All projects with their derived totals, newest first.
    pub projects: Vec<ProjectSummary>,
}

/// Handle requests for the project list, totals included.
pub async fn list_projects_endpoint(State(state): State<AppState>) -> Result<Response, Error> {
    let connection = state.connection()?;
    let projects = list_projects(&connection)?;

    Ok(Json(ProjectListResponse { projects }).into_response())
}

#[cfg(test)]
mod list_projects_endpoint_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{AppState, build_router, endpoints};

    use super::ProjectListResponse;

    fn new_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(connection).expect("Could not initialize database.");

        TestServer::new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn list_is_empty_for_a_fresh_database() {
        let server = new_test_server();

        let response = server.get(endpoints::PROJECTS).await;

        response.assert_status(StatusCode::OK);
        assert!(response.json::<ProjectListResponse>().projects.is_empty());
    }

    #[tokio::test]
    async fn list_includes_expense_totals() {
        let server = new_test_server();

        let project_id = server
            .post(endpoints::PROJECTS)
            .json(&json!({
                "name": "Villa A",
                "clientName": "Acme",
                "estimatedBudget": 100_000,
            }))
            .await
            .json::<serde_json::Value>()["id"]
            .as_i64()
            .expect("project should have an integer id");

        server
            .post(&crate::endpoints::format_endpoint(
                endpoints::PROJECT_EXPENSES,
                project_id,
            ))
            .json(&json!({
                "description": "Cement",
                "amount": 500,
                "category": "Material",
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let body = server.get(endpoints::PROJECTS).await.json::<ProjectListResponse>();

        assert_eq!(body.projects.len(), 1);
        assert_eq!(body.projects[0].total_expenses, 500.0);
        assert_eq!(body.projects[0].remaining_budget, 99_500.0);
    }

    #[tokio::test]
    async fn list_orders_projects_newest_first() {
        let server = new_test_server();

        for name in ["Villa A", "Loft B"] {
            server
                .post(endpoints::PROJECTS)
                .json(&json!({
                    "name": name,
                    "clientName": "Acme",
                    "estimatedBudget": 1000,
                }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let body = server.get(endpoints::PROJECTS).await.json::<ProjectListResponse>();

        assert_eq!(body.projects[0].project.name, "Loft B");
        assert_eq!(body.projects[1].project.name, "Villa A");
    }
}
