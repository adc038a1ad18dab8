//! Endpoint for recording an expense against a project.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::{
    AppState, Error,
    expense::create_expense,
    project::{get_project, parse_project_id},
    validation::validate_expense_input,
};

/// Handle expense creation requests.
///
/// The project is looked up before inserting so that an expense can never be
/// recorded against a project that does not exist.
pub async fn create_expense_endpoint(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Response, Error> {
    let data = validate_expense_input(&payload).map_err(Error::Validation)?;
    let project_id = parse_project_id(&project_id)?;

    let connection = state.connection()?;
    get_project(project_id, &connection)?;
    let expense = create_expense(project_id, data, &connection)?;

    Ok((StatusCode::CREATED, Json(expense)).into_response())
}

#[cfg(test)]
mod create_expense_endpoint_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{
        AppState, build_router,
        endpoints::{self, format_endpoint},
        expense::{Category, Expense},
    };

    fn new_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(connection).expect("Could not initialize database.");

        TestServer::new(build_router(state)).expect("Could not create test server.")
    }

    async fn create_test_project(server: &TestServer) -> i64 {
        server
            .post(endpoints::PROJECTS)
            .json(&json!({
                "name": "Villa A",
                "clientName": "Acme",
                "estimatedBudget": 100_000,
            }))
            .await
            .json::<Value>()["id"]
            .as_i64()
            .expect("project should have an integer id")
    }

    #[tokio::test]
    async fn create_expense_normalizes_category_case() {
        let server = new_test_server();
        let project_id = create_test_project(&server).await;

        let response = server
            .post(&format_endpoint(endpoints::PROJECT_EXPENSES, project_id))
            .json(&json!({
                "description": "Cement",
                "amount": 125.50,
                "category": "Material",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);

        let expense = response.json::<Expense>();
        assert_eq!(expense.project_id, project_id);
        assert_eq!(expense.description, "Cement");
        assert_eq!(expense.amount, 125.50);
        assert_eq!(expense.category, Category::Material);
    }

    #[tokio::test]
    async fn create_expense_returns_not_found_for_unknown_project() {
        let server = new_test_server();

        let response = server
            .post(&format_endpoint(endpoints::PROJECT_EXPENSES, 1337))
            .json(&json!({
                "description": "Cement",
                "amount": 500,
                "category": "material",
            }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(
            response.json::<Value>()["error"],
            json!("Project not found.")
        );
    }

    #[tokio::test]
    async fn create_expense_returns_not_found_for_non_numeric_project_id() {
        let server = new_test_server();

        let response = server
            .post("/projects/does-not-exist/expenses")
            .json(&json!({
                "description": "Cement",
                "amount": 500,
                "category": "material",
            }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(
            response.json::<Value>()["error"],
            json!("Project not found.")
        );
    }

    #[tokio::test]
    async fn create_expense_reports_all_validation_errors() {
        let server = new_test_server();
        let project_id = create_test_project(&server).await;

        let response = server
            .post(&format_endpoint(endpoints::PROJECT_EXPENSES, project_id))
            .json(&json!({ "amount": "not a number", "category": "travel" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let body = response.json::<Value>();
        let errors = body
            .get("errors")
            .and_then(Value::as_array)
            .expect("body should contain an errors array");
        assert_eq!(errors.len(), 3);
    }
}
