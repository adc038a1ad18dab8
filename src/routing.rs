//! Defines the routes of the REST API and how to handle each request.

use axum::{
    Json, Router,
    response::{IntoResponse, Response},
    routing::{get, patch},
};
use serde_json::json;

use crate::{
    AppState, endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, list_expenses_endpoint,
        update_expense_endpoint,
    },
    project::{create_project_endpoint, get_project_endpoint, list_projects_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(get_health))
        .route(
            endpoints::PROJECTS,
            get(list_projects_endpoint).post(create_project_endpoint),
        )
        .route(endpoints::PROJECT, get(get_project_endpoint))
        .route(
            endpoints::PROJECT_EXPENSES,
            get(list_expenses_endpoint).post(create_expense_endpoint),
        )
        .route(
            endpoints::EXPENSE,
            patch(update_expense_endpoint).delete(delete_expense_endpoint),
        )
        .with_state(state)
}

/// Report that the server is up and serving requests.
async fn get_health() -> Response {
    Json(json!({ "status": "ok" })).into_response()
}

#[cfg(test)]
mod health_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{AppState, build_router, endpoints};

    #[tokio::test]
    async fn health_reports_ok() {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(connection).expect("Could not initialize database.");
        let server =
            TestServer::new(build_router(state)).expect("Could not create test server.");

        let response = server.get(endpoints::HEALTH).await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
    }
}
