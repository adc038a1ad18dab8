//! The HTTP side of the dashboard client.

use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    DatabaseId,
    endpoints::{self, format_endpoint},
    expense::{Category, Expense, ExpenseListResponse},
    project::{ProjectDetail, ProjectListResponse, ProjectSummary},
};

/// The errors an [`ApiClient`] call can produce.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server could not find the requested resource.
    #[error("{0}")]
    NotFound(String),
    /// The server rejected the request payload.
    #[error("invalid request: {0:?}")]
    Validation(Vec<String>),
    /// The server failed while handling the request.
    #[error("server error: {0}")]
    Server(String),
    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The base URL and the endpoint path could not be combined.
    #[error("invalid url: {0}")]
    Url(String),
}

/// An error body from the server, in either of its two shapes.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    errors: Option<Vec<String>>,
}

/// The fields of an expense that a partial update may change.
///
/// Fields left as `None` are omitted from the request and keep their
/// current values on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseChanges {
    /// A new description for the expense.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A new amount for the expense.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// A new category for the expense.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// A client for the project and expense endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client that sends requests to the server at `base_url`.
    ///
    /// # Errors
    /// Returns an error if `base_url` is not a valid URL.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            base_url: Url::parse(base_url).map_err(|err| ClientError::Url(err.to_string()))?,
            http: reqwest::Client::new(),
        })
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::Url(err.to_string()))
    }

    /// Fetch all projects with their derived totals.
    pub async fn list_projects(&self) -> Result<Vec<ProjectSummary>, ClientError> {
        let url = self.endpoint_url(endpoints::PROJECTS)?;
        let response = self.http.get(url).send().await?;

        Ok(decode::<ProjectListResponse>(response).await?.projects)
    }

    /// Fetch one project together with its full expense list.
    pub async fn get_project(&self, project_id: DatabaseId) -> Result<ProjectDetail, ClientError> {
        let url = self.endpoint_url(&format_endpoint(endpoints::PROJECT, project_id))?;
        let response = self.http.get(url).send().await?;

        decode(response).await
    }

    /// Create a project and return it with its zeroed totals.
    pub async fn create_project(
        &self,
        name: &str,
        client_name: &str,
        estimated_budget: f64,
    ) -> Result<ProjectSummary, ClientError> {
        let url = self.endpoint_url(endpoints::PROJECTS)?;
        let response = self
            .http
            .post(url)
            .json(&serde_json::json!({
                "name": name,
                "clientName": client_name,
                "estimatedBudget": estimated_budget,
            }))
            .send()
            .await?;

        decode(response).await
    }

    /// Fetch the expenses of a project, newest first.
    pub async fn list_expenses(
        &self,
        project_id: DatabaseId,
    ) -> Result<Vec<Expense>, ClientError> {
        let url =
            self.endpoint_url(&format_endpoint(endpoints::PROJECT_EXPENSES, project_id))?;
        let response = self.http.get(url).send().await?;

        Ok(decode::<ExpenseListResponse>(response).await?.expenses)
    }

    /// Record an expense against a project.
    pub async fn create_expense(
        &self,
        project_id: DatabaseId,
        description: &str,
        amount: f64,
        category: Category,
    ) -> Result<Expense, ClientError> {
        let url =
            self.endpoint_url(&format_endpoint(endpoints::PROJECT_EXPENSES, project_id))?;
        let response = self
            .http
            .post(url)
            .json(&serde_json::json!({
                "description": description,
                "amount": amount,
                "category": category,
            }))
            .send()
            .await?;

        decode(response).await
    }

    /// Apply a partial update to an expense and return the merged result.
    pub async fn update_expense(
        &self,
        expense_id: DatabaseId,
        changes: &ExpenseChanges,
    ) -> Result<Expense, ClientError> {
        let url = self.endpoint_url(&format_endpoint(endpoints::EXPENSE, expense_id))?;
        let response = self.http.patch(url).json(changes).send().await?;

        decode(response).await
    }

    /// Delete an expense.
    pub async fn delete_expense(&self, expense_id: DatabaseId) -> Result<(), ClientError> {
        let url = self.endpoint_url(&format_endpoint(endpoints::EXPENSE, expense_id))?;
        let response = self.http.delete(url).send().await?;

        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        Err(response_error(status, body))
    }
}

/// Decode a success body, or turn an error response into a [`ClientError`].
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.json::<ErrorBody>().await.unwrap_or_default();
    Err(response_error(status, body))
}

fn response_error(status: StatusCode, body: ErrorBody) -> ClientError {
    let message = body.error.unwrap_or_else(|| "unknown error".to_string());

    match status {
        StatusCode::BAD_REQUEST => {
            ClientError::Validation(body.errors.unwrap_or_else(|| vec![message]))
        }
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        _ => ClientError::Server(message),
    }
}
