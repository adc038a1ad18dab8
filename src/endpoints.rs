//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/projects/{project_id}', use
//! [format_endpoint].

use crate::DatabaseId;

/// The health check route for load balancers and uptime monitors.
pub const HEALTH: &str = "/health";
/// The route to create and list projects.
pub const PROJECTS: &str = "/projects";
/// The route to fetch a single project with its expenses.
pub const PROJECT: &str = "/projects/{project_id}";
/// The route to create and list expenses under a project.
pub const PROJECT_EXPENSES: &str = "/projects/{project_id}/expenses";
/// The route to update or delete a single expense.
pub const EXPENSE: &str = "/expenses/{expense_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/projects/{project_id}',
/// '{project_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: DatabaseId) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know the routes will parse as URIs.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::HEALTH);
        assert_endpoint_is_valid_uri(endpoints::PROJECTS);
        assert_endpoint_is_valid_uri(endpoints::PROJECT);
        assert_endpoint_is_valid_uri(endpoints::PROJECT_EXPENSES);
        assert_endpoint_is_valid_uri(endpoints::EXPENSE);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint(endpoints::PROJECT, 1);

        assert_eq!(formatted_path, "/projects/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint(endpoints::PROJECT_EXPENSES, 7);

        assert_eq!(formatted_path, "/projects/7/expenses");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint(endpoints::PROJECTS, 1);

        assert_eq!(formatted_path, "/projects");
    }
}
