use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{DatabaseId, Error, expense::Expense, validation::ValidProject};

/// The status assigned to every project at creation.
///
/// The API never transitions a project out of this status; the column exists
/// so the dashboard can display it and future tooling can change it.
pub const DEFAULT_PROJECT_STATUS: &str = "active";

/// A tracked job with a client and an estimated budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// The ID of the project.
    pub id: DatabaseId,
    /// The name of the project.
    pub name: String,
    /// The client the project is for.
    pub client_name: String,
    /// The budget estimated at creation time. Never mutated by the API.
    pub estimated_budget: f64,
    /// The project status, server-assigned at creation.
    pub status: String,
    /// When the project was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A project row together with its spend totals.
///
/// The totals are derived from the expenses table at query time and are
/// never stored, so they cannot go stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    /// The project row.
    #[serde(flatten)]
    pub project: Project,
    /// The sum of the amounts of all expenses logged against the project.
    pub total_expenses: f64,
    /// The estimated budget minus the total expenses.
    pub remaining_budget: f64,
}

/// A project together with its full expense list, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    /// The project row.
    #[serde(flatten)]
    pub project: Project,
    /// All expenses logged against the project, newest first.
    pub expenses: Vec<Expense>,
}

/// Initialize the projects table.
pub fn create_projects_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS projects (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            client_name TEXT NOT NULL,
            estimated_budget REAL NOT NULL,
            status TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// Convert a row of `id, name, client_name, estimated_budget, status,
/// created_at` into a [Project].
pub fn map_project_row(row: &Row) -> Result<Project, rusqlite::Error> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        client_name: row.get(2)?,
        estimated_budget: row.get(3)?,
        status: row.get(4)?,
        created_at: row.get(5)?,
    })
}

fn map_project_summary_row(row: &Row) -> Result<ProjectSummary, rusqlite::Error> {
    let project = map_project_row(row)?;
    let total_expenses = row.get(6)?;
    let remaining_budget = row.get(7)?;

    Ok(ProjectSummary {
        project,
        total_expenses,
        remaining_budget,
    })
}

/// Insert a project and return it with its generated ID.
///
/// The status and creation time are assigned by the server, never taken from
/// the request.
///
/// # Errors
/// Returns an error if the insertion fails.
pub fn create_project(data: ValidProject, connection: &Connection) -> Result<Project, Error> {
    let created_at = OffsetDateTime::now_utc();

    connection.execute(
        "INSERT INTO projects (name, client_name, estimated_budget, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        (
            &data.name,
            &data.client_name,
            data.estimated_budget,
            DEFAULT_PROJECT_STATUS,
            &created_at,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Project {
        id,
        name: data.name,
        client_name: data.client_name,
        estimated_budget: data.estimated_budget,
        status: DEFAULT_PROJECT_STATUS.to_owned(),
        created_at,
    })
}

/// Retrieve all projects with their spend totals, newest first.
///
/// This is the only aggregation path: expense amounts are summed per project
/// in a single LEFT JOIN query, with projects that have no expenses coalesced
/// to zero, and the remaining budget computed in the same statement.
pub fn list_projects(connection: &Connection) -> Result<Vec<ProjectSummary>, Error> {
    connection
        .prepare(
            "SELECT p.id,
                    p.name,
                    p.client_name,
                    p.estimated_budget,
                    p.status,
                    p.created_at,
                    COALESCE(SUM(e.amount), 0.0) AS total_expenses,
                    p.estimated_budget - COALESCE(SUM(e.amount), 0.0) AS remaining_budget
             FROM projects p
             LEFT JOIN expenses e ON e.project_id = p.id
             GROUP BY p.id
             ORDER BY p.created_at DESC, p.id DESC",
        )?
        .query_map([], map_project_summary_row)?
        .map(|maybe_summary| maybe_summary.map_err(|error| error.into()))
        .collect()
}

/// Retrieve a single project by ID.
///
/// # Errors
/// Returns [Error::ProjectNotFound] if `project_id` does not refer to a
/// stored project.
pub fn get_project(project_id: DatabaseId, connection: &Connection) -> Result<Project, Error> {
    connection
        .prepare(
            "SELECT id, name, client_name, estimated_budget, status, created_at
             FROM projects
             WHERE id = :id",
        )?
        .query_row(&[(":id", &project_id)], map_project_row)
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::ProjectNotFound,
            error => error.into(),
        })
}

/// Parse a project ID from a URL path segment.
///
/// A segment that does not parse as an ID cannot refer to a stored project,
/// so it is reported as an unknown project rather than a malformed request.
pub fn parse_project_id(raw: &str) -> Result<DatabaseId, Error> {
    raw.parse().map_err(|_| Error::ProjectNotFound)
}
