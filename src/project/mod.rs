//! Project management for the expense dashboard.
//!
//! This module contains everything related to projects:
//! - The `Project` model and its derived-totals views
//! - Database functions for storing and aggregating projects
//! - The HTTP endpoints for creating, listing, and fetching projects

mod core;
mod create_endpoint;
mod detail_endpoint;
mod list_endpoint;

pub use core::{
    DEFAULT_PROJECT_STATUS, Project, ProjectDetail, ProjectSummary, create_project,
    create_projects_table, get_project, list_projects, map_project_row, parse_project_id,
};
pub use create_endpoint::create_project_endpoint;
pub use detail_endpoint::get_project_endpoint;
pub use list_endpoint::{ProjectListResponse, list_projects_endpoint};
