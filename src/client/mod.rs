//! A client for the dashboard REST API.
//!
//! [`ApiClient`] talks to the server over HTTP, and [`DashboardState`] holds
//! the fetched data between calls: project summaries, lazily loaded expense
//! lists, and the portfolio-wide summary cards. The state applies expense
//! changes as deltas so the dashboard stays current without refetching the
//! project list after every edit.

mod api;
mod state;

pub use api::{ApiClient, ClientError, ExpenseChanges};
pub use state::{DashboardState, ProjectView, SummaryCards};
