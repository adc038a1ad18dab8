//! Sitecost is a small dashboard server for tracking construction and
//! interior-design projects and the expenses logged against them.
//!
//! This library provides a JSON REST API backed by SQLite, plus the client
//! plumbing the dashboard uses to keep its view of the data consistent.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod database_id;
mod db;
pub mod endpoints;
mod error;
mod expense;
mod project;
mod routing;
pub mod validation;

pub mod client;

pub use app_state::AppState;
pub use database_id::DatabaseId;
pub use db::initialize as initialize_db;
pub use error::Error;
pub use expense::{Category, Expense};
pub use project::{DEFAULT_PROJECT_STATUS, Project, ProjectDetail, ProjectSummary};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
