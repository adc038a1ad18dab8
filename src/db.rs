/*! Database schema setup for the application. */

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{Error, expense::create_expenses_table, project::create_projects_table};

/// Create the application tables if they do not already exist.
///
/// # Errors
/// Returns an error if the schema statements fail.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_projects_table(&transaction)?;
    create_expenses_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
