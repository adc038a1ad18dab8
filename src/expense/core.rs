use rusqlite::{Connection, Row, types::Type};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    DatabaseId, Error,
    validation::{ExpensePatch, ValidExpense},
};

/// The closed set of categories an expense can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Building materials and supplies.
    Material,
    /// Contractor and tradesperson time.
    Labor,
    /// Anything that is neither material nor labor.
    Other,
}

impl Category {
    /// Parse a category name, ignoring case and surrounding whitespace.
    ///
    /// Returns [None] for anything outside the closed set.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "material" => Some(Self::Material),
            "labor" => Some(Self::Labor),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// The lowercase name stored in the database and sent over the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Material => "material",
            Self::Labor => "labor",
            Self::Other => "other",
        }
    }
}

/// A single categorized cost entry attributed to one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// The ID of the expense.
    pub id: DatabaseId,
    /// The ID of the project the expense was logged against.
    pub project_id: DatabaseId,
    /// What the money was spent on.
    pub description: String,
    /// The category the expense is filed under.
    pub category: Category,
    /// The amount of money spent.
    pub amount: f64,
    /// When the expense was logged.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Initialize the expenses table and its index.
pub fn create_expenses_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY,
            project_id INTEGER NOT NULL,
            description TEXT NOT NULL,
            category TEXT NOT NULL,
            amount REAL NOT NULL,
            created_at TEXT NOT NULL,
            FOREIGN KEY(project_id) REFERENCES projects(id)
        );

        CREATE INDEX IF NOT EXISTS idx_expenses_project_id ON expenses(project_id);",
    )?;

    Ok(())
}

/// Convert a row of `id, project_id, description, category, amount,
/// created_at` into an [Expense].
pub fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    let raw_category: String = row.get(3)?;
    let category = Category::parse(&raw_category).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            Type::Text,
            format!("unknown expense category {raw_category:?}").into(),
        )
    })?;

    Ok(Expense {
        id: row.get(0)?,
        project_id: row.get(1)?,
        description: row.get(2)?,
        category,
        amount: row.get(4)?,
        created_at: row.get(5)?,
    })
}

/// Insert an expense against a project and return it with its generated ID.
///
/// The caller is responsible for checking that `project_id` refers to an
/// existing project; the foreign key constraint is only a backstop.
///
/// # Errors
/// Returns an error if the insertion fails.
pub fn create_expense(
    project_id: DatabaseId,
    data: ValidExpense,
    connection: &Connection,
) -> Result<Expense, Error> {
    let created_at = OffsetDateTime::now_utc();

    connection.execute(
        "INSERT INTO expenses (project_id, description, category, amount, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        (
            project_id,
            &data.description,
            data.category.as_str(),
            data.amount,
            &created_at,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Expense {
        id,
        project_id,
        description: data.description,
        category: data.category,
        amount: data.amount,
        created_at,
    })
}

/// Retrieve a single expense by ID.
///
/// # Errors
/// Returns [Error::ExpenseNotFound] if `expense_id` does not refer to a
/// stored expense.
pub fn get_expense(expense_id: DatabaseId, connection: &Connection) -> Result<Expense, Error> {
    connection
        .prepare(
            "SELECT id, project_id, description, category, amount, created_at
             FROM expenses
             WHERE id = :id",
        )?
        .query_row(&[(":id", &expense_id)], map_expense_row)
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::ExpenseNotFound,
            error => error.into(),
        })
}

/// Retrieve all expenses for a project, newest first.
///
/// Creation-time ties are broken by ID so the order always reflects insertion
/// order.
pub fn list_expenses(
    project_id: DatabaseId,
    connection: &Connection,
) -> Result<Vec<Expense>, Error> {
    connection
        .prepare(
            "SELECT id, project_id, description, category, amount, created_at
             FROM expenses
             WHERE project_id = :project_id
             ORDER BY created_at DESC, id DESC",
        )?
        .query_map(&[(":project_id", &project_id)], map_expense_row)?
        .map(|maybe_expense| maybe_expense.map_err(|error| error.into()))
        .collect()
}

/// Apply a partial update to an expense and return the full merged row.
///
/// Fields present in the patch override the stored values; absent fields keep
/// them, including the amount, which falls back to the stored value.
///
/// # Errors
/// Returns [Error::ExpenseNotFound] if `expense_id` does not refer to a
/// stored expense.
pub fn update_expense(
    expense_id: DatabaseId,
    patch: ExpensePatch,
    connection: &Connection,
) -> Result<Expense, Error> {
    let mut expense = get_expense(expense_id, connection)?;

    if let Some(description) = patch.description {
        expense.description = description;
    }
    if let Some(category) = patch.category {
        expense.category = category;
    }
    if let Some(amount) = patch.amount {
        expense.amount = amount;
    }

    let rows_affected = connection.execute(
        "UPDATE expenses SET description = ?1, category = ?2, amount = ?3 WHERE id = ?4",
        (
            &expense.description,
            expense.category.as_str(),
            expense.amount,
            expense_id,
        ),
    )?;

    if rows_affected == 0 {
        return Err(Error::ExpenseNotFound);
    }

    Ok(expense)
}

/// Delete an expense by ID.
///
/// # Errors
/// Returns [Error::ExpenseNotFound] if `expense_id` does not refer to a
/// stored expense.
pub fn delete_expense(expense_id: DatabaseId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM expenses WHERE id = ?1", [expense_id])?;

    if rows_affected == 0 {
        return Err(Error::ExpenseNotFound);
    }

    Ok(())
}

/// Parse an expense ID from a URL path segment.
///
/// A segment that does not parse as an ID cannot refer to a stored expense,
/// so it is reported as an unknown expense rather than a malformed request.
pub fn parse_expense_id(raw: &str) -> Result<DatabaseId, Error> {
    raw.parse().map_err(|_| Error::ExpenseNotFound)
}
