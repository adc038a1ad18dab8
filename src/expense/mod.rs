//! Expense management for the expense dashboard.
//!
//! This module contains everything related to expenses:
//! - The `Expense` model and the closed `Category` enumeration
//! - Database functions for storing, listing, merging, and deleting expenses
//! - The HTTP endpoints for the expense operations

mod core;
mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod update_endpoint;

pub use core::{
    Category, Expense, create_expense, create_expenses_table, delete_expense, get_expense,
    list_expenses, map_expense_row, parse_expense_id, update_expense,
};
pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use list_endpoint::{ExpenseListResponse, list_expenses_endpoint};
pub use update_endpoint::update_expense_endpoint;
