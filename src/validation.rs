//! Pure validators for the JSON API's request payloads.
//!
//! Payloads arrive untyped ([serde_json::Value]) because the API accepts
//! loosely shaped input, e.g. numeric strings for money fields. Each
//! validator checks every field and accumulates one message per failure so a
//! single response can report all of the problems with a payload. None of
//! these functions touch storage.

use serde_json::Value;

use crate::expense::Category;

/// A normalized payload for creating a project.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidProject {
    /// The project name, trimmed.
    pub name: String,
    /// The client the project is for, trimmed.
    pub client_name: String,
    /// The estimated budget, guaranteed non-negative and finite.
    pub estimated_budget: f64,
}

/// A normalized payload for creating an expense.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidExpense {
    /// What the money was spent on, trimmed.
    pub description: String,
    /// The amount spent, guaranteed non-negative and finite.
    pub amount: f64,
    /// The normalized expense category.
    pub category: Category,
}

/// The fields of an expense partial-update that were supplied and valid.
///
/// Absent fields keep their stored values when the patch is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpensePatch {
    /// Replacement description, if supplied.
    pub description: Option<String>,
    /// Replacement amount, if supplied.
    pub amount: Option<f64>,
    /// Replacement category, if supplied.
    pub category: Option<Category>,
}

impl ExpensePatch {
    /// Whether the patch contains no fields to apply.
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.amount.is_none() && self.category.is_none()
    }
}

/// Validate a project creation payload.
///
/// # Errors
/// Returns one message per failing field, all accumulated.
pub fn validate_project_input(payload: &Value) -> Result<ValidProject, Vec<String>> {
    let mut errors = Vec::new();

    let name = non_empty_string(payload.get("name"));
    if name.is_none() {
        errors.push("Project name is required.".to_owned());
    }

    let client_name = non_empty_string(payload.get("clientName"));
    if client_name.is_none() {
        errors.push("Client name is required.".to_owned());
    }

    let estimated_budget = parse_amount(payload.get("estimatedBudget"));
    if estimated_budget.is_none() {
        errors.push("Estimated budget must be a non-negative number.".to_owned());
    }

    match (name, client_name, estimated_budget) {
        (Some(name), Some(client_name), Some(estimated_budget)) => Ok(ValidProject {
            name,
            client_name,
            estimated_budget,
        }),
        _ => Err(errors),
    }
}

/// Validate an expense creation payload.
///
/// # Errors
/// Returns one message per failing field, all accumulated.
pub fn validate_expense_input(payload: &Value) -> Result<ValidExpense, Vec<String>> {
    let mut errors = Vec::new();

    let description = non_empty_string(payload.get("description"));
    if description.is_none() {
        errors.push("Expense description is required.".to_owned());
    }

    let amount = parse_amount(payload.get("amount"));
    if amount.is_none() {
        errors.push("Amount must be a non-negative number.".to_owned());
    }

    let category = parse_category(payload.get("category"));
    if category.is_none() {
        errors.push("Category must be material, labor, or other.".to_owned());
    }

    match (description, amount, category) {
        (Some(description), Some(amount), Some(category)) => Ok(ValidExpense {
            description,
            amount,
            category,
        }),
        _ => Err(errors),
    }
}

/// Validate an expense partial-update payload.
///
/// Each field is optional; supplied fields are checked with the same rules as
/// creation. A patch that supplies zero recognized fields is an error.
///
/// # Errors
/// Returns one message per failing field, all accumulated.
pub fn validate_expense_patch(payload: &Value) -> Result<ExpensePatch, Vec<String>> {
    let mut errors = Vec::new();
    let mut patch = ExpensePatch::default();

    if let Some(value) = payload.get("description") {
        match non_empty_string(Some(value)) {
            Some(description) => patch.description = Some(description),
            None => errors.push("Description must be a non-empty string.".to_owned()),
        }
    }

    if let Some(value) = payload.get("amount") {
        match parse_amount(Some(value)) {
            Some(amount) => patch.amount = Some(amount),
            None => errors.push("Amount must be a non-negative number.".to_owned()),
        }
    }

    if let Some(value) = payload.get("category") {
        match parse_category(Some(value)) {
            Some(category) => patch.category = Some(category),
            None => errors.push("Category must be material, labor, or other.".to_owned()),
        }
    }

    if patch.is_empty() {
        errors.push("Provide at least one field to update.".to_owned());
    }

    if errors.is_empty() { Ok(patch) } else { Err(errors) }
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    let text = value?.as_str()?.trim();

    if text.is_empty() {
        None
    } else {
        Some(text.to_owned())
    }
}

/// Coerce a JSON value to a non-negative, finite amount of money.
///
/// Numeric strings are accepted; NaN, infinities, negatives, and anything
/// that is not a number are rejected uniformly.
fn parse_amount(value: Option<&Value>) -> Option<f64> {
    let amount = match value? {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse().ok()?,
        _ => return None,
    };

    (amount.is_finite() && amount >= 0.0).then_some(amount)
}

fn parse_category(value: Option<&Value>) -> Option<Category> {
    Category::parse(value?.as_str()?)
}



#[cfg(test)]
mod validate_expense_patch_tests {
    use serde_json::json;

    use crate::expense::Category;

    use super::validate_expense_patch;

    #[test]
    fn accepts_single_field() {
        let patch = validate_expense_patch(&json!({ "amount": 700 }))
            .expect("patch should be valid");

        assert_eq!(patch.amount, Some(700.0));
        assert_eq!(patch.description, None);
        assert_eq!(patch.category, None);
    }

    #[test]
    fn accepts_all_fields() {
        let patch = validate_expense_patch(&json!({
            "description": " Paint ",
            "amount": "12.5",
            "category": "Other",
        }))
        .expect("patch should be valid");

        assert_eq!(patch.description.as_deref(), Some("Paint"));
        assert_eq!(patch.amount, Some(12.5));
        assert_eq!(patch.category, Some(Category::Other));
    }

    #[test]
    fn rejects_empty_patch() {
        let errors =
            validate_expense_patch(&json!({})).expect_err("empty patch should be invalid");

        assert_eq!(errors, vec!["Provide at least one field to update.".to_owned()]);
    }

    #[test]
    fn ignores_unrecognized_fields() {
        let errors = validate_expense_patch(&json!({ "projectId": 9 }))
            .expect_err("patch with only unknown fields should be invalid");

        assert_eq!(errors, vec!["Provide at least one field to update.".to_owned()]);
    }

    #[test]
    fn rejects_null_description() {
        let errors = validate_expense_patch(&json!({ "description": null }))
            .expect_err("null description should be invalid");

        assert!(errors.contains(&"Description must be a non-empty string.".to_owned()));
    }

    #[test]
    fn rejects_invalid_amount_even_with_valid_sibling() {
        let errors = validate_expense_patch(&json!({
            "description": "Paint",
            "amount": -5,
        }))
        .expect_err("negative amount should be invalid");

        assert_eq!(
            errors,
            vec!["Amount must be a non-negative number.".to_owned()]
        );
    }
}
