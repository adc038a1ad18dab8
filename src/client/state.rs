//! In-memory state for the dashboard.
//!
//! The server owns the data; this state is a cache of what the dashboard has
//! fetched so far. Expense lists are loaded per project on demand, and edits
//! adjust the cached totals by the difference so the summary cards stay
//! correct without another round trip.

use crate::{
    DatabaseId,
    expense::Expense,
    project::ProjectSummary,
};

/// A project as the dashboard sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectView {
    /// The project and its derived totals.
    pub summary: ProjectSummary,
    /// The project's expenses, `None` until they have been fetched.
    pub expenses: Option<Vec<Expense>>,
}

/// The portfolio-wide totals shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SummaryCards {
    /// The sum of every project's estimated budget.
    pub total_budget: f64,
    /// The sum of every project's recorded expenses.
    pub total_spent: f64,
    /// The budget left across all projects.
    pub total_remaining: f64,
}

/// The dashboard's view of the projects and their expenses.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    projects: Vec<ProjectView>,
}

impl DashboardState {
    /// Replace all projects with a freshly fetched list.
    ///
    /// Cached expense lists are discarded since the new summaries may not
    /// match them anymore.
    pub fn replace_projects(&mut self, summaries: Vec<ProjectSummary>) {
        self.projects = summaries
            .into_iter()
            .map(|summary| ProjectView {
                summary,
                expenses: None,
            })
            .collect();
    }

    /// The projects currently known to the dashboard, newest first.
    pub fn projects(&self) -> &[ProjectView] {
        &self.projects
    }

    /// The cached expense list for a project, if it has been fetched.
    pub fn expenses(&self, project_id: DatabaseId) -> Option<&[Expense]> {
        self.view(project_id)?.expenses.as_deref()
    }

    /// Cache the fetched expense list for a project.
    pub fn store_expenses(&mut self, project_id: DatabaseId, expenses: Vec<Expense>) {
        if let Some(view) = self.view_mut(project_id) {
            view.expenses = Some(expenses);
        }
    }

    /// Add a newly created project to the front of the list.
    pub fn insert_project(&mut self, summary: ProjectSummary) {
        self.projects.insert(
            0,
            ProjectView {
                summary,
                expenses: Some(Vec::new()),
            },
        );
    }

    /// Fold a newly created expense into the owning project's totals.
    pub fn apply_created_expense(&mut self, expense: Expense) {
        let Some(view) = self.view_mut(expense.project_id) else {
            return;
        };

        view.summary.total_expenses += expense.amount;
        view.summary.remaining_budget -= expense.amount;

        if let Some(expenses) = view.expenses.as_mut() {
            expenses.insert(0, expense);
        }
    }

    /// Fold an updated expense into the owning project's totals.
    ///
    /// The old amount comes from the cached expense list; if the list was
    /// never fetched there is nothing to diff against and the update is
    /// ignored until the next refresh.
    pub fn apply_updated_expense(&mut self, updated: Expense) {
        let Some(view) = self.view_mut(updated.project_id) else {
            return;
        };
        let Some(expenses) = view.expenses.as_mut() else {
            return;
        };
        let Some(cached) = expenses.iter_mut().find(|expense| expense.id == updated.id)
        else {
            return;
        };

        let delta = updated.amount - cached.amount;
        *cached = updated;

        view.summary.total_expenses += delta;
        view.summary.remaining_budget -= delta;
    }

    /// Remove a deleted expense from the owning project's totals.
    pub fn apply_deleted_expense(&mut self, project_id: DatabaseId, expense_id: DatabaseId) {
        let Some(view) = self.view_mut(project_id) else {
            return;
        };
        let Some(expenses) = view.expenses.as_mut() else {
            return;
        };
        let Some(position) = expenses.iter().position(|expense| expense.id == expense_id)
        else {
            return;
        };

        let removed = expenses.remove(position);

        view.summary.total_expenses -= removed.amount;
        view.summary.remaining_budget += removed.amount;
    }

    /// Compute the portfolio-wide totals from the loaded summaries.
    pub fn summary_cards(&self) -> SummaryCards {
        let mut cards = SummaryCards::default();

        for view in &self.projects {
            cards.total_budget += view.summary.project.estimated_budget;
            cards.total_spent += view.summary.total_expenses;
            cards.total_remaining += view.summary.remaining_budget;
        }

        cards
    }

    fn view(&self, project_id: DatabaseId) -> Option<&ProjectView> {
        self.projects
            .iter()
            .find(|view| view.summary.project.id == project_id)
    }

    fn view_mut(&mut self, project_id: DatabaseId) -> Option<&mut ProjectView> {
        self.projects
            .iter_mut()
            .find(|view| view.summary.project.id == project_id)
    }
}
