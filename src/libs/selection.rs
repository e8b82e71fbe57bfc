//! Per-request selection state and row-set filtering.
//!
//! A [`Selection`] is the resolved client plus the chosen project names for
//! exactly one report request. It is built from scratch per invocation and
//! discarded afterwards; nothing here is shared or cached across requests.

use crate::libs::entry::TimeEntry;

/// The projects chosen for a report: either everything the client has in the
/// period, or an explicit set of project names.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectChoice {
    All,
    Named(Vec<String>),
}

impl ProjectChoice {
    /// An empty choice means "all projects".
    pub fn from_names(names: Vec<String>) -> Self {
        if names.is_empty() {
            ProjectChoice::All
        } else {
            ProjectChoice::Named(names)
        }
    }

    pub fn matches(&self, project_name: &str) -> bool {
        match self {
            ProjectChoice::All => true,
            ProjectChoice::Named(names) => names.iter().any(|n| n == project_name),
        }
    }

    /// The explicit names, empty for the all-projects wildcard.
    pub fn names(&self) -> &[String] {
        match self {
            ProjectChoice::All => &[],
            ProjectChoice::Named(names) => names,
        }
    }
}

/// Resolved client and project choice for one report request.
#[derive(Debug, Clone)]
pub struct Selection {
    pub client_id: String,
    pub client_name: String,
    pub projects: ProjectChoice,
}

/// Filtering and ordering operations on a normalized row set.
pub trait EntrySet {
    /// Canonical post-resolution filter: exact match on the client id, so
    /// distinct clients sharing a display name never collide.
    fn by_client_id(self, client_id: &str) -> Self;

    /// Pre-resolution convenience filter, case-insensitive on the display
    /// name. Only for use before an identifier is known.
    fn by_client_name(self, client_name: &str) -> Self;

    /// Keeps rows whose project name is in the choice; preserves input order.
    fn by_projects(self, choice: &ProjectChoice) -> Self;

    /// Stable ascending sort on the start date; ties keep fetch order.
    fn sorted_by_date(self) -> Self;

    /// Distinct `(client_id, client_name)` pairs with a non-blank name,
    /// sorted by name.
    fn client_pairs(&self) -> Vec<(String, String)>;

    /// Distinct project names, sorted.
    fn project_names(&self) -> Vec<String>;

    /// Exact sum of `duration_hours` over all rows.
    fn total_hours(&self) -> f64;
}

impl EntrySet for Vec<TimeEntry> {
    fn by_client_id(mut self, client_id: &str) -> Self {
        self.retain(|entry| entry.client_id == client_id);
        self
    }

    fn by_client_name(mut self, client_name: &str) -> Self {
        let key = client_name.to_lowercase();
        self.retain(|entry| entry.client_name.to_lowercase() == key);
        self
    }

    fn by_projects(mut self, choice: &ProjectChoice) -> Self {
        self.retain(|entry| choice.matches(&entry.project_name));
        self
    }

    fn sorted_by_date(mut self) -> Self {
        self.sort_by_key(|entry| entry.start_date);
        self
    }

    fn client_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = Vec::new();
        for entry in self {
            let name = entry.client_name.trim();
            if name.is_empty() {
                continue;
            }
            if !pairs.iter().any(|(id, _)| id == &entry.client_id) {
                pairs.push((entry.client_id.clone(), name.to_string()));
            }
        }
        pairs.sort_by(|a, b| a.1.cmp(&b.1));
        pairs
    }

    fn project_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for entry in self {
            if !entry.project_name.is_empty() && !names.contains(&entry.project_name) {
                names.push(entry.project_name.clone());
            }
        }
        names.sort();
        names
    }

    fn total_hours(&self) -> f64 {
        self.iter().map(|entry| entry.duration_hours).sum()
    }
}
