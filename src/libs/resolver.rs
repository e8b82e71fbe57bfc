//! Display-name resolution for clients and projects.
//!
//! Clockify identifies both by a stable id and a mutable display name, and
//! names are not guaranteed unique. The index maps lowercased names to the
//! distinct ids sharing them; resolution either yields the single id or hands
//! the candidate list back to the caller. The resolver itself never guesses.

use crate::libs::error::ReportError;
use std::collections::HashMap;

/// Index from lowercased display name to the distinct identifiers sharing it,
/// in first-seen order. Built fresh per data set, never reused across report
/// requests.
#[derive(Debug, Default)]
pub struct NameIndex {
    entries: HashMap<String, Vec<String>>,
}

/// Outcome of a name lookup. The interactive surface turns `Ambiguous` into
/// a candidate selection and retries; non-interactive callers convert to a
/// [`ReportError`] via [`Resolution::into_result`].
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(String),
    Unknown,
    Ambiguous(Vec<String>),
}

impl NameIndex {
    /// Builds the index from `(id, name)` pairs. Repeated pairs collapse to
    /// one list entry, so feeding every row of an entry set is fine.
    pub fn build<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut entries: HashMap<String, Vec<String>> = HashMap::new();
        for (id, name) in pairs {
            let key = name.as_ref().trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            let ids = entries.entry(key).or_default();
            if !ids.iter().any(|known| known == id.as_ref()) {
                ids.push(id.as_ref().to_string());
            }
        }
        Self { entries }
    }

    /// Looks up a display name, case-insensitively.
    pub fn resolve(&self, name: &str) -> Resolution {
        match self.entries.get(&name.trim().to_lowercase()) {
            None => Resolution::Unknown,
            Some(ids) if ids.len() == 1 => Resolution::Resolved(ids[0].clone()),
            Some(ids) => Resolution::Ambiguous(ids.clone()),
        }
    }

    /// All indexed names, sorted for stable display.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Resolution {
    /// Converts the tagged outcome into the error taxonomy for callers that
    /// cannot disambiguate interactively.
    pub fn into_result(self, name: &str) -> Result<String, ReportError> {
        match self {
            Resolution::Resolved(id) => Ok(id),
            Resolution::Unknown => Err(ReportError::UnknownName(name.to_string())),
            Resolution::Ambiguous(candidates) => Err(ReportError::AmbiguousName {
                name: name.to_string(),
                candidates,
            }),
        }
    }
}
