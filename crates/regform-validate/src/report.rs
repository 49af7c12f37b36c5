//! Validation report aggregating issues across fields.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use regform_model::Field;

use crate::issue::Issue;

/// Outcome of validating the form (or part of it).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        self.issues.extend(issues);
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.is_valid()
    }

    pub fn error_count(&self) -> usize {
        self.issues.len()
    }

    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |issue| issue.field == field)
    }

    pub fn messages_for(&self, field: Field) -> Vec<&str> {
        self.for_field(field)
            .map(|issue| issue.message.as_str())
            .collect()
    }

    /// Fields with at least one issue, in render order.
    pub fn invalid_fields(&self) -> BTreeSet<Field> {
        self.issues.iter().map(|issue| issue.field).collect()
    }

    /// Messages grouped per field, in render order.
    pub fn messages_by_field(&self) -> BTreeMap<Field, Vec<String>> {
        let mut grouped: BTreeMap<Field, Vec<String>> = BTreeMap::new();
        for issue in &self.issues {
            grouped
                .entry(issue.field)
                .or_default()
                .push(issue.message.clone());
        }
        grouped
    }
}
