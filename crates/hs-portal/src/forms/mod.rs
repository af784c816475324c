//! Form state for each portal page.
//!
//! Forms hold the raw input, the inline errors recorded by the last
//! validation, and a loading flag held by a drop guard for the duration of a
//! submit.

mod busy;
pub mod dashboard;
pub mod login;
pub mod register;
pub mod terms;

use std::collections::BTreeMap;

use hs_validate::{Field, FieldIssue, Violation};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Inline errors keyed by field. Serializes as `{ "email": "Email is required" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldIssue>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a validator outcome: a violation replaces the field's error, a
    /// pass clears it. Returns whether the field is now clean.
    pub fn apply(&mut self, field: Field, outcome: Result<(), Violation>) -> bool {
        match FieldIssue::check(field, outcome) {
            Ok(()) => {
                self.0.remove(&field);
                true
            }
            Err(issue) => {
                self.0.insert(field, issue);
                false
            }
        }
    }

    pub fn record(&mut self, issue: FieldIssue) {
        self.0.insert(issue.field, issue);
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldIssue> {
        self.0.get(&field)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages in field order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.values().map(FieldIssue::message).collect()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, issue) in &self.0 {
            map.serialize_entry(field.key(), &issue.message())?;
        }
        map.end()
    }
}
