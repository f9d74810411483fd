//! # Records
//!
//! The persisted entity and the write payload used by create/update.

use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};

/// Message carried by the blank-title validation failure
pub const TITLE_REQUIRED: &str = "title required";

/// A stored note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique, immutable, never reissued
    pub id: u64,
    pub title: String,
    pub description: String,
    pub done: bool,
}

impl Record {
    /// Build a record from a validated input
    pub(crate) fn from_input(id: u64, input: RecordInput) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            done: input.done,
        }
    }

    /// Replace every mutable field with the input's values
    pub(crate) fn replace_with(&mut self, input: RecordInput) {
        self.title = input.title;
        self.description = input.description;
        self.done = input.done;
    }
}

/// Candidate fields for create/update, pre-validation
///
/// Missing fields decode to their empty defaults. A missing title therefore
/// decodes as `""` and is rejected by [`RecordInput::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub done: bool,
}

impl RecordInput {
    /// Create an input with only a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Check the non-empty title invariant
    pub fn validate(&self) -> StoreResult<()> {
        if self.title.trim().is_empty() {
            return Err(StoreError::validation(TITLE_REQUIRED));
        }
        Ok(())
    }
}
