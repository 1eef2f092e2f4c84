//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`FilialenError`] via `#[from]` or an explicit `From` impl.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum FilialenError {
    /// One or more fields violate a domain constraint.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The requested record does not exist.
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up (e.g. `"Filiaal"`).
    pub entity: &'static str,
    /// Identifier that was requested, rendered as text.
    pub id: String,
}

/// Field name → message map describing every invalid field.
///
/// Serializes as a flat JSON object. Recording a second message for the
/// same field replaces the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for `field`, overwriting any earlier message.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns the collected errors when at least one field is invalid.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
