//! Filiaal — a physical branch office.

use serde::Serialize;

use crate::error::{FilialenError, ValidationErrors};
use crate::id::FiliaalId;

const NOT_BLANK: &str = "must not be blank";
const NOT_NULL: &str = "must not be null";
const POSITIVE_OR_ZERO: &str = "must be greater than or equal to 0";

/// A branch office as persisted by the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Filiaal {
    pub id: FiliaalId,
    pub naam: String,
    pub gemeente: String,
    pub omzet: f64,
}

/// A branch office that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFiliaal {
    pub naam: String,
    pub gemeente: String,
    pub omzet: f64,
}

impl Filiaal {
    /// Create a builder for constructing a [`Filiaal`] or [`NewFiliaal`].
    #[must_use]
    pub fn builder() -> FiliaalBuilder {
        FiliaalBuilder::default()
    }

    /// Attach a store-assigned identifier to a [`NewFiliaal`].
    #[must_use]
    pub fn from_new(id: FiliaalId, new: NewFiliaal) -> Self {
        Self {
            id,
            naam: new.naam,
            gemeente: new.gemeente,
            omzet: new.omzet,
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FilialenError::Validation`] listing every invalid field.
    pub fn validate(&self) -> Result<(), FilialenError> {
        check_fields(&self.naam, &self.gemeente, Some(self.omzet))
            .into_result()
            .map_err(Into::into)
    }
}

impl NewFiliaal {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FilialenError::Validation`] listing every invalid field.
    pub fn validate(&self) -> Result<(), FilialenError> {
        check_fields(&self.naam, &self.gemeente, Some(self.omzet))
            .into_result()
            .map_err(Into::into)
    }
}

fn check_fields(naam: &str, gemeente: &str, omzet: Option<f64>) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if naam.trim().is_empty() {
        errors.add("naam", NOT_BLANK);
    }
    if gemeente.trim().is_empty() {
        errors.add("gemeente", NOT_BLANK);
    }
    match omzet {
        None => errors.add("omzet", NOT_NULL),
        Some(value) if value.is_nan() || value < 0.0 => errors.add("omzet", POSITIVE_OR_ZERO),
        Some(_) => {}
    }
    errors
}

/// Step-by-step builder for [`Filiaal`] and [`NewFiliaal`].
///
/// Every field is optional until `build`; missing values are reported
/// through the same field map as invalid ones.
#[derive(Debug, Default)]
pub struct FiliaalBuilder {
    id: Option<FiliaalId>,
    naam: Option<String>,
    gemeente: Option<String>,
    omzet: Option<f64>,
}

impl FiliaalBuilder {
    #[must_use]
    pub fn id(mut self, id: FiliaalId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn maybe_id(mut self, id: Option<FiliaalId>) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn naam(mut self, naam: impl Into<String>) -> Self {
        self.naam = Some(naam.into());
        self
    }

    #[must_use]
    pub fn gemeente(mut self, gemeente: impl Into<String>) -> Self {
        self.gemeente = Some(gemeente.into());
        self
    }

    #[must_use]
    pub fn omzet(mut self, omzet: f64) -> Self {
        self.omzet = Some(omzet);
        self
    }

    #[must_use]
    pub fn maybe_omzet(mut self, omzet: Option<f64>) -> Self {
        self.omzet = omzet;
        self
    }

    fn field_errors(&self) -> ValidationErrors {
        check_fields(
            self.naam.as_deref().unwrap_or_default(),
            self.gemeente.as_deref().unwrap_or_default(),
            self.omzet,
        )
    }

    /// Consume the builder, validate, and return a [`NewFiliaal`].
    ///
    /// Any identifier set on the builder is ignored: the store assigns it.
    ///
    /// # Errors
    ///
    /// Returns [`FilialenError::Validation`] if a field is missing or invalid.
    pub fn build_new(self) -> Result<NewFiliaal, FilialenError> {
        self.field_errors().into_result()?;
        Ok(NewFiliaal {
            naam: self.naam.unwrap_or_default(),
            gemeente: self.gemeente.unwrap_or_default(),
            omzet: self.omzet.unwrap_or_default(),
        })
    }

    /// Consume the builder, validate, and return a [`Filiaal`].
    ///
    /// # Errors
    ///
    /// Returns [`FilialenError::Validation`] if the identifier or any other
    /// field is missing or invalid.
    pub fn build(self) -> Result<Filiaal, FilialenError> {
        let mut errors = self.field_errors();
        let Some(id) = self.id else {
            errors.add("id", NOT_NULL);
            return Err(errors.into());
        };
        errors.into_result()?;
        Ok(Filiaal {
            id,
            naam: self.naam.unwrap_or_default(),
            gemeente: self.gemeente.unwrap_or_default(),
            omzet: self.omzet.unwrap_or_default(),
        })
    }
}
