//! Storage port — repository traits for persistence.

use std::future::Future;

use filialen_domain::error::FilialenError;
use filialen_domain::filiaal::{Filiaal, NewFiliaal};
use filialen_domain::id::FiliaalId;

/// Repository for persisting and querying [`Filiaal`]s.
pub trait FiliaalRepository {
    /// Insert a new filiaal, returning it with its store-assigned id.
    fn create(
        &self,
        filiaal: NewFiliaal,
    ) -> impl Future<Output = Result<Filiaal, FilialenError>> + Send;

    /// Get a filiaal by its unique identifier.
    fn get_by_id(
        &self,
        id: FiliaalId,
    ) -> impl Future<Output = Result<Option<Filiaal>, FilialenError>> + Send;

    /// Get all filialen.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Filiaal>, FilialenError>> + Send;

    /// Overwrite an existing filiaal.
    ///
    /// Resolves to `None` when no filiaal with that id is stored.
    fn update(
        &self,
        filiaal: Filiaal,
    ) -> impl Future<Output = Result<Option<Filiaal>, FilialenError>> + Send;

    /// Delete a filiaal by id and report whether a row was removed.
    /// Deleting a missing id is not an error.
    fn delete(&self, id: FiliaalId) -> impl Future<Output = Result<bool, FilialenError>> + Send;
}

impl<T: FiliaalRepository + Send + Sync> FiliaalRepository for std::sync::Arc<T> {
    fn create(
        &self,
        filiaal: NewFiliaal,
    ) -> impl Future<Output = Result<Filiaal, FilialenError>> + Send {
        (**self).create(filiaal)
    }

    fn get_by_id(
        &self,
        id: FiliaalId,
    ) -> impl Future<Output = Result<Option<Filiaal>, FilialenError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Filiaal>, FilialenError>> + Send {
        (**self).get_all()
    }

    fn update(
        &self,
        filiaal: Filiaal,
    ) -> impl Future<Output = Result<Option<Filiaal>, FilialenError>> + Send {
        (**self).update(filiaal)
    }

    fn delete(&self, id: FiliaalId) -> impl Future<Output = Result<bool, FilialenError>> + Send {
        (**self).delete(id)
    }
}
