//! Filiaal service — use-cases for managing branch offices.

use filialen_domain::error::{FilialenError, NotFoundError};
use filialen_domain::filiaal::{Filiaal, NewFiliaal};
use filialen_domain::id::FiliaalId;

use crate::ports::FiliaalRepository;

/// Application service for filiaal CRUD operations.
pub struct FiliaalService<R> {
    repo: R,
}

impl<R: FiliaalRepository> FiliaalService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up a filiaal by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn find_by_id(&self, id: FiliaalId) -> Result<Option<Filiaal>, FilialenError> {
        let found = self.repo.get_by_id(id).await?;
        if found.is_none() {
            tracing::debug!(%id, "filiaal not found");
        }
        Ok(found)
    }

    /// List all filialen in the order the repository returns them.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn find_all(&self) -> Result<Vec<Filiaal>, FilialenError> {
        self.repo.get_all().await
    }

    /// Store a new filiaal after validating domain invariants.
    ///
    /// The returned value carries the id assigned by the repository.
    ///
    /// # Errors
    ///
    /// Returns [`FilialenError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create(&self, filiaal: NewFiliaal) -> Result<Filiaal, FilialenError> {
        filiaal.validate()?;
        let created = self.repo.create(filiaal).await?;
        tracing::info!(id = %created.id, naam = %created.naam, "filiaal created");
        Ok(created)
    }

    /// Overwrite the filiaal identified by `filiaal.id`.
    ///
    /// # Errors
    ///
    /// Returns [`FilialenError::Validation`] if invariants fail,
    /// [`FilialenError::NotFound`] when no filiaal has that id, or a
    /// storage error from the repository.
    pub async fn update(&self, filiaal: Filiaal) -> Result<Filiaal, FilialenError> {
        filiaal.validate()?;
        let id = filiaal.id;
        let updated = self.repo.update(filiaal).await?.ok_or_else(|| NotFoundError {
            entity: "Filiaal",
            id: id.to_string(),
        })?;
        tracing::info!(%id, "filiaal updated");
        Ok(updated)
    }

    /// Delete a filiaal by id and return whether it existed. Unknown ids are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete(&self, id: FiliaalId) -> Result<bool, FilialenError> {
        let removed = self.repo.delete(id).await?;
        if removed {
            tracing::info!(%id, "filiaal deleted");
        } else {
            tracing::debug!(%id, "filiaal already absent, nothing deleted");
        }
        Ok(removed)
    }
}
