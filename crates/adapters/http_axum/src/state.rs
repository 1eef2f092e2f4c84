//! Shared application state for axum handlers.

use std::sync::Arc;

use filialen_app::ports::FiliaalRepository;
use filialen_app::services::filiaal_service::FiliaalService;

use crate::links::LinkBuilder;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<R> {
    /// Filiaal CRUD service.
    pub filiaal_service: Arc<FiliaalService<R>>,
    /// Builds the hypermedia links embedded in responses.
    pub links: Arc<LinkBuilder>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            filiaal_service: Arc::clone(&self.filiaal_service),
            links: Arc::clone(&self.links),
        }
    }
}

impl<R> AppState<R>
where
    R: FiliaalRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service and a link builder.
    pub fn new(filiaal_service: FiliaalService<R>, links: LinkBuilder) -> Self {
        Self {
            filiaal_service: Arc::new(filiaal_service),
            links: Arc::new(links),
        }
    }
}
