//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod filialen;

use axum::Router;
use axum::routing::get;

use filialen_app::ports::FiliaalRepository;

use crate::links::FILIALEN;
use crate::state::AppState;

/// Build the API sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: FiliaalRepository + Send + Sync + 'static,
{
    Router::new()
        .route(FILIALEN, get(filialen::list::<R>).post(filialen::create::<R>))
        .route(
            "/filialen/{id}",
            get(filialen::get::<R>)
                .put(filialen::update::<R>)
                .delete(filialen::delete::<R>),
        )
}
