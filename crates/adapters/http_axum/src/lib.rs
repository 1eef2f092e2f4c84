//! # filialen-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **`/filialen` REST resource** as HAL JSON
//!   (`_links` on every item, `_embedded` on the collection)
//! - Validate request bodies and report invalid fields as a field → message map
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application errors into status codes in one place ([`error::ApiError`])
//! - Publish the OpenAPI document of the resource ([`doc::ApiDoc`])
//!
//! ## Dependency rule
//! Depends on `filialen-app` (for port traits and services) and `filialen-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod doc;
pub mod error;
pub mod hal;
pub mod links;
pub mod router;
pub mod state;

#[cfg(test)]
pub(crate) mod test_utils;
