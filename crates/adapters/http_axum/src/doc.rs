//! OpenAPI documentation for the filialen REST API.
//!
//! [`ApiDoc`] collects the `#[utoipa::path]` annotations of the handlers in
//! [`crate::api::filialen`]; the router serves the generated document as
//! `/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use crate::api::filialen::FiliaalRequest;

/// OpenAPI document for the `/filialen` resource.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Filialen API",
        description = "Branch offices as HAL resources with links to their employees."
    ),
    paths(
        crate::api::filialen::list,
        crate::api::filialen::get,
        crate::api::filialen::create,
        crate::api::filialen::update,
        crate::api::filialen::delete,
    ),
    components(schemas(FiliaalRequest)),
    tags((name = "filialen", description = "Branch office operations"))
)]
pub struct ApiDoc;

/// `GET /openapi.json`
pub(crate) async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
