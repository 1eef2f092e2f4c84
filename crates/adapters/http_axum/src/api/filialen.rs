//! REST handlers for the `/filialen` resource.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use filialen_app::ports::FiliaalRepository;
use filialen_domain::filiaal::{Filiaal, FiliaalBuilder};
use filialen_domain::id::FiliaalId;

use crate::error::ApiError;
use crate::hal::{CollectionModel, EntityModel, Hal};
use crate::links::{FILIALEN, LinkBuilder};
use crate::state::AppState;

/// Relation name of the employees sub-resource link.
pub const WERKNEMERS: &str = "werknemers";

/// Relation under which the collection embeds its items.
pub const EMBEDDED_REL: &str = "filialen";

/// Request body for creating or updating a filiaal.
///
/// `id` is only read on update. Every field may be missing or `null`; such
/// fields surface as entries in the validation field map.
#[derive(Debug, Deserialize, ToSchema)]
pub struct FiliaalRequest {
    pub id: Option<i64>,
    pub naam: Option<String>,
    pub gemeente: Option<String>,
    pub omzet: Option<f64>,
}

impl FiliaalRequest {
    fn into_builder(self) -> FiliaalBuilder {
        let mut builder = Filiaal::builder()
            .maybe_id(self.id.map(FiliaalId::from))
            .maybe_omzet(self.omzet);
        if let Some(naam) = self.naam {
            builder = builder.naam(naam);
        }
        if let Some(gemeente) = self.gemeente {
            builder = builder.gemeente(gemeente);
        }
        builder
    }
}

/// Listing projection: only the id and the name of a filiaal.
#[derive(Debug, Serialize)]
pub struct FiliaalIdNaam {
    pub id: FiliaalId,
    pub naam: String,
}

impl From<Filiaal> for FiliaalIdNaam {
    fn from(filiaal: Filiaal) -> Self {
        Self {
            id: filiaal.id,
            naam: filiaal.naam,
        }
    }
}

/// Item representation: the filiaal with its `self` and `werknemers` links.
fn item_model(links: &LinkBuilder, filiaal: Filiaal) -> EntityModel<Filiaal> {
    let id = filiaal.id;
    EntityModel::of(
        filiaal,
        [
            links.link_to_item(FILIALEN, id),
            links
                .link_for_item(FILIALEN, id)
                .slash(WERKNEMERS)
                .with_rel(WERKNEMERS),
        ],
    )
}

/// Collection representation: one `self` link per item plus one for the collection.
fn collection_model(
    links: &LinkBuilder,
    filialen: Vec<Filiaal>,
) -> CollectionModel<EntityModel<FiliaalIdNaam>> {
    let items = filialen
        .into_iter()
        .map(|filiaal| {
            let self_link = links.link_to_item(FILIALEN, filiaal.id);
            EntityModel::of(FiliaalIdNaam::from(filiaal), [self_link])
        })
        .collect();
    CollectionModel::of(EMBEDDED_REL, items, [links.link_to_collection(FILIALEN)])
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Hal<CollectionModel<EntityModel<FiliaalIdNaam>>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(hal) => hal.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Hal<EntityModel<Filiaal>>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(hal) => hal.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created { location: String },
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created { location } => {
                (StatusCode::CREATED, [(header::LOCATION, location)]).into_response()
            }
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => StatusCode::OK.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Alle filialen zoeken
#[utoipa::path(
    get,
    path = "/filialen",
    tags = ["filialen"],
    responses(
        (status = 200, description = "Id and naam of every filiaal, as HAL collection")
    )
)]
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: FiliaalRepository + Send + Sync + 'static,
{
    let filialen = state.filiaal_service.find_all().await?;
    Ok(ListResponse::Ok(Hal(collection_model(&state.links, filialen))))
}

/// Een filiaal zoeken op id
#[utoipa::path(
    get,
    path = "/filialen/{id}",
    tags = ["filialen"],
    params(("id" = i64, Path, description = "Filiaal id")),
    responses(
        (status = 200, description = "The filiaal with `self` and `werknemers` links"),
        (status = 404, description = "No filiaal with this id")
    )
)]
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    R: FiliaalRepository + Send + Sync + 'static,
{
    let id = FiliaalId::from(id);
    let filiaal = state
        .filiaal_service
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Filiaal", id))?;
    Ok(GetResponse::Ok(Hal(item_model(&state.links, filiaal))))
}

/// Een filiaal toevoegen
#[utoipa::path(
    post,
    path = "/filialen",
    tags = ["filialen"],
    request_body = FiliaalRequest,
    responses(
        (
            status = 201,
            description = "Filiaal created",
            headers(("Location" = String, description = "URI of the new filiaal"))
        ),
        (status = 400, description = "Field name to message map, or unreadable body")
    )
)]
pub async fn create<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<FiliaalRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: FiliaalRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let new = req.into_builder().build_new()?;
    let created = state.filiaal_service.create(new).await?;
    let location = state.links.link_to_item(FILIALEN, created.id);
    Ok(CreateResponse::Created {
        location: location.href().to_owned(),
    })
}

/// Een filiaal wijzigen
///
/// The filiaal to overwrite is identified by the `id` in the body; the path
/// segment is not used to select it.
#[utoipa::path(
    put,
    path = "/filialen/{id}",
    tags = ["filialen"],
    params(("id" = i64, Path, description = "Ignored; the body id selects the filiaal")),
    request_body = FiliaalRequest,
    responses(
        (status = 200, description = "Filiaal updated"),
        (status = 400, description = "Field name to message map, or unreadable body"),
        (status = 404, description = "No filiaal with the body id")
    )
)]
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(path_id): Path<i64>,
    payload: Result<Json<FiliaalRequest>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    R: FiliaalRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let filiaal = req.into_builder().build()?;
    if filiaal.id.as_i64() != path_id {
        tracing::debug!(path_id, body_id = %filiaal.id, "path id differs from body id, using body id");
    }
    state.filiaal_service.update(filiaal).await?;
    Ok(UpdateResponse::Ok)
}

/// Een filiaal verwijderen
#[utoipa::path(
    delete,
    path = "/filialen/{id}",
    tags = ["filialen"],
    params(("id" = i64, Path, description = "Filiaal id")),
    responses(
        (status = 204, description = "Filiaal deleted, or it did not exist")
    )
)]
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    R: FiliaalRepository + Send + Sync + 'static,
{
    state.filiaal_service.delete(FiliaalId::from(id)).await?;
    Ok(DeleteResponse::NoContent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{InMemoryFiliaalRepo, json_body, request, test_app};
    use axum::http::Method;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn should_return_item_with_self_and_werknemers_links() {
        let repo = InMemoryFiliaalRepo::with(&[("Brussel Noord", "Brussel", 10.0)]);
        let app = test_app(repo);

        let response = app
            .oneshot(request(Method::GET, "/filialen/1", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            crate::hal::HAL_JSON
        );
        let body = json_body(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["naam"], "Brussel Noord");
        assert_eq!(body["gemeente"], "Brussel");
        let links = body["_links"].as_object().unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links["self"]["href"], "/filialen/1");
        assert_eq!(links["werknemers"]["href"], "/filialen/1/werknemers");
    }

    #[tokio::test]
    async fn should_return_empty_404_when_missing() {
        let app = test_app(InMemoryFiliaalRepo::default());

        let response = app
            .oneshot(request(Method::GET, "/filialen/42", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(crate::test_utils::raw_body(response).await.is_empty());
    }

    #[tokio::test]
    async fn should_reject_blank_naam_with_field_map() {
        let app = test_app(InMemoryFiliaalRepo::default());

        let response = app
            .oneshot(request(
                Method::POST,
                "/filialen",
                Some(json!({ "naam": "", "gemeente": "Gent", "omzet": 5 })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body, json!({ "naam": "must not be blank" }));
    }

    #[tokio::test]
    async fn should_report_every_missing_field() {
        let app = test_app(InMemoryFiliaalRepo::default());

        let response = app
            .oneshot(request(Method::POST, "/filialen", Some(json!({}))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        let fields = body.as_object().unwrap();
        assert!(fields.contains_key("naam"));
        assert!(fields.contains_key("gemeente"));
        assert!(fields.contains_key("omzet"));
    }

    #[tokio::test]
    async fn should_not_reach_service_when_invalid() {
        let repo = InMemoryFiliaalRepo::default();
        let app = test_app(repo.clone());

        app.oneshot(request(
            Method::POST,
            "/filialen",
            Some(json!({ "naam": " ", "gemeente": "Gent", "omzet": 1 })),
        ))
        .await
        .unwrap();

        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn should_create_and_set_location_header() {
        let repo = InMemoryFiliaalRepo::with(&[("Mechelen", "Mechelen", 1.0)]);
        let app = test_app(repo.clone());

        let response = app
            .oneshot(request(
                Method::POST,
                "/filialen",
                Some(json!({ "naam": "Hasselt", "gemeente": "Hasselt", "omzet": 120.5 })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/filialen/2");
        assert!(crate::test_utils::raw_body(response).await.is_empty());
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn should_update_using_id_from_body() {
        let repo = InMemoryFiliaalRepo::with(&[
            ("Aalst", "Aalst", 1.0),
            ("Lier", "Lier", 2.0),
        ]);
        let app = test_app(repo.clone());

        let response = app
            .oneshot(request(
                Method::PUT,
                "/filialen/1",
                Some(json!({ "id": 2, "naam": "Lier Centrum", "gemeente": "Lier", "omzet": 3 })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(repo.naam_of(2).as_deref(), Some("Lier Centrum"));
        assert_eq!(repo.naam_of(1).as_deref(), Some("Aalst"));
    }

    #[tokio::test]
    async fn should_require_id_in_update_body() {
        let repo = InMemoryFiliaalRepo::with(&[("Aalst", "Aalst", 1.0)]);
        let app = test_app(repo);

        let response = app
            .oneshot(request(
                Method::PUT,
                "/filialen/1",
                Some(json!({ "naam": "Aalst", "gemeente": "Aalst", "omzet": 1 })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!({ "id": "must not be null" }));
    }

    #[tokio::test]
    async fn should_return_404_when_updating_unknown_filiaal() {
        let app = test_app(InMemoryFiliaalRepo::default());

        let response = app
            .oneshot(request(
                Method::PUT,
                "/filialen/9",
                Some(json!({ "id": 9, "naam": "Ieper", "gemeente": "Ieper", "omzet": 1 })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_delete_idempotently() {
        let repo = InMemoryFiliaalRepo::with(&[("Genk", "Genk", 1.0)]);
        let app = test_app(repo.clone());

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(request(Method::DELETE, "/filialen/1", None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NO_CONTENT);
        }
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn should_list_id_naam_projections_with_links() {
        let repo = InMemoryFiliaalRepo::with(&[
            ("Kortrijk", "Kortrijk", 1.0),
            ("Oostende", "Oostende", 2.0),
        ]);
        let app = test_app(repo);

        let response = app
            .oneshot(request(Method::GET, "/filialen", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(
            body,
            json!({
                "_embedded": {
                    "filialen": [
                        { "id": 1, "naam": "Kortrijk", "_links": { "self": { "href": "/filialen/1" } } },
                        { "id": 2, "naam": "Oostende", "_links": { "self": { "href": "/filialen/2" } } },
                    ],
                },
                "_links": { "self": { "href": "/filialen" } },
            })
        );
    }

    #[tokio::test]
    async fn should_list_empty_collection() {
        let app = test_app(InMemoryFiliaalRepo::default());

        let response = app
            .oneshot(request(Method::GET, "/filialen", None))
            .await
            .unwrap();

        let body = json_body(response).await;
        assert_eq!(body["_embedded"]["filialen"], json!([]));
        assert_eq!(body["_links"]["self"]["href"], "/filialen");
    }

    #[tokio::test]
    async fn should_report_null_naam_as_blank_field() {
        let repo = InMemoryFiliaalRepo::default();
        let app = test_app(repo.clone());

        let response = app
            .oneshot(request(
                Method::POST,
                "/filialen",
                Some(json!({ "naam": null, "gemeente": "Gent", "omzet": 5 })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!({ "naam": "must not be blank" }));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn should_reject_textual_omzet_with_bad_request() {
        let app = test_app(InMemoryFiliaalRepo::default());

        let response = app
            .oneshot(request(
                Method::POST,
                "/filialen",
                Some(json!({ "naam": "Gent", "gemeente": "Gent", "omzet": "abc" })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn should_reject_fractional_body_id_on_update() {
        let repo = InMemoryFiliaalRepo::with(&[("Aalst", "Aalst", 1.0)]);
        let app = test_app(repo.clone());

        let response = app
            .oneshot(request(
                Method::PUT,
                "/filialen/1",
                Some(json!({ "id": 1.5, "naam": "Dendermonde", "gemeente": "Aalst", "omzet": 1 })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(repo.naam_of(1).as_deref(), Some("Aalst"));
    }

    #[tokio::test]
    async fn should_reject_malformed_json_with_bad_request() {
        let app = test_app(InMemoryFiliaalRepo::default());

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .method(Method::POST)
                    .uri("/filialen")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from("{\"naam\":"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_reject_non_numeric_id() {
        let app = test_app(InMemoryFiliaalRepo::default());

        let response = app
            .oneshot(request(Method::GET, "/filialen/abc", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
