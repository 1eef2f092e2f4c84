//! Shared fixtures for handler and router tests.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, header};
use http_body_util::BodyExt;

use filialen_app::ports::FiliaalRepository;
use filialen_app::services::filiaal_service::FiliaalService;
use filialen_domain::error::FilialenError;
use filialen_domain::filiaal::{Filiaal, NewFiliaal};
use filialen_domain::id::FiliaalId;

use crate::links::LinkBuilder;
use crate::router;
use crate::state::AppState;

#[derive(Default)]
struct Store {
    last_id: i64,
    rows: BTreeMap<FiliaalId, Filiaal>,
}

/// Repository double that hands out ids 1, 2, 3, …
#[derive(Clone, Default)]
pub(crate) struct InMemoryFiliaalRepo {
    store: Arc<Mutex<Store>>,
}

impl InMemoryFiliaalRepo {
    /// Seed the store; ids follow slice order starting at 1.
    pub(crate) fn with(rows: &[(&str, &str, f64)]) -> Self {
        let repo = Self::default();
        {
            let mut store = repo.store.lock().unwrap();
            for (naam, gemeente, omzet) in rows {
                store.last_id += 1;
                let id = FiliaalId::new(store.last_id);
                store.rows.insert(
                    id,
                    Filiaal {
                        id,
                        naam: (*naam).to_string(),
                        gemeente: (*gemeente).to_string(),
                        omzet: *omzet,
                    },
                );
            }
        }
        repo
    }

    pub(crate) fn len(&self) -> usize {
        self.store.lock().unwrap().rows.len()
    }

    pub(crate) fn naam_of(&self, id: i64) -> Option<String> {
        self.store
            .lock()
            .unwrap()
            .rows
            .get(&FiliaalId::new(id))
            .map(|filiaal| filiaal.naam.clone())
    }
}

impl FiliaalRepository for InMemoryFiliaalRepo {
    fn create(
        &self,
        filiaal: NewFiliaal,
    ) -> impl Future<Output = Result<Filiaal, FilialenError>> + Send {
        let mut store = self.store.lock().unwrap();
        store.last_id += 1;
        let created = Filiaal::from_new(FiliaalId::new(store.last_id), filiaal);
        store.rows.insert(created.id, created.clone());
        async { Ok(created) }
    }

    fn get_by_id(
        &self,
        id: FiliaalId,
    ) -> impl Future<Output = Result<Option<Filiaal>, FilialenError>> + Send {
        let result = self.store.lock().unwrap().rows.get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Filiaal>, FilialenError>> + Send {
        let result: Vec<Filiaal> = self.store.lock().unwrap().rows.values().cloned().collect();
        async { Ok(result) }
    }

    fn update(
        &self,
        filiaal: Filiaal,
    ) -> impl Future<Output = Result<Option<Filiaal>, FilialenError>> + Send {
        let mut store = self.store.lock().unwrap();
        let result = store.rows.get_mut(&filiaal.id).map(|slot| {
            *slot = filiaal.clone();
            filiaal
        });
        async { Ok(result) }
    }

    fn delete(&self, id: FiliaalId) -> impl Future<Output = Result<bool, FilialenError>> + Send {
        let removed = self.store.lock().unwrap().rows.remove(&id).is_some();
        async move { Ok(removed) }
    }
}

/// Full router over the given repository with relative links.
pub(crate) fn test_app(repo: InMemoryFiliaalRepo) -> Router {
    router::build(AppState::new(
        FiliaalService::new(repo),
        LinkBuilder::default(),
    ))
}

pub(crate) fn request(method: Method, uri: &str, json: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match json {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub(crate) async fn raw_body(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub(crate) async fn json_body(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&raw_body(response).await).unwrap()
}
