//! HAL (`application/hal+json`) representation wrappers.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::links::{Href, Link};

/// Media type of every hypermedia response.
pub const HAL_JSON: &str = "application/hal+json";

/// Response body serialized as JSON with the `application/hal+json` media type.
#[derive(Debug)]
pub struct Hal<T>(pub T);

impl<T: Serialize> IntoResponse for Hal<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(body) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static(HAL_JSON))],
                body,
            )
                .into_response(),
            Err(err) => {
                tracing::error!(%err, "failed to serialize HAL representation");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Ordered set of links, serialized as `{"<rel>": {"href": "<uri>"}, ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links(Vec<Link>);

impl From<Vec<Link>> for Links {
    fn from(links: Vec<Link>) -> Self {
        Self(links)
    }
}

impl<const N: usize> From<[Link; N]> for Links {
    fn from(links: [Link; N]) -> Self {
        Self(links.into())
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for link in &self.0 {
            map.serialize_entry(link.rel(), &Href { href: link.href() })?;
        }
        map.end()
    }
}

/// A single resource: its own fields plus `_links`.
#[derive(Debug, Serialize)]
pub struct EntityModel<T> {
    #[serde(flatten)]
    pub content: T,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> EntityModel<T> {
    #[must_use]
    pub fn of(content: T, links: impl Into<Links>) -> Self {
        Self {
            content,
            links: links.into(),
        }
    }
}

/// A sequence of resources under `_embedded.<rel>` plus collection `_links`.
#[derive(Debug, Serialize)]
pub struct CollectionModel<T> {
    #[serde(rename = "_embedded")]
    pub embedded: Embedded<T>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> CollectionModel<T> {
    #[must_use]
    pub fn of(rel: &'static str, items: Vec<T>, links: impl Into<Links>) -> Self {
        Self {
            embedded: Embedded { rel, items },
            links: links.into(),
        }
    }
}

/// `_embedded` body: one relation holding every item.
#[derive(Debug)]
pub struct Embedded<T> {
    pub rel: &'static str,
    pub items: Vec<T>,
}

impl<T: Serialize> Serialize for Embedded<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.rel, &self.items)?;
        map.end()
    }
}
