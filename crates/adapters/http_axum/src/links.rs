//! Hypermedia link construction.
//!
//! URIs are plain templates: an optional public base URL, a collection
//! path, and optionally an item id and sub-resource segments.

use std::fmt::Display;

use serde::Serialize;

/// Collection path of the filiaal resource.
pub const FILIALEN: &str = "/filialen";

/// Relation name of a link pointing at the resource itself.
pub const SELF_REL: &str = "self";

/// URI of a collection resource.
#[must_use]
pub fn collection_uri(base_url: &str, collection: &str) -> String {
    format!("{base_url}{collection}")
}

/// URI of a single item inside a collection.
#[must_use]
pub fn item_uri(base_url: &str, collection: &str, id: impl Display) -> String {
    format!("{base_url}{collection}/{id}")
}

/// A typed relation between a representation and another URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    rel: &'static str,
    href: String,
}

impl Link {
    #[must_use]
    pub fn new(rel: &'static str, href: impl Into<String>) -> Self {
        Self {
            rel,
            href: href.into(),
        }
    }

    /// Append a path segment to the target URI.
    #[must_use]
    pub fn slash(mut self, segment: impl Display) -> Self {
        self.href = format!("{}/{segment}", self.href);
        self
    }

    /// Replace the relation name.
    #[must_use]
    pub fn with_rel(mut self, rel: &'static str) -> Self {
        self.rel = rel;
        self
    }

    #[must_use]
    pub fn rel(&self) -> &'static str {
        self.rel
    }

    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }
}

/// HAL link object body: `{"href": "..."}`.
#[derive(Serialize)]
pub(crate) struct Href<'a> {
    pub(crate) href: &'a str,
}

/// Builds links rooted at the public base URL of the service.
///
/// An empty base URL yields relative URIs such as `/filialen/1`.
#[derive(Debug, Clone, Default)]
pub struct LinkBuilder {
    base_url: String,
}

impl LinkBuilder {
    /// Create a builder for the given base URL, which must not end with `/`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `self` link to a collection.
    #[must_use]
    pub fn link_to_collection(&self, collection: &str) -> Link {
        Link::new(SELF_REL, collection_uri(&self.base_url, collection))
    }

    /// `self` link to an item.
    #[must_use]
    pub fn link_to_item(&self, collection: &str, id: impl Display) -> Link {
        Link::new(SELF_REL, item_uri(&self.base_url, collection, id))
    }

    /// Link to an item meant to be extended with [`Link::slash`] and
    /// renamed with [`Link::with_rel`].
    #[must_use]
    pub fn link_for_item(&self, collection: &str, id: impl Display) -> Link {
        self.link_to_item(collection, id)
    }
}
