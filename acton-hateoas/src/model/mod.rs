//! Hypermedia resource model
//!
//! The types a host application uses to describe what it returns: a
//! [`Resource`] bundling content with typed [`Link`]s, each link carrying the
//! [`Affordance`]s a client may act on.
//!
//! # Examples
//!
//! ```rust
//! use acton_hateoas::model::{Affordance, HttpMethod, Link, LinkRelation, PropertyMetadata, Resource};
//! use serde_json::json;
//!
//! let resource = Resource::new(json!({ "name": "Frodo" })).add(
//!     Link::of("/employees/1").and_affordance(
//!         Affordance::builder("update", HttpMethod::Put, "/employees/1")
//!             .property(PropertyMetadata::text("name").required())
//!             .build(),
//!     ),
//! );
//!
//! assert_eq!(resource.link(&LinkRelation::SELF).unwrap().href(), "/employees/1");
//! ```

mod affordance;
mod link;
mod property;

pub use affordance::{Affordance, AffordanceBuilder, AffordanceModel, HttpMethod};
pub use link::{Link, LinkRelation};
pub use property::{InputType, PropertyMetadata};

use crate::error::AffordanceError;

/// A representation of a resource: output content plus ordered links
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resource {
    content: serde_json::Value,
    links: Vec<Link>,
}

impl Resource {
    /// Create a resource with the given content and no links
    #[must_use]
    pub const fn new(content: serde_json::Value) -> Self {
        Self {
            content,
            links: Vec::new(),
        }
    }

    /// Append a link
    #[must_use]
    pub fn add(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// Append a link in place
    pub fn push_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Resource content
    #[must_use]
    pub const fn content(&self) -> &serde_json::Value {
        &self.content
    }

    /// All links in order
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// First link with the given relation
    #[must_use]
    pub fn link(&self, rel: &LinkRelation) -> Option<&Link> {
        self.links.iter().find(|link| link.has_rel(rel))
    }

    /// Whether a link with the given relation exists
    #[must_use]
    pub fn has_link(&self, rel: &LinkRelation) -> bool {
        self.link(rel).is_some()
    }

    /// First link with the given relation, failing if there is none
    ///
    /// # Errors
    ///
    /// Returns [`AffordanceError::LinkNotFound`] if no link has the relation.
    pub fn required_link(&self, rel: &LinkRelation) -> Result<&Link, AffordanceError> {
        self.link(rel).ok_or_else(|| AffordanceError::LinkNotFound {
            rel: rel.to_string(),
        })
    }
}
