//! Links and link relations

use std::borrow::Cow;

use super::affordance::Affordance;

/// A link relation type
///
/// Relations compare case-insensitively, as registered IANA relation names do.
#[derive(Debug, Clone, Eq)]
pub struct LinkRelation(Cow<'static, str>);

impl LinkRelation {
    /// The resource's own canonical location
    pub const SELF: Self = Self(Cow::Borrowed("self"));
    /// Next page in a series
    pub const NEXT: Self = Self(Cow::Borrowed("next"));
    /// Previous page in a series
    pub const PREV: Self = Self(Cow::Borrowed("prev"));
    /// First page in a series
    pub const FIRST: Self = Self(Cow::Borrowed("first"));
    /// Last page in a series
    pub const LAST: Self = Self(Cow::Borrowed("last"));
    /// Collection the resource is a member of
    pub const COLLECTION: Self = Self(Cow::Borrowed("collection"));
    /// Member of the collection
    pub const ITEM: Self = Self(Cow::Borrowed("item"));
    /// Editable version of the resource
    pub const EDIT: Self = Self(Cow::Borrowed("edit"));

    /// Create a custom relation
    #[must_use]
    pub fn new(rel: impl Into<Cow<'static, str>>) -> Self {
        Self(rel.into())
    }

    /// The relation name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for LinkRelation {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl std::fmt::Display for LinkRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for LinkRelation {
    fn from(rel: &'static str) -> Self {
        Self::new(rel)
    }
}

impl From<Cow<'static, str>> for LinkRelation {
    fn from(rel: Cow<'static, str>) -> Self {
        Self(rel)
    }
}

impl From<String> for LinkRelation {
    fn from(rel: String) -> Self {
        Self(Cow::Owned(rel))
    }
}

/// A typed link carrying zero or more affordances
///
/// # Examples
///
/// ```rust
/// use acton_hateoas::model::{Affordance, HttpMethod, Link, LinkRelation};
///
/// let link = Link::of("/employees/1").and_affordance(
///     Affordance::builder("update", HttpMethod::Put, "/employees/1").build(),
/// );
///
/// assert_eq!(link.rel(), &LinkRelation::SELF);
/// assert_eq!(link.affordances().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    href: String,
    rel: LinkRelation,
    title: Option<String>,
    affordances: Vec<Affordance>,
}

impl Link {
    /// Create a `self` link
    #[must_use]
    pub fn of(href: impl Into<String>) -> Self {
        Self::new(href, LinkRelation::SELF)
    }

    /// Create a link with the given relation
    #[must_use]
    pub fn new(href: impl Into<String>, rel: impl Into<LinkRelation>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            title: None,
            affordances: Vec::new(),
        }
    }

    /// Replace the relation
    #[must_use]
    pub fn with_rel(mut self, rel: impl Into<LinkRelation>) -> Self {
        self.rel = rel.into();
        self
    }

    /// Attach a human readable title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append an affordance, keeping declaration order
    #[must_use]
    pub fn and_affordance(mut self, affordance: Affordance) -> Self {
        self.affordances.push(affordance);
        self
    }

    /// Append several affordances, keeping declaration order
    #[must_use]
    pub fn and_affordances(mut self, affordances: impl IntoIterator<Item = Affordance>) -> Self {
        self.affordances.extend(affordances);
        self
    }

    /// Link target
    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Link relation
    #[must_use]
    pub const fn rel(&self) -> &LinkRelation {
        &self.rel
    }

    /// Optional title
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Affordances in declaration order
    #[must_use]
    pub fn affordances(&self) -> &[Affordance] {
        &self.affordances
    }

    /// Whether the link carries the given relation
    #[must_use]
    pub fn has_rel(&self, rel: &LinkRelation) -> bool {
        &self.rel == rel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relations_ignore_case() {
        assert_eq!(LinkRelation::new("SELF"), LinkRelation::SELF);
        assert_ne!(LinkRelation::NEXT, LinkRelation::SELF);
    }

    #[test]
    fn test_link_of_is_self() {
        let link = Link::of("/orders");
        assert!(link.has_rel(&LinkRelation::SELF));
        assert_eq!(link.href(), "/orders");
        assert!(link.affordances().is_empty());
        assert!(link.title().is_none());
    }

    #[test]
    fn test_with_rel_and_title() {
        let link = Link::of("/orders?page=2")
            .with_rel(LinkRelation::NEXT)
            .with_title("Next page");

        assert_eq!(link.rel().as_str(), "next");
        assert_eq!(link.title(), Some("Next page"));
    }

    #[test]
    fn test_custom_relation_from_string() {
        let link = Link::new("/orders/1/cancel", String::from("cancel"));
        assert_eq!(link.rel().to_string(), "cancel");
    }
}
