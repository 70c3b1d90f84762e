//! Affordance selection
//!
//! Narrows a resource to the HTML model of the affordance that gets rendered.
//! The selection rule is fixed: the `self` link, then the first affordance
//! declared on it. Further affordances on the same link are never rendered.

use crate::error::AffordanceError;
use crate::model::{Affordance, AffordanceModel, Link, LinkRelation, Resource};

/// First affordance declared on a link
///
/// # Errors
///
/// Returns [`AffordanceError::NoAffordance`] if the link declares none.
pub fn primary_affordance(link: &Link) -> Result<&Affordance, AffordanceError> {
    link.affordances()
        .first()
        .ok_or_else(|| AffordanceError::NoAffordance {
            href: link.href().to_string(),
        })
}

/// HTML model of the resource's primary affordance
///
/// # Errors
///
/// Returns error if the resource has no `self` link, the link has no
/// affordance, or the affordance has no `text/html` model.
///
/// # Examples
///
/// ```rust
/// use acton_hateoas::forms::html_model;
/// use acton_hateoas::model::{Affordance, HttpMethod, Link, Resource};
///
/// let resource = Resource::default().add(
///     Link::of("/orders")
///         .and_affordance(Affordance::builder("create", HttpMethod::Post, "/orders").build())
///         .and_affordance(Affordance::builder("search", HttpMethod::Get, "/orders/search").build()),
/// );
///
/// // only the first declared affordance is selected
/// assert_eq!(html_model(&resource).unwrap().name(), "create");
/// ```
pub fn html_model(resource: &Resource) -> Result<&AffordanceModel, AffordanceError> {
    let link = resource.required_link(&LinkRelation::SELF)?;
    let affordance = primary_affordance(link)?;

    affordance
        .model(&mime::TEXT_HTML)
        .ok_or_else(|| AffordanceError::ModelUnavailable {
            affordance: affordance.name().to_string(),
            media_type: mime::TEXT_HTML.to_string(),
        })
}
