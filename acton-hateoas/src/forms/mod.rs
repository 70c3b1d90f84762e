//! Affordance forms
//!
//! Renders the primary affordance of a [`Resource`](crate::model::Resource)
//! as an HTML form:
//!
//! 1. [`html_model`] picks the `self` link, its first affordance and that
//!    affordance's `text/html` model
//! 2. [`AffordanceFormRenderer`] executes the compiled form template against a
//!    [`FormView`] holding the target URL and the input properties
//!
//! # Quick Start
//!
//! ```rust
//! use acton_hateoas::forms::AffordanceFormRenderer;
//! use acton_hateoas::model::{Affordance, HttpMethod, InputType, Link, PropertyMetadata, Resource};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let renderer = AffordanceFormRenderer::embedded()?;
//!
//! let resource = Resource::default().add(Link::of("/users").and_affordance(
//!     Affordance::builder("register", HttpMethod::Post, "/users")
//!         .property(PropertyMetadata::new("email", InputType::Email).required())
//!         .property(PropertyMetadata::new("password", InputType::Password).required())
//!         .build(),
//! ));
//!
//! let mut body = Vec::new();
//! renderer.write_to(&resource, &mut body)?;
//! assert!(String::from_utf8(body)?.contains(r#"type="password""#));
//! # Ok(())
//! # }
//! ```

mod extract;
mod render;

pub use extract::{html_model, primary_affordance};
pub use render::{AffordanceFormRenderer, FormView};
