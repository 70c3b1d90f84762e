//! acton-hateoas: HTML forms for hypermedia affordances
//!
//! A hypermedia API attaches *affordances* to the links of the resources it
//! returns: described actions such as "create an employee" with a target URL
//! and a list of inputs. This crate renders the affordance on a resource's
//! `self` link as an HTML form so a person browsing the API gets something to
//! submit.
//!
//! # Quick Start
//!
//! ```rust
//! use acton_hateoas::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let renderer = AffordanceFormRenderer::from_config(&HateoasConfig::default())?;
//!
//! let employee = Resource::new(json!({ "name": "Bilbo" })).add(
//!     Link::of("/employees/1").and_affordance(
//!         Affordance::builder("update", HttpMethod::Put, "/employees/1")
//!             .property(PropertyMetadata::text("name").required())
//!             .property(PropertyMetadata::new("role", InputType::Text))
//!             .build(),
//!     ),
//! );
//!
//! if renderer.can_write::<Resource>(&mime::TEXT_HTML) {
//!     let html = renderer.render(&employee)?;
//!     assert!(!html.is_empty());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`model`]: resources, links, affordances and property metadata
//! - [`template`]: template sources and the compiled form template
//! - [`forms`]: affordance selection and rendering
//! - [`config`]: layered configuration
//! - [`observability`]: logging setup

pub mod config;
pub mod error;
pub mod forms;
pub mod model;
pub mod observability;
pub mod template;

pub mod prelude {
    //! Convenience re-exports for common types
    //!
    //! # Examples
    //!
    //! ```rust
    //! use acton_hateoas::prelude::*;
    //! ```

    pub use crate::config::HateoasConfig;
    pub use crate::error::AffordanceError;
    pub use crate::forms::{html_model, AffordanceFormRenderer};
    pub use crate::model::{
        Affordance, AffordanceModel, HttpMethod, InputType, Link, LinkRelation, PropertyMetadata,
        Resource,
    };
    pub use crate::template::{FormTemplate, TemplateError, TemplateSource};
}
