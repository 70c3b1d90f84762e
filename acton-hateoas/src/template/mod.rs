//! Form template loading
//!
//! The affordance form is rendered from a single minijinja template named
//! [`FORM_TEMPLATE`]. It is resolved through a [`TemplateSource`], read in
//! full and compiled once into a [`FormTemplate`].
//!
//! Sources, in order of typical use:
//! 1. [`EmbeddedTemplates`]: the default template compiled into the binary
//! 2. [`LayeredTemplates`]: a customisation directory over the embedded defaults
//! 3. [`DirectoryTemplates`]: a directory only, no fallback
//!
//! # Example
//!
//! ```rust
//! use acton_hateoas::template::{EmbeddedTemplates, FormTemplate, TemplateOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let template = FormTemplate::load(&EmbeddedTemplates, TemplateOptions::default())?;
//!
//! let html = template.render(minijinja::context! {
//!     target => "/employees",
//!     properties => Vec::<String>::new(),
//! })?;
//! assert!(html.contains(r#"action="/employees""#));
//! # Ok(())
//! # }
//! ```

mod loader;
mod source;

pub use loader::{FormTemplate, TemplateError, TemplateOptions};
pub use source::{DirectoryTemplates, EmbeddedTemplates, LayeredTemplates, TemplateSource};

/// Name of the affordance form template
pub const FORM_TEMPLATE: &str = "forms/affordance.html";
