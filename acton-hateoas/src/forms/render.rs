//! Affordance form rendering
//!
//! Turns the primary affordance of a resource into HTML bytes. The renderer
//! is write-only: HTML is never parsed back into a resource.

use std::any::TypeId;
use std::io::{Read, Write};

use mime::Mime;
use serde::Serialize;

use super::extract::html_model;
use crate::config::HateoasConfig;
use crate::error::AffordanceError;
use crate::model::{PropertyMetadata, Resource};
use crate::template::{FormTemplate, TemplateError, TemplateOptions, TemplateSource};

/// The values the form template is rendered against
#[derive(Debug, Clone, Serialize)]
pub struct FormView<'a> {
    /// URL the form submits to
    pub target: &'a str,
    /// Input properties in rendering order
    pub properties: Vec<&'a PropertyMetadata>,
}

/// Renders affordances as HTML forms
///
/// Holds the compiled form template. Cloning is cheap and every clone shares
/// the same template, so a single renderer can be used from many threads at
/// once.
///
/// # Examples
///
/// ```rust
/// use acton_hateoas::forms::AffordanceFormRenderer;
/// use acton_hateoas::model::{Affordance, HttpMethod, Link, PropertyMetadata, Resource};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let renderer = AffordanceFormRenderer::embedded()?;
///
/// let resource = Resource::default().add(Link::of("/employees").and_affordance(
///     Affordance::builder("create", HttpMethod::Post, "/employees")
///         .property(PropertyMetadata::text("name").required())
///         .build(),
/// ));
///
/// let html = String::from_utf8(renderer.render(&resource)?)?;
/// assert!(html.contains(r#"action="/employees""#));
/// assert!(html.contains(r#"name="name""#));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AffordanceFormRenderer {
    template: FormTemplate,
}

impl AffordanceFormRenderer {
    /// Create a renderer around an already compiled template
    #[must_use]
    pub const fn new(template: FormTemplate) -> Self {
        Self { template }
    }

    /// Load and compile the form template from a source
    ///
    /// # Errors
    ///
    /// Returns error if the template cannot be found, read or compiled.
    pub fn load(
        source: &dyn TemplateSource,
        options: TemplateOptions,
    ) -> Result<Self, TemplateError> {
        FormTemplate::load(source, options).map(Self::new)
    }

    /// Renderer using the embedded default template
    ///
    /// # Errors
    ///
    /// Returns error if the embedded template fails to compile.
    pub fn embedded() -> Result<Self, TemplateError> {
        Self::load(&crate::template::EmbeddedTemplates, TemplateOptions::default())
    }

    /// Renderer built from configuration
    ///
    /// # Errors
    ///
    /// Returns error if the configured template cannot be loaded.
    pub fn from_config(config: &HateoasConfig) -> Result<Self, TemplateError> {
        let source = config.templates.source();
        Self::load(source.as_ref(), config.templates.options())
    }

    /// Media types this renderer produces
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn supported_media_types(&self) -> &'static [Mime] {
        std::slice::from_ref(&HTML)
    }

    /// Media type of rendered output
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn media_type(&self) -> &'static Mime {
        &HTML
    }

    /// Whether values of type `T` can be read from `media_type`
    ///
    /// Always `false`.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn can_read<T: ?Sized + 'static>(&self, _media_type: &Mime) -> bool {
        false
    }

    /// Whether values of type `T` can be written as `media_type`
    ///
    /// Only [`Resource`] written as exactly `text/html` qualifies; media type
    /// parameters such as a charset make the types differ.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn can_write<T: ?Sized + 'static>(&self, media_type: &Mime) -> bool {
        TypeId::of::<T>() == TypeId::of::<Resource>() && *media_type == mime::TEXT_HTML
    }

    /// Render the resource's primary affordance as UTF-8 HTML
    ///
    /// # Errors
    ///
    /// Returns error if no affordance can be selected or template execution
    /// fails.
    pub fn render(&self, resource: &Resource) -> Result<Vec<u8>, AffordanceError> {
        let model = html_model(resource).inspect_err(|e| {
            tracing::warn!(error = %e, "Cannot select affordance for form");
        })?;

        let view = FormView {
            target: model.target(),
            properties: model.input().iter().collect(),
        };

        tracing::trace!(
            affordance = model.name(),
            target = view.target,
            fields = view.properties.len(),
            "Rendering affordance form"
        );

        let html = self.template.render(&view)?;
        Ok(html.into_bytes())
    }

    /// Render and write the form to `sink`
    ///
    /// The form is rendered in full before anything is written, so a failed
    /// render leaves the sink untouched.
    ///
    /// # Errors
    ///
    /// Returns error if rendering or writing fails.
    pub fn write_to(
        &self,
        resource: &Resource,
        mut sink: impl Write,
    ) -> Result<(), AffordanceError> {
        let bytes = self.render(resource)?;
        sink.write_all(&bytes)?;
        sink.flush()?;
        Ok(())
    }

    /// Reading HTML into a resource is not supported
    ///
    /// # Errors
    ///
    /// Always returns [`AffordanceError::Unsupported`] without reading from
    /// `input`.
    #[allow(clippy::unused_self, clippy::needless_pass_by_value)]
    pub fn read(&self, _input: impl Read) -> Result<Resource, AffordanceError> {
        Err(AffordanceError::Unsupported {
            media_type: HTML.to_string(),
        })
    }
}

static HTML: Mime = mime::TEXT_HTML;
