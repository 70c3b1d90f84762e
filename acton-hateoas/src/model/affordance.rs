//! Affordances and their media-type specific models

use mime::Mime;

use super::property::PropertyMetadata;

/// HTTP methods an affordance can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST (default)
    #[default]
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Uppercase method name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The view of an affordance for one media type
///
/// Exposes the target URL and the ordered input properties. Property order is
/// rendering order; duplicate names are kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffordanceModel {
    name: String,
    method: HttpMethod,
    target: String,
    input: Vec<PropertyMetadata>,
}

impl AffordanceModel {
    /// Create a model
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        method: HttpMethod,
        target: impl Into<String>,
        input: Vec<PropertyMetadata>,
    ) -> Self {
        Self {
            name: name.into(),
            method,
            target: target.into(),
            input,
        }
    }

    /// Affordance name, e.g. `create`
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// HTTP method the action uses
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// URL the action is submitted to
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Input properties in declaration order
    #[must_use]
    pub fn input(&self) -> &[PropertyMetadata] {
        &self.input
    }
}

/// A described interaction attached to a link
///
/// Holds one [`AffordanceModel`] per media type. Affordances created through
/// [`Affordance::builder`] carry a `text/html` model unless configured
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordance {
    name: String,
    models: Vec<(Mime, AffordanceModel)>,
}

impl Affordance {
    /// Create an affordance without any media-type models
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            models: Vec::new(),
        }
    }

    /// Start building an affordance for the given action
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acton_hateoas::model::{Affordance, HttpMethod, PropertyMetadata};
    ///
    /// let create = Affordance::builder("create", HttpMethod::Post, "/employees")
    ///     .property(PropertyMetadata::text("firstName").required())
    ///     .property(PropertyMetadata::text("lastName"))
    ///     .build();
    ///
    /// let html = create.model(&mime::TEXT_HTML).unwrap();
    /// assert_eq!(html.target(), "/employees");
    /// assert_eq!(html.input().len(), 2);
    /// ```
    #[must_use]
    pub fn builder(
        name: impl Into<String>,
        method: HttpMethod,
        target: impl Into<String>,
    ) -> AffordanceBuilder {
        AffordanceBuilder::new(name, method, target)
    }

    /// Register (or replace) the model for a media type
    #[must_use]
    pub fn with_model(mut self, media_type: Mime, model: AffordanceModel) -> Self {
        if let Some(slot) = self.models.iter_mut().find(|(m, _)| *m == media_type) {
            slot.1 = model;
        } else {
            self.models.push((media_type, model));
        }
        self
    }

    /// Affordance name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Model registered for exactly this media type
    #[must_use]
    pub fn model(&self, media_type: &Mime) -> Option<&AffordanceModel> {
        self.models
            .iter()
            .find(|(m, _)| m == media_type)
            .map(|(_, model)| model)
    }

    /// Media types this affordance has models for
    pub fn media_types(&self) -> impl Iterator<Item = &Mime> {
        self.models.iter().map(|(m, _)| m)
    }
}

/// Builder for [`Affordance`]
#[derive(Debug, Clone)]
pub struct AffordanceBuilder {
    name: String,
    method: HttpMethod,
    target: String,
    input: Vec<PropertyMetadata>,
    media_types: Vec<Mime>,
}

impl AffordanceBuilder {
    fn new(name: impl Into<String>, method: HttpMethod, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method,
            target: target.into(),
            input: Vec::new(),
            media_types: vec![mime::TEXT_HTML],
        }
    }

    /// Append an input property
    #[must_use]
    pub fn property(mut self, property: PropertyMetadata) -> Self {
        self.input.push(property);
        self
    }

    /// Append several input properties in order
    #[must_use]
    pub fn properties(mut self, properties: impl IntoIterator<Item = PropertyMetadata>) -> Self {
        self.input.extend(properties);
        self
    }

    /// Also build a model for another media type
    #[must_use]
    pub fn media_type(mut self, media_type: Mime) -> Self {
        if !self.media_types.contains(&media_type) {
            self.media_types.push(media_type);
        }
        self
    }

    /// Build models only for the given media types
    #[must_use]
    pub fn only_media_types(mut self, media_types: impl IntoIterator<Item = Mime>) -> Self {
        self.media_types.clear();
        for media_type in media_types {
            self = self.media_type(media_type);
        }
        self
    }

    /// Build the affordance
    #[must_use]
    pub fn build(self) -> Affordance {
        let model = AffordanceModel::new(&self.name, self.method, self.target, self.input);
        self.media_types
            .into_iter()
            .fold(Affordance::new(self.name), |affordance, media_type| {
                affordance.with_model(media_type, model.clone())
            })
    }
}
