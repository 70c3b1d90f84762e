//! Property metadata for affordance inputs
//!
//! Describes one input field of an affordance: its name, the HTML input type
//! used to render it and the constraints a client should honour.

use serde::{Serialize, Serializer};

/// HTML input types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputType {
    /// Text input (default)
    #[default]
    Text,
    /// Email input with validation
    Email,
    /// Password input (masked)
    Password,
    /// Number input
    Number,
    /// Telephone input
    Tel,
    /// URL input
    Url,
    /// Search input
    Search,
    /// Date input
    Date,
    /// Time input
    Time,
    /// Date and time input
    DateTimeLocal,
    /// Month input
    Month,
    /// Week input
    Week,
    /// Color picker
    Color,
    /// Range slider
    Range,
    /// Checkbox
    Checkbox,
    /// Hidden input
    Hidden,
}

impl InputType {
    /// Get the HTML type attribute value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Search => "search",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTimeLocal => "datetime-local",
            Self::Month => "month",
            Self::Week => "week",
            Self::Color => "color",
            Self::Range => "range",
            Self::Checkbox => "checkbox",
            Self::Hidden => "hidden",
        }
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for InputType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Metadata for a single affordance input
///
/// Instances are built by whoever models the resource and are only read by
/// the renderer.
///
/// # Examples
///
/// ```rust
/// use acton_hateoas::model::{InputType, PropertyMetadata};
///
/// let email = PropertyMetadata::new("email", InputType::Email)
///     .required()
///     .pattern(r".+@.+");
///
/// assert_eq!(email.name(), "email");
/// assert!(email.is_required());
/// assert_eq!(email.input_type().as_str(), "email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyMetadata {
    name: String,
    input_type: InputType,
    required: bool,
    read_only: bool,
    pattern: Option<String>,
}

impl PropertyMetadata {
    /// Create metadata for an optional, writable property
    #[must_use]
    pub fn new(name: impl Into<String>, input_type: InputType) -> Self {
        Self {
            name: name.into(),
            input_type,
            required: false,
            read_only: false,
            pattern: None,
        }
    }

    /// Create metadata for a plain text property
    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, InputType::Text)
    }

    /// Mark the property as required
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the property as read-only
    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Constrain the property value with a regular expression
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Property name, used as the form field name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// HTML input type
    #[must_use]
    pub const fn input_type(&self) -> InputType {
        self.input_type
    }

    /// Whether a value must be supplied
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the property can only be read
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Regular expression the value has to match, if any
    #[must_use]
    pub fn regex(&self) -> Option<&str> {
        self.pattern.as_deref()
    }
}
