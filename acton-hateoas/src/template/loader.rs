//! Compiled form template

use std::fmt::Write as _;
use std::sync::Arc;

use minijinja::{AutoEscape, Environment, ErrorKind, Output, State, Value};
use serde::Serialize;
use thiserror::Error;

use super::source::TemplateSource;
use super::FORM_TEMPLATE;

/// Errors that can occur when loading or compiling the form template
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template file could not be read
    #[error("failed to read template '{0}': {1}")]
    ReadFailed(String, std::io::Error),

    /// Template was not found in the source
    #[error("template not found: {0}")]
    NotFound(String),

    /// Template text is not a valid template
    #[error("failed to compile template: {0}")]
    Compile(#[from] minijinja::Error),
}

/// Whitespace handling for the compiled template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateOptions {
    /// Remove the first newline after a block tag
    pub trim_blocks: bool,
    /// Strip whitespace before a block tag on its line
    pub lstrip_blocks: bool,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            trim_blocks: true,
            lstrip_blocks: true,
        }
    }
}

/// The affordance form template, compiled once
///
/// The template text is read in full when loading; no handle to the source is
/// kept. Clones share the same compiled environment and rendering never
/// mutates it, so one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct FormTemplate {
    env: Arc<Environment<'static>>,
}

impl FormTemplate {
    /// Read the form template from `source` and compile it
    ///
    /// # Errors
    ///
    /// Returns error if the template cannot be found, read or compiled.
    pub fn load(
        source: &dyn TemplateSource,
        options: TemplateOptions,
    ) -> Result<Self, TemplateError> {
        tracing::debug!(source = %source.describe(), template = FORM_TEMPLATE, "Loading form template");
        let text = source.load(FORM_TEMPLATE)?;
        Self::compile_with(text, options)
    }

    /// Compile template text with default options
    ///
    /// # Errors
    ///
    /// Returns error if the text is not a valid template.
    pub fn compile(text: impl Into<String>) -> Result<Self, TemplateError> {
        Self::compile_with(text, TemplateOptions::default())
    }

    /// Compile template text
    ///
    /// # Errors
    ///
    /// Returns error if the text is not a valid template.
    pub fn compile_with(
        text: impl Into<String>,
        options: TemplateOptions,
    ) -> Result<Self, TemplateError> {
        let text: String = text.into();
        let mut env = Environment::new();
        env.set_trim_blocks(options.trim_blocks);
        env.set_lstrip_blocks(options.lstrip_blocks);
        env.set_formatter(html_formatter);
        env.add_template_owned(FORM_TEMPLATE, text)?;

        tracing::debug!(template = FORM_TEMPLATE, "Form template compiled");
        Ok(Self { env: Arc::new(env) })
    }

    /// Render the template against a view
    ///
    /// # Errors
    ///
    /// Returns error if template execution fails.
    pub fn render<S: Serialize>(&self, view: S) -> Result<String, minijinja::Error> {
        self.env.get_template(FORM_TEMPLATE)?.render(view)
    }
}

/// HTML escaping that leaves URL slashes intact
fn html_formatter(
    out: &mut Output<'_>,
    state: &State<'_, '_>,
    value: &Value,
) -> Result<(), minijinja::Error> {
    if value.is_safe() || value.is_undefined() || matches!(state.auto_escape(), AutoEscape::None) {
        return minijinja::escape_formatter(out, state, value);
    }

    let text = value.to_string();
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }

    out.write_str(&escaped)
        .map_err(|_| minijinja::Error::new(ErrorKind::WriteFailure, "failed to write output"))
}
