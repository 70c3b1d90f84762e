//! Template sources
//!
//! A [`TemplateSource`] resolves a template name to its text. The form
//! template is read through one of these exactly once, when the renderer is
//! built.

use std::path::{Path, PathBuf};

use super::TemplateError;

/// Resolves template names to template text
pub trait TemplateSource: Send + Sync {
    /// Read the full text of the named template
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NotFound`] if the source has no such template
    /// and [`TemplateError::ReadFailed`] if it exists but cannot be read.
    fn load(&self, name: &str) -> Result<String, TemplateError>;

    /// Short description used in log output
    fn describe(&self) -> String;
}

/// Templates compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    /// Get embedded template content
    #[must_use]
    pub fn get(name: &str) -> Option<&'static str> {
        EMBEDDED_TEMPLATES.get(name).copied()
    }

    /// Names of all embedded templates
    pub fn names() -> impl Iterator<Item = &'static str> {
        EMBEDDED_TEMPLATES.keys().copied()
    }
}

impl TemplateSource for EmbeddedTemplates {
    fn load(&self, name: &str) -> Result<String, TemplateError> {
        Self::get(name)
            .map(ToString::to_string)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}

/// Templates read from a directory on disk
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    /// Resolve templates relative to `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory templates are resolved against
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the directory holds the named template
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.root.join(name).is_file()
    }
}

impl TemplateSource for DirectoryTemplates {
    fn load(&self, name: &str) -> Result<String, TemplateError> {
        let path = self.root.join(name);
        if !path.exists() {
            return Err(TemplateError::NotFound(name.to_string()));
        }

        std::fs::read_to_string(&path).map_err(|e| TemplateError::ReadFailed(name.to_string(), e))
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Directory override with embedded fallback
///
/// Customised templates in the directory win; anything missing there is
/// served from the embedded defaults.
#[derive(Debug, Clone)]
pub struct LayeredTemplates {
    overrides: DirectoryTemplates,
}

impl LayeredTemplates {
    /// Layer `root` over the embedded defaults
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            overrides: DirectoryTemplates::new(root),
        }
    }

    /// Whether the named template is customised
    #[must_use]
    pub fn is_customized(&self, name: &str) -> bool {
        self.overrides.contains(name)
    }
}

impl TemplateSource for LayeredTemplates {
    fn load(&self, name: &str) -> Result<String, TemplateError> {
        match self.overrides.load(name) {
            Err(TemplateError::NotFound(_)) => {
                tracing::debug!(template = name, "No override found, using embedded template");
                EmbeddedTemplates.load(name)
            }
            other => other,
        }
    }

    fn describe(&self) -> String {
        format!("{} (embedded fallback)", self.overrides.describe())
    }
}

// Default templates that ship with the crate
static EMBEDDED_TEMPLATES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "forms/affordance.html" => include_str!("defaults/forms/affordance.html"),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::FORM_TEMPLATE;

    #[test]
    fn test_embedded_form_template_exists() {
        assert!(EmbeddedTemplates::get(FORM_TEMPLATE).is_some());
        assert!(EmbeddedTemplates::names().any(|name| name == FORM_TEMPLATE));
    }

    #[test]
    fn test_embedded_missing_template() {
        let err = EmbeddedTemplates.load("forms/missing.html").unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(name) if name == "forms/missing.html"));
    }

    #[test]
    fn test_directory_source_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("forms")).unwrap();
        std::fs::write(dir.path().join(FORM_TEMPLATE), "<form>{{ target }}</form>").unwrap();

        let source = DirectoryTemplates::new(dir.path());
        assert!(source.contains(FORM_TEMPLATE));
        assert_eq!(source.load(FORM_TEMPLATE).unwrap(), "<form>{{ target }}</form>");
    }

    #[test]
    fn test_directory_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectoryTemplates::new(dir.path());

        assert!(matches!(
            source.load(FORM_TEMPLATE),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_directory_source_unreadable_entry() {
        let dir = tempfile::tempdir().unwrap();
        // present, but a directory
        std::fs::create_dir_all(dir.path().join(FORM_TEMPLATE)).unwrap();

        let source = DirectoryTemplates::new(dir.path());
        assert!(matches!(
            source.load(FORM_TEMPLATE),
            Err(TemplateError::ReadFailed(_, _))
        ));
    }

    #[test]
    fn test_layered_prefers_override() {
        let dir = tempfile::tempdir().unwrap();
        let source = LayeredTemplates::new(dir.path());
        assert!(!source.is_customized(FORM_TEMPLATE));
        assert_eq!(
            source.load(FORM_TEMPLATE).unwrap(),
            EmbeddedTemplates::get(FORM_TEMPLATE).unwrap()
        );

        std::fs::create_dir_all(dir.path().join("forms")).unwrap();
        std::fs::write(dir.path().join(FORM_TEMPLATE), "custom").unwrap();
        assert!(source.is_customized(FORM_TEMPLATE));
        assert_eq!(source.load(FORM_TEMPLATE).unwrap(), "custom");
    }
}
