//! Configuration management for acton-hateoas
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `ACTON_` prefix, `__` for nesting)
//! 2. `./config.toml` (development)
//! 3. `~/.config/acton-hateoas/{service}/config.toml` (user config, XDG)
//! 4. `/etc/acton-hateoas/{service}/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # config.toml
//! [templates]
//! template_dir = "./templates"
//! trim_blocks = true
//! lstrip_blocks = true
//!
//! [logging]
//! json = false
//! ```
//!
//! # Usage
//!
//! ```rust
//! use acton_hateoas::config::HateoasConfig;
//!
//! // Load default configuration
//! let config = HateoasConfig::default();
//!
//! assert!(config.templates.template_dir.is_none());
//! assert!(config.templates.trim_blocks);
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::template::{EmbeddedTemplates, LayeredTemplates, TemplateOptions, TemplateSource};

/// Form template settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    /// Directory holding customised templates; embedded defaults fill the gaps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,

    /// Remove the first newline after a block tag
    pub trim_blocks: bool,

    /// Strip whitespace before a block tag on its line
    pub lstrip_blocks: bool,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            template_dir: None,
            trim_blocks: true,
            lstrip_blocks: true,
        }
    }
}

impl TemplateSettings {
    /// Compile options derived from these settings
    #[must_use]
    pub const fn options(&self) -> TemplateOptions {
        TemplateOptions {
            trim_blocks: self.trim_blocks,
            lstrip_blocks: self.lstrip_blocks,
        }
    }

    /// Template source these settings resolve to
    #[must_use]
    pub fn source(&self) -> Box<dyn TemplateSource> {
        match &self.template_dir {
            Some(dir) => Box::new(LayeredTemplates::new(dir)),
            None => Box::new(EmbeddedTemplates),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Emit JSON log lines instead of pretty output
    pub json: bool,

    /// Filter directive used when `RUST_LOG` is unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            json: !cfg!(debug_assertions),
            filter: None,
        }
    }
}

/// Complete acton-hateoas configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HateoasConfig {
    /// Form template settings
    #[serde(default)]
    pub templates: TemplateSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl HateoasConfig {
    /// Load configuration for a specific service
    ///
    /// Searches for configuration in XDG-compliant locations with precedence:
    /// 1. Environment variables (`ACTON_*`, use `__` for nesting)
    /// 2. `./config.toml`
    /// 3. `~/.config/acton-hateoas/{service_name}/config.toml`
    /// 4. `/etc/acton-hateoas/{service_name}/config.toml`
    /// 5. Defaults
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file cannot be read or parsed
    /// - Configuration values fail type conversion
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use acton_hateoas::config::HateoasConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = HateoasConfig::load_for_service("my-app")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_for_service(service_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new()
            // 5. Start with defaults (lowest priority)
            .merge(Toml::string(&toml::to_string(&Self::default())?));

        // 4. System config: /etc/acton-hateoas/{service_name}/config.toml
        let system_config = PathBuf::from("/etc/acton-hateoas")
            .join(service_name)
            .join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        // 3. User config: ~/.config/acton-hateoas/{service_name}/config.toml
        let user_config = Self::recommended_path(service_name);
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        // 2. Local config: ./config.toml
        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        // 1. Environment variables (highest priority, double underscore for nesting)
        figment = figment.merge(Env::prefixed("ACTON_").split("__").lowercase(true));

        let config = figment.extract()?;
        tracing::debug!(service = service_name, "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - The file contains invalid TOML syntax
    /// - Configuration values fail type conversion
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use acton_hateoas::config::HateoasConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = HateoasConfig::load_from("./config/production.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = Figment::new()
            // Start with defaults
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            // Load from specified file (if it exists)
            .merge(Toml::file(path.as_ref()))
            // Environment variables override everything
            .merge(Env::prefixed("ACTON_").split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// Get the recommended XDG config path for a service
    ///
    /// # Example
    ///
    /// ```rust
    /// use acton_hateoas::config::HateoasConfig;
    ///
    /// let path = HateoasConfig::recommended_path("my-app");
    /// assert!(path.ends_with("config.toml"));
    /// ```
    #[must_use]
    pub fn recommended_path(service_name: &str) -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| {
                config_dir
                    .join("acton-hateoas")
                    .join(service_name)
                    .join("config.toml")
            },
        )
    }
}
