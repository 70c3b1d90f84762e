//! Error types and error handling

use thiserror::Error;

/// Errors raised while turning a resource into an affordance form
#[derive(Debug, Error)]
pub enum AffordanceError {
    /// The resource has no link with the required relation
    #[error("no link with relation '{rel}' found")]
    LinkNotFound {
        /// Relation that was looked up
        rel: String,
    },

    /// The link exists but declares no affordance
    #[error("link '{href}' has no affordances")]
    NoAffordance {
        /// Target of the link without affordances
        href: String,
    },

    /// The affordance has no model for the requested media type
    #[error("affordance '{affordance}' has no model for {media_type}")]
    ModelUnavailable {
        /// Affordance name
        affordance: String,
        /// Media type that was requested
        media_type: String,
    },

    /// Template execution failed
    #[error("template render error: {0}")]
    Render(#[from] minijinja::Error),

    /// Writing the rendered form failed
    #[error("failed to write rendered form: {0}")]
    Io(#[from] std::io::Error),

    /// HTML cannot be read back into a resource
    #[error("reading {media_type} into a resource is not supported")]
    Unsupported {
        /// Media type of the rejected input
        media_type: String,
    },
}

impl AffordanceError {
    /// Whether the error comes from a missing link, affordance or model
    #[must_use]
    pub const fn is_lookup(&self) -> bool {
        matches!(
            self,
            Self::LinkNotFound { .. } | Self::NoAffordance { .. } | Self::ModelUnavailable { .. }
        )
    }
}
