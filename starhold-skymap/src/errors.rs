//! Error types for catalog ingestion and scene assembly.
//!
//! These errors never cross the crate's public rendering boundary: callers
//! of [`SkyRenderer::render_frame`](crate::SkyRenderer::render_frame) see a
//! degraded scene, not an `Err`. The variants exist so the degradation
//! points can log *which* sub-step failed.

use thiserror::Error;

/// Convenience alias for `Result<T, SkymapError>`.
pub type SkymapResult<T> = Result<T, SkymapError>;

#[derive(Debug, Error)]
pub enum SkymapError {
    /// A catalog section failed to deserialize.
    #[error("Failed to parse {section} data: {message}")]
    CatalogParse {
        section: &'static str,
        message: String,
    },

    /// A scene layer could not be assembled.
    #[error("Scene layer '{layer}' failed: {message}")]
    Layer {
        layer: &'static str,
        message: String,
    },
}

impl SkymapError {
    pub fn catalog_parse(section: &'static str, err: impl std::fmt::Display) -> Self {
        Self::CatalogParse {
            section,
            message: err.to_string(),
        }
    }

    pub fn layer(layer: &'static str, message: impl Into<String>) -> Self {
        Self::Layer {
            layer,
            message: message.into(),
        }
    }
}
