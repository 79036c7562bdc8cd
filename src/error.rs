//! Central error handling for label placement.
//!
//! Geometry failures never reach this type: a feature that cannot
//! contribute a visual center is simply skipped. `LabelError` only covers
//! misuse of the map's layer/source registry.

/// Error type for map registry operations.
#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    #[error("layer already exists: {0}")]
    DuplicateLayer(String),

    #[error("no such layer: {0}")]
    UnknownLayer(String),

    #[error("no such source: {0}")]
    UnknownSource(String),
}

/// Result type alias for label placement operations.
pub type LabelResult<T> = Result<T, LabelError>;
