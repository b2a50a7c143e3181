use std::path::PathBuf;

/// Convenience result type used across orrery.
pub type OrreryResult<T> = Result<T, OrreryError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum OrreryError {
    /// Invalid timeline, narration, composition or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid interpolation ranges or spring parameters.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while evaluating or rendering a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// A required asset file does not exist.
    #[error("missing asset '{}'", path.display())]
    Asset {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OrreryError {
    /// Build an [`OrreryError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`OrreryError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build an [`OrreryError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build an [`OrreryError::Asset`] value.
    pub fn missing_asset(path: impl Into<PathBuf>) -> Self {
        Self::Asset { path: path.into() }
    }

    /// Build an [`OrreryError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
