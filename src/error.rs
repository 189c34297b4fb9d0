use thiserror::Error;

/// Errors raised while building a scene from external input.
///
/// The per-frame pipeline itself never fails; only configuration and the
/// JavaScript boundary can reject input.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Config parse error: {0}")]
    Config(#[from] serde_yaml::Error),
    #[error("Invalid value for '{field}': {reason}")]
    InvalidParameter { field: String, reason: String },
    #[error("Unknown mode '{0}', expected SCATTERED or TREE_SHAPE")]
    UnknownMode(String),
}

impl SceneError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
