use thiserror::Error;

/// Why an expand/shrink/slide request was refused.
///
/// Refusals never mutate layout state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("another animation is still running")]
    Animating,
    #[error("no content pane is bound")]
    NoContentPane,
    #[error("the week-only layout cannot expand")]
    WeekOnlyMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),
    #[error("invalid value `{value}` for attribute `{key}`")]
    InvalidValue { key: String, value: String },
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, value: &str) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}
