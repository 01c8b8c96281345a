/// Convenience result type used across airglyph.
pub type AirglyphResult<T> = Result<T, AirglyphError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum AirglyphError {
    /// Invalid configuration or caller-provided parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Input records could not be read or parsed.
    #[error("data error: {0}")]
    Data(String),

    /// A renderer or frame sink failed.
    #[error("render error: {0}")]
    Render(String),

    /// Illegal scheduler transition or a run that cannot start.
    #[error("scheduler error: {0}")]
    Scheduler(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AirglyphError {
    /// Build a [`AirglyphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`AirglyphError::Data`] value.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Build a [`AirglyphError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`AirglyphError::Scheduler`] value.
    pub fn scheduler(msg: impl Into<String>) -> Self {
        Self::Scheduler(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
