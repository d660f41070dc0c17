use thiserror::Error;

/// A failure inside a delegated physical model.
///
/// Covers response-function construction, simulation, sizing, and field
/// generation. The searches never recover from these; they propagate
/// unmodified to the caller.
#[derive(Debug, Error)]
#[error("field model failed: {context}")]
pub struct ModelError {
    /// Operation context for the failure.
    context: String,

    /// Underlying model error.
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl ModelError {
    /// Creates a model failure with context.
    pub fn new(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            context: context.into(),
            source: Box::new(source),
        }
    }

    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }
}
