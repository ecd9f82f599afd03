use thiserror::Error;

/// A thermodynamic model operation failed while evaluating a flow station.
///
/// Wraps the model's own error type, which differs from model to model,
/// together with the operation that produced it.
#[derive(Debug, Error)]
#[error("thermodynamic model failed: {context}")]
pub struct ThermoError {
    /// Operation context, such as `"state_from(total)"`.
    pub context: String,

    /// Underlying thermodynamic model error.
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl ThermoError {
    pub(crate) fn new(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            context: context.into(),
            source: Box::new(err),
        }
    }
}
