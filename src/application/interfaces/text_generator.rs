use async_trait::async_trait;

use crate::domain::DomainError;

/// An interface for sending a single prompt to a text-generation model and
/// receiving its completion.
///
/// Implementors encapsulate transport, credentials and vendor-specific API
/// details. Every failure, whatever its cause, is reported as
/// [`DomainError::Upstream`].
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Complete `prompt` sampling at `temperature` and return the generated
    /// text as-is.
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, DomainError>;
}
