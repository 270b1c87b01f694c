use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::TextGenerator;
use crate::domain::DomainError;

enum Reply {
    Text(String),
    Failure(String),
}

/// A [`TextGenerator`] that answers every prompt with a fixed reply and
/// records each call it receives.
pub struct MockTextGenerator {
    reply: Reply,
    calls: Mutex<Vec<(String, f32)>>,
}

impl MockTextGenerator {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            reply: Reply::Text(text.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with [`DomainError::Upstream`] carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Reply::Failure(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(prompt, temperature)` for each call, oldest first.
    pub fn calls(&self) -> Vec<(String, f32)> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, DomainError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((prompt.to_string(), temperature));
        }
        debug!("MockTextGenerator received {} byte prompt", prompt.len());

        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Failure(message) => Err(DomainError::upstream(message.clone())),
        }
    }
}
