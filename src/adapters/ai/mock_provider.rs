//! Mock AI provider for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::ports::{AiError, AiProvider, CompletionRequest, CompletionResponse};

/// Scriptable provider returning a canned reply or a canned failure.
#[derive(Default)]
pub struct MockAiProvider {
    reply: RwLock<String>,
    failure: RwLock<Option<AiError>>,
    calls: AtomicUsize,
    last_request: RwLock<Option<CompletionRequest>>,
}

impl MockAiProvider {
    /// Creates a provider that always answers with `reply`.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: RwLock::new(reply.into()),
            ..Self::default()
        }
    }

    /// Makes every subsequent call fail with the given error.
    pub fn fail_with(&self, error: AiError) {
        *self.failure.write().unwrap() = Some(error);
    }

    /// Clears a previously scripted failure.
    pub fn succeed(&self) {
        *self.failure.write().unwrap() = None;
    }

    /// Number of completion calls made.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, for asserting on the forwarded context.
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.read().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.write().unwrap() = Some(request);

        if let Some(error) = self.failure.read().unwrap().clone() {
            return Err(error);
        }

        Ok(CompletionResponse {
            content: self.reply.read().unwrap().clone(),
            model: "mock".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MessageRole;

    #[tokio::test]
    async fn returns_the_scripted_reply() {
        let provider = MockAiProvider::with_reply("Hi!");
        let response = provider.complete(CompletionRequest::new()).await.unwrap();
        assert_eq!(response.content, "Hi!");
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn scripted_failure_is_returned_until_cleared() {
        let provider = MockAiProvider::with_reply("Hi!");
        provider.fail_with(AiError::RateLimited);

        assert!(provider.complete(CompletionRequest::new()).await.is_err());
        provider.succeed();
        assert!(provider.complete(CompletionRequest::new()).await.is_ok());
    }

    #[tokio::test]
    async fn captures_the_last_request() {
        let provider = MockAiProvider::with_reply("Hi!");
        let request = CompletionRequest::new().with_message(MessageRole::User, "Hello");
        provider.complete(request).await.unwrap();

        let captured = provider.last_request().unwrap();
        assert_eq!(captured.messages.len(), 1);
        assert_eq!(captured.messages[0].content, "Hello");
    }
}
