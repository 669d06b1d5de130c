//! Mock completion adapter for testing without API calls.
//!
//! Replays scripted replies in order and counts every call, so callers can
//! check that exactly one completion is requested per operation.

use crate::domain::DomainError;
use crate::ports::{CompletionPort, CompletionRequest};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

/// One scripted outcome.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this text as the raw completion.
    Text(String),
    /// Fail with `GenerationFailed`.
    Fail,
}

/// Mock completion adapter.
///
/// Pops one reply per call; once the script is exhausted, the default reply
/// is used. Simulates network latency with a configurable delay.
pub struct MockCompletionAdapter {
    script: Mutex<VecDeque<MockReply>>,
    default_reply: MockReply,
    delay_ms: u64,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletionAdapter {
    /// Mock that fails every call.
    pub fn failing() -> Self {
        Self::with_default(MockReply::Fail)
    }

    /// Mock that returns `text` on every call.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_default(MockReply::Text(text.into()))
    }

    pub fn with_default(default_reply: MockReply) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            default_reply,
            delay_ms: 0,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue replies consumed before the default.
    pub fn with_script(self, replies: impl IntoIterator<Item = MockReply>) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.extend(replies);
        }
        self
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Number of `complete` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    fn next_reply(&self) -> MockReply {
        self.script
            .lock()
            .ok()
            .and_then(|mut s| s.pop_front())
            .unwrap_or_else(|| self.default_reply.clone())
    }
}

#[async_trait::async_trait]
impl CompletionPort for MockCompletionAdapter {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        info!(
            call,
            prompt_len = request.prompt.len(),
            "[MOCK] Simulating completion"
        );

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        match self.next_reply() {
            MockReply::Text(text) => Ok(text),
            MockReply::Fail => Err(DomainError::GenerationFailed(
                "[MOCK] simulated endpoint failure".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CompletionRequest {
        CompletionRequest {
            system: "sys".into(),
            prompt: "prompt".into(),
            max_tokens: 10,
            temperature: 0.3,
        }
    }

    #[tokio::test]
    async fn test_script_then_default() {
        let mock = MockCompletionAdapter::failing()
            .with_script([MockReply::Text("{}".into())])
            .with_delay(5);

        assert_eq!(mock.complete(&request()).await.unwrap(), "{}");
        assert!(matches!(
            mock.complete(&request()).await,
            Err(DomainError::GenerationFailed(_))
        ));
        assert_eq!(mock.call_count(), 2);
        assert_eq!(mock.requests().len(), 2);
        assert_eq!(mock.requests()[0].prompt, "prompt");
    }
}
