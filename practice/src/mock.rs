use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use text_completion::{CompletionHandler, CompletionResult};
use tokio::sync::oneshot::Sender;

pub enum MockReply {
    Text(String),
    Fail(String),
    /// Drops the sender without answering.
    Silent,
}

/// Canned `CompletionHandler` recording how it was called.
pub struct MockHandler {
    reply: MockReply,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockHandler {
    pub fn new(reply: MockReply) -> Self {
        MockHandler {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn text(reply: &str) -> Self {
        Self::new(MockReply::Text(reply.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

impl CompletionHandler for MockHandler {
    fn complete(&self, prompt: &str, result: Sender<CompletionResult>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        match &self.reply {
            MockReply::Text(text) => {
                let _ = result.send(Ok(text.clone()));
            }
            MockReply::Fail(message) => {
                let _ = result.send(Err(message.clone().into()));
            }
            MockReply::Silent => drop(result),
        }
    }
}
