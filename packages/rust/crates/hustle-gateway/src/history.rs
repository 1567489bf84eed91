//! Message-history collaborator used to seed trending questions.
//!
//! The matching core never touches storage; it only receives candidate
//! strings. This trait is the seam where a real data store plugs in.
//! When a read fails, callers degrade to popular FAQs - the storage
//! error never reaches the matching core's consumers.

use anyhow::Result;
use async_trait::async_trait;

/// Source of recent user message texts, newest first.
#[async_trait]
pub trait MessageHistory: Send + Sync {
    /// Fetch up to `limit` recent message texts, newest first. A single
    /// bounded read; no pagination, no retries.
    async fn recent_messages(&self, limit: usize) -> Result<Vec<String>>;
}

/// In-memory history, used by the default binary and by tests.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    messages: Vec<String>,
}

impl InMemoryHistory {
    /// Wrap a fixed list of messages, newest first.
    #[must_use]
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl MessageHistory for InMemoryHistory {
    async fn recent_messages(&self, limit: usize) -> Result<Vec<String>> {
        Ok(self.messages.iter().take(limit).cloned().collect())
    }
}
