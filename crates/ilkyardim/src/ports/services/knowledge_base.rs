//! Knowledge Base Port
//!
//! Source of the local keyword → response table consulted before any
//! provider is called.

use async_trait::async_trait;

use crate::domain::entities::{find_response, KnowledgeEntry};
use crate::domain::errors::DomainError;

/// Local first-aid knowledge table
#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// Load every entry in table order.
    ///
    /// Implementations must not cache: edits to the backing table are
    /// visible on the next call.
    async fn entries(&self) -> Result<Vec<KnowledgeEntry>, DomainError>;

    /// Stored response for the first keyword contained in `question`.
    ///
    /// A table that cannot be loaded is logged and treated as no match.
    async fn lookup(&self, question: &str) -> Option<String> {
        match self.entries().await {
            Ok(entries) => find_response(&entries, question).map(str::to_string),
            Err(e) => {
                tracing::warn!("Local knowledge unavailable, skipping lookup: {}", e);
                None
            }
        }
    }
}
