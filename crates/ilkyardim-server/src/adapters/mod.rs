//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod csv_knowledge;
pub mod http_gateway;
pub mod providers;

// Re-exports
pub use csv_knowledge::CsvKnowledgeBase;
pub use http_gateway::HttpLlmGateway;
