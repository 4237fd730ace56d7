//! Service Ports
//!
//! Abstract interfaces for external services.

mod knowledge_base;
mod llm_provider;

pub use knowledge_base::*;
pub use llm_provider::*;
