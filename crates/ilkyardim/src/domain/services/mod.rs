//! Domain Services
//!
//! - prompt: The fixed first-aid prompt sent to every provider
//! - formatter: Normalizes provider replies into "BAŞLIK: steps + Not"
//! - dispatcher: Sends a question to the selected provider, never fails
//! - chat: Local lookup first, provider fallback second

mod chat;
mod dispatcher;
mod formatter;
mod prompt;

pub use chat::*;
pub use dispatcher::*;
pub use formatter::*;
pub use prompt::*;

/// Returned whenever no confident answer is available
pub const DISCLAIMER: &str =
    "Bu durum için yeterli bilgim yok. Lütfen 112'yi arayın veya en yakın sağlık kuruluşuna başvurun.";

/// Substituted for an empty provider answer before formatting
pub const REPLY_NOT_RETRIEVED: &str = "Yanıt alınamadı";

/// Returned when the `model` field names no known provider
pub const INVALID_MODEL_MESSAGE: &str = "Geçersiz model seçimi.";
