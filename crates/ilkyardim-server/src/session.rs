//! Chat history stored in the cookie-keyed session

use ilkyardim::ChatHistory;
use tower_sessions::Session;

use crate::errors::ChatError;

const HISTORY_KEY: &str = "chat_history";

/// Current history, empty for a fresh session
pub async fn load_history(session: &Session) -> Result<ChatHistory, ChatError> {
    Ok(session
        .get::<ChatHistory>(HISTORY_KEY)
        .await?
        .unwrap_or_default())
}

pub async fn save_history(session: &Session, history: &ChatHistory) -> Result<(), ChatError> {
    session.insert(HISTORY_KEY, history).await?;
    Ok(())
}
