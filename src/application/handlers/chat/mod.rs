//! Chat command and query handlers.

mod get_session_messages;
mod list_sessions;
mod send_message;

pub use get_session_messages::GetSessionMessagesHandler;
pub use list_sessions::ListSessionsHandler;
pub use send_message::{SendMessageCommand, SendMessageError, SendMessageHandler, SendMessageResult};
