//! Ports: trait seams between the application core and the outside world.

mod ai_provider;
mod message_repository;
mod point_ledger;
mod profile_repository;
mod session_repository;
mod session_validator;

pub use ai_provider::{
    AiError, AiProvider, CompletionRequest, CompletionResponse, Message, MessageRole,
};
pub use message_repository::MessageRepository;
pub use point_ledger::PointLedger;
pub use profile_repository::ProfileRepository;
pub use session_repository::SessionRepository;
pub use session_validator::SessionValidator;
