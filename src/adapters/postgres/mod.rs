//! PostgreSQL adapter implementations.

mod message_repository;
mod point_ledger;
mod profile_repository;
mod session_repository;

pub use message_repository::PostgresMessageRepository;
pub use point_ledger::PostgresPointLedger;
pub use profile_repository::PostgresProfileRepository;
pub use session_repository::PostgresSessionRepository;
