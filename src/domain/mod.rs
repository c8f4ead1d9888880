//! Domain layer: chat sessions, messages, and the points ledger.

pub mod chat;
pub mod foundation;
pub mod points;
