//! Application handlers, grouped by feature area.

pub mod chat;
pub mod points;
