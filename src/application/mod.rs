//! Application layer: command and query handlers over the ports.

pub mod handlers;
