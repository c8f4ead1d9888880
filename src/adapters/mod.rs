//! Adapter implementations of the ports.

pub mod ai;
pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
