//! cChat - Conversational chat platform with point rewards
//!
//! This crate implements the cChat backend API: authenticated chat sessions
//! against a hosted language model, with per-message point accrual persisted
//! in PostgreSQL.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
