//! Parchís rules engine library.
//!
//! Exposes the board data model, movement rules, and the session-facing
//! engine for use by integration tests and an embedding turn manager.

pub mod board;
pub mod engine;
pub mod rules;
pub mod snapshot;
