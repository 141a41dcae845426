//! Core traits and types for the Hex search engines
//!
//! This crate provides the single contract every engine satisfies:
//! - `Engine`: pick a move for a side on a board
//! - `EngineError`: why a move request was refused
//! - `validate_request`: the precondition checks shared by all engines

pub mod engine;
pub mod error;

pub use engine::{validate_request, Engine};
pub use error::EngineError;
