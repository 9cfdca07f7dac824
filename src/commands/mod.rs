//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `stack.rs` — up/down/logs lifecycle delegation.
//! - `checks.rs` — preflight check + health status.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate side effects to `services/*`.
//! - Keep behavior and output schema stable.

pub mod checks;
pub mod stack;

pub use checks::{handle_check, handle_status};
pub use stack::{handle_down, handle_logs, handle_up};
