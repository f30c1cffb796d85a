//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Presentational leaves only: they render props and report events through
//! callbacks, and never read shared state.

pub mod button;
pub mod input;
