//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing rules and user-facing copy out of page and
//! component code.

pub mod auth;
pub mod text;
