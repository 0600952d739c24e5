//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared page chrome while reading session state from
//! the context-provided `SessionManager`.

pub mod navbar;
pub mod post_card;
