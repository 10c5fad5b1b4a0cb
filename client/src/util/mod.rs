//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser timers and async task plumbing from
//! component markup.

pub mod notify;
pub mod submit;
