//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (downloads, the local clock) from
//! page and component logic so the rest of the client stays testable on the
//! host.

pub mod date;
pub mod download;
