//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability. Everything that touches `web_sys`
//! is gated on the `hydrate` feature and degrades to a no-op elsewhere.

pub mod clock;
pub mod document;
pub mod guard;
pub mod storage;
pub mod theme;
