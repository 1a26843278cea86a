//! Reusable view components.
//!
//! ARCHITECTURE
//! ============
//! Components read shared stores via `expect_context` and stay free of
//! route-specific orchestration, which lives in `pages`.

pub mod layout;
pub mod loading_overlay;
pub mod notifications;
pub mod theme_toggle;
