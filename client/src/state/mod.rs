//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `notification`, `theme`, etc.) so
//! individual components can depend on small focused models. Each store is
//! provided once by the root `App` as an `RwSignal` context; nothing here is a
//! process-wide global.

pub mod auth;
pub mod loading;
pub mod notification;
pub mod settings;
pub mod theme;
pub mod users;
