//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control is not repeated here; `RouteGuard` has
//! already admitted the visitor by the time a page renders.

pub mod admin;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
