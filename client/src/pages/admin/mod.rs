//! Admin-only screens. The route table marks all of these `requires_admin`.

pub mod roles;
pub mod settings;
pub mod users;
