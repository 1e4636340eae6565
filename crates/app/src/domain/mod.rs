//! Beacon Domain Concerns

pub mod apps;
pub mod events;
mod lifecycle;
pub mod validation;
