//! BDD step definitions for the skywatch host service

pub mod fallback_steps;
pub mod lifecycle_steps;
