//! Shared UI components

pub mod error_notice;
pub mod nav_bar;
pub mod severity_badge;
