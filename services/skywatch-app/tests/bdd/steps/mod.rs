//! BDD step definitions for the dashboard frontend

pub mod navigation_steps;
pub mod route_table_steps;
pub mod shell_steps;
