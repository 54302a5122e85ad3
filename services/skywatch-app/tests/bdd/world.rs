//! BDD test world for the dashboard frontend

use cucumber::World;
use skywatch_app::routes::RouteDescriptor;
use skywatch_app::{AppShell, RouteError, RouteMatch, RouteTable};

#[derive(Debug, Default, World)]
pub struct DashboardWorld {
    // Navigation
    pub table: Option<RouteTable>,
    pub navigated_path: Option<String>,
    pub resolved: Option<RouteMatch>,
    pub link: Option<Result<String, RouteError>>,

    // Table construction
    pub descriptors: Vec<RouteDescriptor>,
    pub build_result: Option<Result<RouteTable, RouteError>>,

    // Shell startup
    pub shell: Option<AppShell>,
    pub installed_base_url: Option<String>,
    pub installed_route_count: Option<usize>,
}
