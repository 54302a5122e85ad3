//! BDD step definitions for application shell startup

use cucumber::{given, then, when};
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use skywatch_app::{ApiClient, AppShell, RouteTable, ShellConfig, ThemePlugin};

use crate::world::DashboardWorld;

#[given("the application shell with default configuration")]
fn default_shell(world: &mut DashboardWorld) {
    let shell = AppShell::new(ShellConfig::default())
        .expect("shell builds")
        .plugin(ThemePlugin::default());
    world.shell = Some(shell);
}

#[when("the shell is installed")]
fn install_shell(world: &mut DashboardWorld) {
    let shell = world.shell.as_ref().expect("shell not set");
    let owner = Owner::new();
    let (base_url, route_count) = owner.with(|| {
        shell.install();
        let client = use_context::<ApiClient>().expect("API client not provided");
        let routes = use_context::<RouteTable>().expect("route table not provided");
        (client.base_url().to_string(), routes.len())
    });
    world.installed_base_url = Some(base_url);
    world.installed_route_count = Some(route_count);
}

#[then(expr = "the API base address is {string}")]
fn api_base_address(world: &mut DashboardWorld, expected: String) {
    assert_eq!(world.installed_base_url.as_deref(), Some(expected.as_str()));
}

#[then(expr = "the shell mounts into {string}")]
fn mount_target(world: &mut DashboardWorld, expected: String) {
    let shell = world.shell.as_ref().expect("shell not set");
    assert_eq!(shell.config().mount_selector, expected);
}

#[then(expr = "the {string} plugin is registered")]
fn plugin_registered(world: &mut DashboardWorld, name: String) {
    let shell = world.shell.as_ref().expect("shell not set");
    assert!(
        shell.plugin_names().contains(&name.as_str()),
        "plugins: {:?}",
        shell.plugin_names()
    );
}

#[then(expr = "{int} routes are available to the views")]
fn routes_available(world: &mut DashboardWorld, count: usize) {
    assert_eq!(world.installed_route_count, Some(count));
}
