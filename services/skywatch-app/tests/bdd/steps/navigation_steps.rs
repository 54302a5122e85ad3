//! BDD step definitions for navigation

use cucumber::{given, then, when};
use skywatch_app::routes::{DRONE_HISTORY, SERIAL_PARAM};
use skywatch_app::{RouteTable, ViewKind};

use crate::world::DashboardWorld;

fn parse_view(s: &str) -> ViewKind {
    match s {
        "map" => ViewKind::Map,
        "logs" => ViewKind::Logs,
        "drone list" => ViewKind::DroneList,
        "drone history" => ViewKind::DroneHistory,
        other => panic!("Unknown view: {}", other),
    }
}

#[given("the dashboard route table")]
fn dashboard_table(world: &mut DashboardWorld) {
    world.table = Some(RouteTable::drone_dashboard().expect("dashboard table builds"));
}

#[when(expr = "the browser navigates to {string}")]
fn navigate(world: &mut DashboardWorld, path: String) {
    let table = world.table.as_ref().expect("table not set");
    world.resolved = table.resolve(&path);
    world.navigated_path = Some(path);
}

#[when(expr = "a link to the history of drone {string} is built")]
fn build_history_link(world: &mut DashboardWorld, serial: String) {
    let table = world.table.as_ref().expect("table not set");
    world.link = Some(table.href(DRONE_HISTORY, &[(SERIAL_PARAM, serial.as_str())]));
}

#[when(expr = "a link to route {string} is built")]
fn build_link(world: &mut DashboardWorld, name: String) {
    let table = world.table.as_ref().expect("table not set");
    world.link = Some(table.href(&name, &[]));
}

#[then(expr = "the {string} view is rendered")]
fn view_rendered(world: &mut DashboardWorld, view: String) {
    let matched = world.resolved.as_ref().unwrap_or_else(|| {
        panic!(
            "No route matched {:?}",
            world.navigated_path.as_deref().unwrap_or_default()
        )
    });
    assert_eq!(matched.view, parse_view(&view));
}

#[then(expr = "the active route is named {string}")]
fn route_named(world: &mut DashboardWorld, name: String) {
    let matched = world.resolved.as_ref().expect("no route matched");
    assert_eq!(matched.name, name);
}

#[then(expr = "the view receives serial {string}")]
fn view_receives_serial(world: &mut DashboardWorld, serial: String) {
    let matched = world.resolved.as_ref().expect("no route matched");
    assert_eq!(matched.params.get(SERIAL_PARAM), Some(serial.as_str()));
}

#[then("no route matches")]
fn no_route_matches(world: &mut DashboardWorld) {
    assert!(
        world.resolved.is_none(),
        "Expected no match, got {:?}",
        world.resolved
    );
}

#[then(expr = "the link is {string}")]
fn link_is(world: &mut DashboardWorld, expected: String) {
    let link = world.link.as_ref().expect("no link built");
    assert_eq!(link.as_deref(), Ok(expected.as_str()));
}

#[then("building the link fails")]
fn link_fails(world: &mut DashboardWorld) {
    let link = world.link.as_ref().expect("no link built");
    assert!(link.is_err(), "Expected an error, got {:?}", link);
}

#[then(expr = "following the link exposes serial {string}")]
fn link_round_trips(world: &mut DashboardWorld, serial: String) {
    let table = world.table.as_ref().expect("table not set");
    let link = world
        .link
        .as_ref()
        .expect("no link built")
        .as_ref()
        .expect("link failed");
    let matched = table.resolve(link).expect("link does not resolve");
    assert_eq!(matched.view, ViewKind::DroneHistory);
    assert_eq!(matched.params.get(SERIAL_PARAM), Some(serial.as_str()));
}
