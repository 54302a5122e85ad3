//! BDD step definitions for route table construction

use cucumber::{given, then, when};
use skywatch_app::routes::RouteDescriptor;
use skywatch_app::{RouteError, RouteTable, ViewKind};

use crate::world::DashboardWorld;

#[given(expr = "a route {string} named {string}")]
fn add_route(world: &mut DashboardWorld, pattern: String, name: String) {
    let descriptor =
        RouteDescriptor::new(&pattern, &name, ViewKind::Map).expect("pattern should parse");
    world.descriptors.push(descriptor);
}

#[when("the route table is built")]
fn build_table(world: &mut DashboardWorld) {
    world.build_result = Some(RouteTable::new(world.descriptors.clone()));
}

#[then(expr = "construction fails with a duplicate name {string}")]
fn duplicate_name(world: &mut DashboardWorld, name: String) {
    let result = world.build_result.as_ref().expect("table not built");
    assert_eq!(result, &Err(RouteError::DuplicateName(name)));
}

#[then(expr = "the table holds {int} routes")]
fn table_holds(world: &mut DashboardWorld, count: usize) {
    let result = world.build_result.as_ref().expect("table not built");
    let table = result.as_ref().expect("table construction failed");
    assert_eq!(table.len(), count);
}

#[then("the route names are pairwise distinct")]
fn names_distinct(world: &mut DashboardWorld) {
    let table = world.table.as_ref().expect("table not set");
    let mut names: Vec<&str> = table.names().collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total, "duplicate route names in table");
}
