//! BDD step definitions for the history-mode fallback feature

use axum::body::Body;
use axum::http::Request;
use cucumber::{given, then, when};
use skywatch::server::{build_router, HostState};
use skywatch_app::RouteTable;
use tower::ServiceExt;

use crate::world::SkywatchWorld;

#[given("a skywatch host with default configuration")]
fn default_host(world: &mut SkywatchWorld) {
    world.config = skywatch::Config::default();
    world.site_root = Some(tempfile::tempdir().expect("temp dir"));
}

#[given(expr = "the page title is {string}")]
fn page_title(world: &mut SkywatchWorld, title: String) {
    world.config.server.title = title;
}

#[given(expr = "the bundle file {string} contains {string}")]
fn bundle_file(world: &mut SkywatchWorld, name: String, content: String) {
    let root = world.site_root.as_ref().expect("site root not set").path();
    let pkg = root.join("pkg");
    std::fs::create_dir_all(&pkg).expect("create pkg dir");
    std::fs::write(pkg.join(name), content).expect("write bundle file");
}

#[when(expr = "{string} is requested")]
async fn request_path(world: &mut SkywatchWorld, uri: String) {
    let root = world.site_root.as_ref().expect("site root not set").path();
    let routes = RouteTable::drone_dashboard().expect("route table builds");
    let router = build_router(HostState::new(&world.config, routes), root);

    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    world.status = Some(response.status().as_u16());

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    world.body = Some(String::from_utf8(body.to_vec()).unwrap());
}

#[then(expr = "the response status is {int}")]
fn response_status(world: &mut SkywatchWorld, expected: u16) {
    assert_eq!(world.status, Some(expected));
}

#[then("the response is the application shell")]
fn response_is_shell(world: &mut SkywatchWorld) {
    let body = world.body.as_ref().expect("no response body");
    assert!(body.contains(r#"<div id="app"></div>"#));
    assert!(body.contains("/pkg/skywatch_app.js"));
}

#[then(expr = "the response body is {string}")]
fn response_body(world: &mut SkywatchWorld, expected: String) {
    assert_eq!(world.body.as_deref(), Some(expected.as_str()));
}

#[then(expr = "the response contains {string}")]
fn response_contains(world: &mut SkywatchWorld, expected: String) {
    let body = world.body.as_ref().expect("no response body");
    assert!(body.contains(&expected), "body was: {}", body);
}

#[then(expr = "the frontend mounts into {string}")]
fn frontend_mounts_into(world: &mut SkywatchWorld, expected: String) {
    let body = world.body.as_ref().expect("no response body");
    let announced = body
        .split(r#"<meta name="skywatch-mount" content=""#)
        .nth(1)
        .and_then(|rest| rest.split('"').next());
    assert_eq!(
        skywatch_app::shell::mount_selector_for(announced),
        expected
    );
}

#[then(expr = "the served mount element is {string}")]
fn served_mount_element(world: &mut SkywatchWorld, mount_id: String) {
    let body = world.body.as_ref().expect("no response body");
    assert!(body.contains(&format!(r#"<div id="{}"></div>"#, mount_id)));
}
