//! BDD step definitions for service lifecycle

use std::time::Duration;

use cucumber::{given, then, when};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_util::sync::CancellationToken;

use crate::world::SkywatchWorld;

#[given("the host is running on an ephemeral port")]
async fn host_running(world: &mut SkywatchWorld) {
    let site_root = tempfile::tempdir().expect("temp dir");
    world.config.server.site_root = site_root.path().to_path_buf();
    world.site_root = Some(site_root);

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    world.addr = Some(listener.local_addr().expect("local addr"));

    let cancel = CancellationToken::new();
    let config = world.config.clone();
    let token = cancel.clone();
    world.server = Some(tokio::spawn(async move {
        skywatch::serve(listener, config, token).await
    }));
    world.cancel = Some(cancel);
}

#[given(expr = "the mount id is {string}")]
fn set_mount_id(world: &mut SkywatchWorld, mount_id: String) {
    world.config.shell.mount_id = mount_id;
}

#[when(expr = "a client fetches {string}")]
async fn client_fetches(world: &mut SkywatchWorld, path: String) {
    let addr = world.addr.expect("host not running");
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    let request = format!(
        "GET {} HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n\r\n",
        path, addr
    );
    stream.write_all(request.as_bytes()).await.expect("write");

    let mut response = String::new();
    stream.read_to_string(&mut response).await.expect("read");

    let status = response
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse().ok())
        .expect("status line");
    world.status = Some(status);
    world.body = response.split("\r\n\r\n").nth(1).map(str::to_string);
}

#[when("the shutdown signal fires")]
async fn shutdown(world: &mut SkywatchWorld) {
    world.cancel.as_ref().expect("host not running").cancel();
    let handle = world.server.take().expect("host not running");
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("host did not stop in time")
        .expect("host task panicked");
    world.server_result = Some(result);
}

#[when("the host task finishes")]
async fn host_finishes(world: &mut SkywatchWorld) {
    let handle = world.server.take().expect("host not running");
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("host did not stop in time")
        .expect("host task panicked");
    world.server_result = Some(result);
}

#[then("the host stops cleanly")]
fn stops_cleanly(world: &mut SkywatchWorld) {
    let result = world.server_result.as_ref().expect("host still running");
    assert!(result.is_ok(), "host failed: {:?}", result);
}

#[then(expr = "the host fails with a message containing {string}")]
fn fails_with(world: &mut SkywatchWorld, expected: String) {
    let result = world.server_result.as_ref().expect("host still running");
    let err = result.as_ref().expect_err("host should have failed");
    assert!(err.to_string().contains(&expected), "error was: {}", err);
}
