//! BDD test world for the skywatch host service

use std::net::SocketAddr;

use cucumber::World;
use skywatch::Config;
use tempfile::TempDir;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Default, World)]
pub struct SkywatchWorld {
    pub config: Config,
    pub site_root: Option<TempDir>,

    // Router requests
    pub status: Option<u16>,
    pub body: Option<String>,

    // Running service
    pub addr: Option<SocketAddr>,
    pub cancel: Option<CancellationToken>,
    pub server: Option<JoinHandle<skywatch::Result<()>>>,
    pub server_result: Option<skywatch::Result<()>>,
}
