//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use project_service::config::ServiceConfig;
use project_service::http::HttpServer;
use project_service::lifecycle::Shutdown;
use project_service::projects::ProjectStore;
use tokio::net::TcpListener;

/// A running service bound to an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub store: Arc<ProjectStore>,
    pub shutdown: Shutdown,
}

#[allow(dead_code)]
impl TestServer {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the service with default settings on 127.0.0.1:0.
pub async fn start_server() -> TestServer {
    start_server_with(ServiceConfig::default()).await
}

/// Start the service with the given config; the bind address is ignored.
pub async fn start_server_with(config: ServiceConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let store = server.store();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer {
        addr,
        store,
        shutdown,
    }
}

/// A client that never reuses pooled connections across test servers.
#[allow(dead_code)]
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
