//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use locale_gate::config::GateConfig;
use locale_gate::{HttpServer, Shutdown};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Start a mock site server that answers every request with
/// `upstream saw <path>`.
pub async fn start_echo_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut buf = vec![0u8; 8192];
                        let n = socket.read(&mut buf).await.unwrap_or(0);
                        let head = String::from_utf8_lossy(&buf[..n]);
                        let target = head
                            .lines()
                            .next()
                            .and_then(|line| line.split_whitespace().nth(1))
                            .unwrap_or("?")
                            .to_string();

                        let body = format!("upstream saw {}", target);
                        let response_str = format!(
                            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Config serving `locales` in multi-locale mode in front of `upstream`.
pub fn config(locales: &[&str], upstream: SocketAddr) -> GateConfig {
    let mut config = GateConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.upstream.address = upstream.to_string();
    config.locales.multi_locale_enabled = true;
    config.locales.available_locales = locales.iter().map(|s| s.to_string()).collect();
    config.locales.default_locale = "en".into();
    config
}

/// Run the gate on an ephemeral port. Keep the returned `Shutdown` alive
/// for the duration of the test.
pub async fn start_gate(config: GateConfig) -> (SocketAddr, Shutdown) {
    let server = HttpServer::new(&config).unwrap();
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown)
}

/// HTTP client that never follows redirects.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
