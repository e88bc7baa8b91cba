//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use cors_relay::{Fetcher, Server, forward};

/// Start the relay on an ephemeral port. The fetcher ignores proxy
/// environment variables so loopback upstreams are always reached directly.
pub async fn start_relay() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let app = forward::routes(Fetcher::from_client(client));

    tokio::spawn(async move {
        Server::from_listener(listener)
            .serve_with_shutdown(app, std::future::pending())
            .await
            .unwrap();
    });
    addr
}

/// Start a mock upstream. `respond` receives the request head and returns
/// the raw bytes written back before the connection is closed.
pub async fn start_backend<F>(respond: F) -> SocketAddr
where
    F: Fn(&str) -> Vec<u8> + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let respond = Arc::new(respond);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let respond = Arc::clone(&respond);
                    tokio::spawn(async move {
                        let head = read_head(&mut socket).await;
                        let _ = socket.write_all(&respond(&head)).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });
    addr
}

/// Start a mock upstream that always answers with one fixed response.
pub async fn start_fixed_backend(
    status_line: &'static str,
    content_type: Option<&'static str>,
    body: &'static [u8],
) -> SocketAddr {
    start_backend(move |_| raw_response(status_line, content_type, body)).await
}

/// Start a mock upstream that accepts connections and never answers them.
pub async fn start_silent_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    addr
}

/// A port on loopback with nothing listening on it.
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

pub fn raw_response(status_line: &str, content_type: Option<&str>, body: &[u8]) -> Vec<u8> {
    let mut out = format!("HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n", body.len());
    if let Some(ct) = content_type {
        out.push_str(&format!("Content-Type: {ct}\r\n"));
    }
    out.push_str("\r\n");
    let mut out = out.into_bytes();
    out.extend_from_slice(body);
    out
}

/// Client used to call the relay.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

async fn read_head(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
