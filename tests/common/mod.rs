//! Shared utilities for integration tests.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use relay_proxy::{HttpServer, ProxyConfig, Shutdown};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tower::ServiceExt;

/// A request as seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct Captured {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// A running mock upstream and everything it has received.
pub struct MockUpstream {
    pub addr: SocketAddr,
    pub captured: Arc<Mutex<Vec<Captured>>>,
}

impl MockUpstream {
    pub fn origin(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }
}

/// Start a mock upstream that records each request and answers with a
/// fixed status and JSON body.
pub async fn start_mock_upstream(status: u16, body: &'static str) -> MockUpstream {
    let captured: Arc<Mutex<Vec<Captured>>> = Arc::default();
    let sink = captured.clone();

    let app = Router::new().fallback(move |request: Request<Body>| {
        let sink = sink.clone();
        async move {
            let (parts, body_in) = request.into_parts();
            let bytes = axum::body::to_bytes(body_in, usize::MAX).await.unwrap();
            sink.lock().unwrap().push(Captured {
                method: parts.method,
                uri: parts.uri,
                headers: parts.headers,
                body: bytes,
            });
            (
                StatusCode::from_u16(status).unwrap(),
                [("content-type", "application/json"), ("x-upstream", "mock")],
                body,
            )
                .into_response()
        }
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockUpstream { addr, captured }
}

/// Start a raw upstream that answers with chunked encoding: headers and
/// `first` go out immediately, the terminating chunk only after `stall`.
pub async fn start_stalling_upstream(first: &'static str, stall: Duration) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut head = Vec::new();
                        let mut buf = [0u8; 1024];
                        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                            match socket.read(&mut buf).await {
                                Ok(0) | Err(_) => return,
                                Ok(n) => head.extend_from_slice(&buf[..n]),
                            }
                        }

                        let opening = format!(
                            "HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\nContent-Type: text/plain\r\n\r\n{:x}\r\n{}\r\n",
                            first.len(),
                            first
                        );
                        let _ = socket.write_all(opening.as_bytes()).await;
                        let _ = socket.flush().await;
                        tokio::time::sleep(stall).await;
                        let _ = socket.write_all(b"0\r\n\r\n").await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a raw upstream that never answers and reports every read it
/// makes, accumulated, on the returned channel.
pub async fn start_draining_upstream() -> (SocketAddr, mpsc::UnboundedReceiver<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let tx = tx.clone();
            tokio::spawn(async move {
                let mut seen = Vec::new();
                let mut buf = [0u8; 1024];
                loop {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => {
                            seen.extend_from_slice(&buf[..n]);
                            if tx.send(seen.clone()).is_err() {
                                break;
                            }
                        }
                    }
                }
            });
        }
    });

    (addr, rx)
}

/// An address nothing listens on.
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Default configuration pointed at `upstream`.
pub fn proxy_config(upstream: SocketAddr) -> ProxyConfig {
    let mut config = ProxyConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.upstream.origin = format!("http://{upstream}");
    config.logs.echo = false;
    config
}

/// Drive one request through the router without a socket.
pub async fn send(server: &HttpServer, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let response = server.router().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body)
}

/// Build a bodiless request with a Host header.
pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("host", "edge.example")
        .body(Body::empty())
        .unwrap()
}

/// Serve `server` on an ephemeral port; returns its address and the shutdown handle.
pub async fn spawn_proxy(server: HttpServer) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });
    (addr, shutdown)
}

pub fn json(body: &Bytes) -> serde_json::Value {
    serde_json::from_slice(body).unwrap()
}
