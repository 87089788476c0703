//! In-process HTTP responder for integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Notify;

pub const SNAPSHOT_BODY: &str = r#"{"gold":{"value":"1,000,000","change":"+1.2%"},"tether":{"value":"60,000","change":"-0.5%"}}"#;

/// Serves one canned response to every request
pub struct Responder {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
    gate: Option<Arc<Notify>>,
}

impl Responder {
    /// Start a responder answering `status` with `body`
    pub async fn start(status: u16, body: &str) -> Self {
        Self::spawn(status, body, None).await
    }

    /// Start a responder that holds every response until [`release`](Self::release)
    pub async fn start_gated(status: u16, body: &str) -> Self {
        Self::spawn(status, body, Some(Arc::new(Notify::new()))).await
    }

    async fn spawn(status: u16, body: &str, gate: Option<Arc<Notify>>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason(status),
            body.len(),
            body
        );

        let seen = requests.clone();
        let held = gate.clone();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let seen = seen.clone();
                let held = held.clone();
                let response = response.clone();
                tokio::spawn(async move {
                    let request_line = read_request_line(&mut socket).await;
                    seen.lock().unwrap().push(request_line);
                    if let Some(gate) = held {
                        gate.notified().await;
                    }
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self {
            url: format!("http://{}/api/currency", addr),
            requests,
            gate,
        }
    }

    /// Request lines received so far (e.g. "GET /api/currency HTTP/1.1")
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Let one held response through
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }
}

async fn read_request_line(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&buf)
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}
