use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use vantage_common::config::Config;
use vantage_common::latency::{LatencySummary, ProbeResult};
use vantage_common::location::VantagePoint;
use vantage_core::probe::{LatencyProbe, ProbeError};

/// Minimal HTTP/1.1 server answering every request with the same response.
pub struct Responder {
    pub endpoint: String,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl Responder {
    pub fn config(&self, timeout: Duration) -> Config {
        Config {
            endpoint: self.endpoint.clone(),
            timeout,
            ..Config::default()
        }
    }

    pub fn request_lines(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

pub async fn respond_with(status: &'static str, body: &'static str) -> Responder {
    serve(Some((status, body))).await
}

/// Accepts connections but never answers them.
pub async fn silent() -> Responder {
    serve(None).await
}

async fn serve(response: Option<(&'static str, &'static str)>) -> Responder {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let requests_ref = Arc::clone(&requests);

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let requests = Arc::clone(&requests_ref);
            tokio::spawn(handle(stream, requests, response));
        }
    });

    Responder {
        endpoint: format!("http://{addr}/{{id}}/ajax.php"),
        requests,
    }
}

async fn handle(
    mut stream: TcpStream,
    requests: Arc<Mutex<Vec<String>>>,
    response: Option<(&'static str, &'static str)>,
) {
    let mut buf: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    let request = String::from_utf8_lossy(&buf);
    if let Some(line) = request.lines().next() {
        requests.lock().unwrap().push(line.to_string());
    }

    let Some((status, body)) = response else {
        tokio::time::sleep(Duration::from_secs(30)).await;
        return;
    };

    let reply = format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(reply.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// An endpoint nothing listens on.
pub async fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/{{id}}/ajax.php")
}

/// In-memory probe answering from a table keyed by location code.
pub struct FakeProbe {
    pub answers: HashMap<&'static str, Option<f64>>,
}

impl FakeProbe {
    pub fn new(answers: &[(&'static str, Option<f64>)]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
        }
    }
}

#[async_trait]
impl LatencyProbe for FakeProbe {
    async fn probe(
        &self,
        vantage_point: &VantagePoint,
        _host: &str,
    ) -> Result<ProbeResult, ProbeError> {
        match self.answers.get(vantage_point.code).copied().flatten() {
            Some(avg) => Ok(ProbeResult::new(
                vantage_point.display_name,
                LatencySummary {
                    min: avg * 0.9,
                    avg,
                    max: avg * 1.1,
                    mdev: 0.2,
                },
            )),
            None => Err(ProbeError::Transport("unreachable".into())),
        }
    }
}
