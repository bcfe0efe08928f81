#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::http::{HeaderMap, Method, Uri};
use login_form::prelude::Report;
use tokio::sync::mpsc::UnboundedReceiver;

/// One request as seen by the mock server.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Shared log of requests received by the mock server.
#[derive(Debug, Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<CapturedRequest>>>);

impl Captured {
    pub fn record(&self, method: Method, uri: &Uri, headers: HeaderMap, body: String) -> usize {
        let mut requests = self.0.lock().unwrap();
        requests.push(CapturedRequest {
            method,
            path: uri.path().to_string(),
            headers,
            body,
        });
        requests.len()
    }

    pub fn all(&self) -> Vec<CapturedRequest> {
        self.0.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// Returns a base URL nothing is listening on.
pub async fn refused_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}")
}

/// Waits for the next report, failing the test instead of hanging.
pub async fn next_report(rx: &mut UnboundedReceiver<Report>) -> Report {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for a report")
        .expect("report channel closed")
}
