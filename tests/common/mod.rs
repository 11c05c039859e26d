#![allow(dead_code, clippy::unwrap_used)]
//! A local stand-in for the completion endpoint.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::post,
};
use nusa_translator::config::{AppConfig, EndpointConfig};
use nusa_translator::translation::TUNNEL_HEADER;
use serde_json::{Value, json};

/// How the mock answers every request.
#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with a deterministic function of the prompt.
    Echo,
    /// Fixed status and raw body.
    Fixed(StatusCode, &'static str),
    /// Sleeps, then answers 200.
    Delay(Duration),
}

#[derive(Clone)]
struct MockState {
    reply: Reply,
    calls: Arc<AtomicUsize>,
    last_body: Arc<Mutex<Option<Value>>>,
    last_tunnel_header: Arc<Mutex<Option<String>>>,
}

pub struct MockEndpoint {
    pub base_url: String,
    state: MockState,
}

impl MockEndpoint {
    pub async fn spawn(reply: Reply) -> Self {
        let state = MockState {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
            last_body: Arc::new(Mutex::new(None)),
            last_tunnel_header: Arc::new(Mutex::new(None)),
        };

        let app = Router::new()
            .route("/v1/completions", post(completions))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            // Trailing slash on purpose; the client must not double it.
            base_url: format!("http://{addr}/"),
            state,
        }
    }

    pub fn calls(&self) -> usize {
        self.state.calls.load(Ordering::SeqCst)
    }

    pub fn last_body(&self) -> Option<Value> {
        self.state.last_body.lock().unwrap().clone()
    }

    pub fn last_tunnel_header(&self) -> Option<String> {
        self.state.last_tunnel_header.lock().unwrap().clone()
    }

    pub fn endpoint_config(&self, timeout: Duration) -> EndpointConfig {
        EndpointConfig {
            base_url: self.base_url.clone(),
            model: "nusa-7b-ban".to_string(),
            timeout,
            tunnel_header: "blahblah".to_string(),
        }
    }

    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            endpoint: self.endpoint_config(Duration::from_secs(5)),
            listen: "127.0.0.1:0".parse().unwrap(),
        }
    }
}

async fn completions(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.calls.fetch_add(1, Ordering::SeqCst);
    *state.last_tunnel_header.lock().unwrap() = headers
        .get(TUNNEL_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    let prompt = body["prompt"].as_str().unwrap_or_default().to_string();
    *state.last_body.lock().unwrap() = Some(body);

    match state.reply {
        Reply::Echo => {
            let text = format!(" [{}]", prompt.len());
            Json(json!({ "choices": [{ "text": text, "index": 0 }] })).into_response()
        }
        Reply::Fixed(status, raw) => (status, [(CONTENT_TYPE, "application/json")], raw).into_response(),
        Reply::Delay(delay) => {
            tokio::time::sleep(delay).await;
            Json(json!({ "choices": [{ "text": "late" }] })).into_response()
        }
    }
}
