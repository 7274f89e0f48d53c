#![allow(dead_code)]

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{StatusCode, header::LOCATION},
    response::IntoResponse,
    routing::{get, post},
};
use fini_server::{app, config::Config};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// How the fake spreadsheet service answers every request.
#[derive(Debug, Clone)]
pub enum SheetsBehavior {
    Success,
    ReplyError(&'static str),
    Status(StatusCode),
    Garbage,
    /// 302 to a second route, the way script endpoints answer writes.
    Redirect,
}

/// Stand-in for the spreadsheet script: records each body it receives.
#[derive(Clone)]
pub struct FakeSheets {
    pub url: String,
    received: Arc<Mutex<Vec<Bytes>>>,
}

impl FakeSheets {
    pub fn calls(&self) -> usize {
        self.received.lock().expect("fake sheets lock poisoned").len()
    }

    pub fn bodies(&self) -> Vec<Bytes> {
        self.received.lock().expect("fake sheets lock poisoned").clone()
    }
}

#[derive(Clone)]
struct FakeState {
    behavior: SheetsBehavior,
    received: Arc<Mutex<Vec<Bytes>>>,
}

async fn fake_append(State(state): State<FakeState>, body: Bytes) -> axum::response::Response {
    let row = {
        let mut received = state.received.lock().expect("fake sheets lock poisoned");
        received.push(body);
        received.len()
    };

    match state.behavior {
        SheetsBehavior::Success => Json(json!({"result": "success", "row": row})).into_response(),
        SheetsBehavior::ReplyError(message) => {
            Json(json!({"result": "error", "error": message})).into_response()
        }
        SheetsBehavior::Status(status) => {
            (status, Json(json!({"result": "error", "error": "upstream broke"}))).into_response()
        }
        SheetsBehavior::Garbage => "<html>Moved Temporarily</html>".into_response(),
        SheetsBehavior::Redirect => (StatusCode::FOUND, [(LOCATION, "/result")]).into_response(),
    }
}

async fn fake_result(State(state): State<FakeState>) -> Json<Value> {
    let rows = state.received.lock().expect("fake sheets lock poisoned").len();
    Json(json!({"result": "success", "row": rows, "redirected": true}))
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server crashed");
    });
    format!("http://{}", addr)
}

pub async fn spawn_fake_sheets(behavior: SheetsBehavior) -> FakeSheets {
    let received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/exec", post(fake_append))
        .route("/result", get(fake_result))
        .with_state(FakeState {
            behavior,
            received: received.clone(),
        });
    let base = serve(app).await;

    FakeSheets {
        url: format!("{}/exec", base),
        received,
    }
}

/// Starts the relay with the given storage endpoint and returns its base URL.
pub async fn spawn_relay(sheets_url: Option<&str>) -> String {
    match sheets_url {
        Some(url) => spawn_relay_with(&[("SHEETS_URL", url)]).await,
        None => spawn_relay_with(&[]).await,
    }
}

/// Starts the relay from an explicit set of environment variables.
pub async fn spawn_relay_with(pairs: &[(&str, &str)]) -> String {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let config = Config::from_vars(|key| vars.get(key).cloned()).expect("Invalid test config");
    serve(app::router(&config)).await
}

/// Address that refuses connections.
pub async fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    format!("http://{}/exec", addr)
}

pub fn sample_payload() -> Value {
    json!({
        "fecha": "2024-01-15",
        "tipo": "gasto",
        "categoria": "comida",
        "concepto": "-",
        "medioPago": "billetera digital",
        "monto": 25.5
    })
}

pub async fn post_raw(relay_url: &str, body: impl Into<reqwest::Body>) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}/api/sheets", relay_url))
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await
        .expect("relay request failed");
    let status = StatusCode::from_u16(response.status().as_u16()).expect("bad status code");
    let body = response.json().await.expect("relay reply was not JSON");
    (status, body)
}

pub async fn post_json(relay_url: &str, payload: &Value) -> (StatusCode, Value) {
    post_raw(relay_url, payload.to_string()).await
}
