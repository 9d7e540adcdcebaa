//! Shared utilities for integration tests: a scriptable upstream employee
//! backend and a facade instance pointed at it.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use employee_facade::config::FacadeConfig;
use employee_facade::http::HttpServer;
use employee_facade::lifecycle::Shutdown;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// How the mock upstream answers the next requests.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,
    /// Every request gets this status with a small JSON body.
    Status(u16),
    /// Every request gets a 200 with a body that is not JSON.
    Garbage,
    /// Deletes answer `{"data": false}`; everything else is normal.
    DeleteReturnsFalse,
    /// Every request gets a 200 with `{"data": null}`.
    NullData,
}

#[derive(Clone)]
pub struct MockUpstream {
    pub records: Arc<Mutex<Vec<Value>>>,
    pub mode: Arc<Mutex<Mode>>,
    pub list_calls: Arc<AtomicUsize>,
    pub delete_calls: Arc<AtomicUsize>,
    next_id: Arc<AtomicUsize>,
}

impl MockUpstream {
    pub fn set_mode(&self, mode: Mode) {
        *self.mode.lock().unwrap() = mode;
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    fn scripted(&self) -> Option<Response> {
        match self.mode.lock().unwrap().clone() {
            Mode::Status(code) => {
                let status = StatusCode::from_u16(code).unwrap();
                Some((status, Json(json!({ "error": "scripted failure" }))).into_response())
            }
            Mode::Garbage => Some((StatusCode::OK, "<html>maintenance</html>").into_response()),
            Mode::NullData => Some(Json(json!({ "data": null, "status": "ok" })).into_response()),
            Mode::Normal | Mode::DeleteReturnsFalse => None,
        }
    }
}

pub fn record(id: &str, name: &str, salary: u64) -> Value {
    json!({
        "id": id,
        "employee_name": name,
        "employee_salary": salary,
        "employee_age": 30,
        "employee_title": "Engineer",
        "employee_email": format!("{}@company.com", name.to_lowercase()),
    })
}

async fn list(State(mock): State<MockUpstream>) -> Response {
    mock.list_calls.fetch_add(1, Ordering::SeqCst);
    if let Some(response) = mock.scripted() {
        return response;
    }
    let records = mock.records.lock().unwrap().clone();
    Json(json!({ "data": records, "status": "Successfully processed request." })).into_response()
}

async fn get_one(State(mock): State<MockUpstream>, Path(id): Path<String>) -> Response {
    if let Some(response) = mock.scripted() {
        return response;
    }
    let found = mock
        .records
        .lock()
        .unwrap()
        .iter()
        .find(|r| r["id"] == id.as_str())
        .cloned();
    match found {
        Some(record) => Json(json!({ "data": record, "status": "ok" })).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn create(State(mock): State<MockUpstream>, Json(body): Json<Value>) -> Response {
    if let Some(response) = mock.scripted() {
        return response;
    }
    let age = body["age"].as_u64().unwrap_or(0);
    if !(16..=75).contains(&age) {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "age out of range" })))
            .into_response();
    }
    let id = format!("new-{}", mock.next_id.fetch_add(1, Ordering::SeqCst));
    let record = json!({
        "id": id,
        "employee_name": body["name"],
        "employee_salary": body["salary"],
        "employee_age": body["age"],
        "employee_title": body["title"],
        "employee_email": body["email"],
    });
    mock.records.lock().unwrap().push(record.clone());
    Json(json!({ "data": record, "status": "ok" })).into_response()
}

async fn delete_by_name(State(mock): State<MockUpstream>, Json(body): Json<Value>) -> Response {
    mock.delete_calls.fetch_add(1, Ordering::SeqCst);
    if let Some(response) = mock.scripted() {
        return response;
    }
    if *mock.mode.lock().unwrap() == Mode::DeleteReturnsFalse {
        return Json(json!({ "data": false })).into_response();
    }
    let name = body["name"].as_str().unwrap_or_default().to_string();
    let mut records = mock.records.lock().unwrap();
    let before = records.len();
    records.retain(|r| r["employee_name"] != name.as_str());
    Json(json!({ "data": records.len() < before })).into_response()
}

/// Start a mock upstream on an ephemeral port seeded with `records`.
pub async fn start_mock_upstream(records: Vec<Value>) -> (SocketAddr, MockUpstream) {
    let mock = MockUpstream {
        records: Arc::new(Mutex::new(records)),
        mode: Arc::new(Mutex::new(Mode::Normal)),
        list_calls: Arc::new(AtomicUsize::new(0)),
        delete_calls: Arc::new(AtomicUsize::new(0)),
        next_id: Arc::new(AtomicUsize::new(1)),
    };

    let app = Router::new()
        .route("/api/v1/employee", get(list).post(create).delete(delete_by_name))
        .route("/api/v1/employee/{id}", get(get_one))
        .with_state(mock.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (addr, mock)
}

/// Start the facade pointed at `upstream`; returns its address and the
/// shutdown handle keeping it alive.
pub async fn start_facade(upstream: SocketAddr) -> (SocketAddr, Shutdown) {
    let mut config = FacadeConfig::default();
    config.server.bind_address = "127.0.0.1:0".to_string();
    config.upstream.base_url = format!("http://{upstream}/api/v1/employee");
    config.upstream.timeout_secs = 5;

    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });
    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
