//! In-memory stand-in for the employee-data backend, for local runs:
//!
//! ```text
//! cargo run --example mock_upstream
//! cargo run -- --config config.example.toml
//! ```

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

type Store = Arc<Mutex<Vec<Value>>>;

fn seed() -> Vec<Value> {
    [
        ("Tiger Nixon", 320_800, 61, "Vice Chair Executive Principal"),
        ("Garrett Winters", 170_750, 63, "Accountant"),
        ("Ashton Cox", 86_000, 66, "Junior Technical Author"),
        ("Cedric Kelly", 433_060, 22, "Senior Javascript Developer"),
    ]
    .into_iter()
    .map(|(name, salary, age, title)| {
        json!({
            "id": Uuid::new_v4().to_string(),
            "employee_name": name,
            "employee_salary": salary,
            "employee_age": age,
            "employee_title": title,
            "employee_email": format!("{}@company.com", name.split(' ').next().unwrap_or(name).to_lowercase()),
        })
    })
    .collect()
}

async fn list(State(store): State<Store>) -> Json<Value> {
    let records = store.lock().unwrap().clone();
    Json(json!({ "data": records, "status": "Successfully processed request." }))
}

async fn get_one(State(store): State<Store>, Path(id): Path<String>) -> Response {
    let found = store
        .lock()
        .unwrap()
        .iter()
        .find(|r| r["id"] == id.as_str())
        .cloned();
    match found {
        Some(record) => Json(json!({ "data": record, "status": "Successfully processed request." })).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn create(State(store): State<Store>, Json(body): Json<Value>) -> Json<Value> {
    let record = json!({
        "id": Uuid::new_v4().to_string(),
        "employee_name": body["name"],
        "employee_salary": body["salary"],
        "employee_age": body["age"],
        "employee_title": body["title"],
        "employee_email": body["email"],
    });
    store.lock().unwrap().push(record.clone());
    Json(json!({ "data": record, "status": "Successfully processed request." }))
}

async fn delete_by_name(State(store): State<Store>, Json(body): Json<Value>) -> Json<Value> {
    let mut records = store.lock().unwrap();
    let before = records.len();
    records.retain(|r| r["employee_name"] != body["name"]);
    Json(json!({ "data": records.len() < before, "status": "Successfully processed request." }))
}

#[tokio::main]
async fn main() {
    let store: Store = Arc::new(Mutex::new(seed()));
    let app = Router::new()
        .route("/api/v1/employee", get(list).post(create).delete(delete_by_name))
        .route("/api/v1/employee/{id}", get(get_one))
        .with_state(store);

    let addr = SocketAddr::from(([127, 0, 0, 1], 8112));
    println!("Mock employee backend listening on http://{}/api/v1/employee", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
