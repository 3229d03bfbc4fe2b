//! axum stand-in for the Pushin Pay API, bound to an ephemeral local port.
#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Request as seen by the stub provider
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

#[derive(Clone, Default)]
pub struct ProviderState {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl ProviderState {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: Method, path_prefix: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path.starts_with(path_prefix))
            .count()
    }

    fn record(&self, method: Method, path: String, headers: HeaderMap, body: String) {
        self.requests.lock().unwrap().push(Recorded {
            method,
            path,
            headers,
            body,
        });
    }
}

pub fn charge_payload(value: i64) -> Value {
    json!({
        "id": "9c29870c-9f69-4bb6-90d3-2dce9453bb45",
        "qr_code": "00020101021226770014BR.GOV.BCB.PIX",
        "status": "created",
        "value": value,
        "webhook_url": "https://example.com/webhook",
        "qr_code_base64": "data:image/png;base64,aGVsbG8=",
        "webhook": null,
        "split_rules": [{
            "id": 1,
            "type": "fixed",
            "amount": 5000,
            "transaction_id": "9c29870c-9f69-4bb6-90d3-2dce9453bb45",
            "account_id": "acc_1",
            "created_at": "2024-05-10T12:00:00.000000Z",
            "updated_at": "2024-05-10T12:00:00.000000Z"
        }],
        "end_to_end_id": null,
        "payer_name": null,
        "payer_national_registration": null
    })
}

pub fn transaction_payload(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "status": status,
        "value": 2500,
        "description": null,
        "payment_type": "pix",
        "created_at": "2024-05-10T12:00:00.000000Z",
        "updated_at": "2024-05-10T12:05:00.000000Z",
        "webhook_url": null,
        "split_rules": [],
        "end_to_end_id": "E18236120202405101205s0123456789",
        "payer_name": "Maria Silva",
        "payer_national_registration": "***.456.789-**",
        "webhook": null,
        "pix_details": {
            "id": "pix_1",
            "expiration_date": "2024-05-11 12:00:00.000 ",
            "emv": "00020101021226770014BR.GOV.BCB.PIX",
            "created_at": "2024-05-10T12:00:00.000000Z",
            "updated_at": "2024-05-10T12:00:00.000000Z"
        },
        "transaction_product": []
    })
}

/// `acc_1` and `acc_2` exist, `acc_broken` answers 500, `acc_odd` answers 204,
/// everything else is 404.
async fn check_account(
    State(state): State<ProviderState>,
    Path(account_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.record(
        Method::GET,
        format!("/api/accounts/check/{}", account_id),
        headers,
        String::new(),
    );

    match account_id.as_str() {
        "acc_1" | "acc_2" => (StatusCode::OK, Json(json!({ "id": account_id }))).into_response(),
        "acc_broken" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        "acc_odd" => StatusCode::NO_CONTENT.into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "account not found" })),
        )
            .into_response(),
    }
}

/// Echoes the value back; a value of 666 is refused with 422
async fn cash_in(State(state): State<ProviderState>, headers: HeaderMap, body: String) -> Response {
    state.record(Method::POST, "/api/pix/cashIn".to_string(), headers, body.clone());

    let request: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    match request["value"].as_i64() {
        Some(666) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "message": "value refused" })),
        )
            .into_response(),
        Some(value) => (StatusCode::OK, Json(charge_payload(value))).into_response(),
        None => (StatusCode::BAD_REQUEST, "missing value").into_response(),
    }
}

/// `tx_1` is paid, `tx_weird` carries an unknown status, `tx_garbage` is not
/// JSON, everything else is 404.
async fn transaction(
    State(state): State<ProviderState>,
    Path(transaction_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.record(
        Method::GET,
        format!("/api/transactions/{}", transaction_id),
        headers,
        String::new(),
    );

    match transaction_id.as_str() {
        "tx_1" => (StatusCode::OK, Json(transaction_payload("tx_1", "PAID"))).into_response(),
        "tx_weird" => {
            (StatusCode::OK, Json(transaction_payload("tx_weird", "unknown"))).into_response()
        }
        "tx_garbage" => (StatusCode::OK, "<html>oops</html>").into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "transaction not found" })),
        )
            .into_response(),
    }
}

pub fn router(state: ProviderState) -> Router {
    Router::new()
        .route("/api/accounts/check/:account_id", get(check_account))
        .route("/api/pix/cashIn", post(cash_in))
        .route("/api/transactions/:transaction_id", get(transaction))
        .with_state(state)
}

/// Starts the stub on the current runtime and returns its base URL
pub async fn spawn_provider() -> (String, ProviderState) {
    let state = ProviderState::default();
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), state)
}

/// Starts the stub on its own thread, for tests that must not run inside a
/// runtime themselves
pub fn spawn_provider_on_thread() -> (String, ProviderState) {
    let (tx, rx) = std::sync::mpsc::channel();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async move {
            tx.send(spawn_provider().await).unwrap();
            std::future::pending::<()>().await;
        });
    });

    rx.recv().unwrap()
}
