#![allow(dead_code)]

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use url::Url;

/// Canned reply of the stub backend: status code and raw body.
#[derive(Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    pub fn json(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// A checkout backend on a random local port that records what it was sent.
pub struct StubBackend {
    pub base_url: Url,
    pub validate_bodies: Arc<Mutex<Vec<Value>>>,
    pub payment_bodies: Arc<Mutex<Vec<Value>>>,
    pub sdk_hits: Arc<Mutex<Vec<String>>>,
}

impl StubBackend {
    pub fn sdk_url(&self) -> Url {
        self.base_url.join("/sdk/js").unwrap()
    }

    pub fn validate_bodies(&self) -> Vec<Value> {
        self.validate_bodies.lock().unwrap().clone()
    }

    pub fn payment_bodies(&self) -> Vec<Value> {
        self.payment_bodies.lock().unwrap().clone()
    }

    pub fn sdk_hits(&self) -> Vec<String> {
        self.sdk_hits.lock().unwrap().clone()
    }
}

fn recording_route(seen: Arc<Mutex<Vec<Value>>>, reply: Reply) -> axum::routing::MethodRouter {
    post(move |body: String| {
        let seen = seen.clone();
        let reply = reply.clone();
        async move {
            let parsed = serde_json::from_str(&body).unwrap_or(Value::Null);
            seen.lock().unwrap().push(parsed);
            (
                reply.status,
                [(axum::http::header::CONTENT_TYPE, "application/json")],
                reply.body,
            )
        }
    })
}

pub async fn spawn_backend(validate: Reply, payment: Reply) -> StubBackend {
    let validate_bodies = Arc::new(Mutex::new(Vec::new()));
    let payment_bodies = Arc::new(Mutex::new(Vec::new()));
    let sdk_hits = Arc::new(Mutex::new(Vec::new()));

    let hits = sdk_hits.clone();
    let app = Router::new()
        .route(
            "/api/credentials/validate",
            recording_route(validate_bodies.clone(), validate),
        )
        .route(
            "/api/payment/process",
            recording_route(payment_bodies.clone(), payment),
        )
        .route(
            "/sdk/js",
            get(move |uri: axum::http::Uri| {
                let hits = hits.clone();
                async move {
                    hits.lock()
                        .unwrap()
                        .push(uri.query().unwrap_or_default().to_string());
                    "window.paymentSdk = {};"
                }
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubBackend {
        base_url: Url::parse(&format!("http://{addr}/")).unwrap(),
        validate_bodies,
        payment_bodies,
        sdk_hits,
    }
}

pub fn accepted_validation() -> Reply {
    Reply::json(
        StatusCode::OK,
        serde_json::json!({"valid": true, "credentialToken": "tok123", "environment": "sandbox"}),
    )
}

pub fn completed_payment() -> Reply {
    Reply::json(
        StatusCode::OK,
        serde_json::json!({"status": "COMPLETED", "orderId": "ORD1"}),
    )
}

pub fn card_form_json() -> Value {
    serde_json::json!({
        "amount": "10.00",
        "cardholderName": "A B",
        "cardNumber": "4111111111111111",
        "expiry": "12/30",
        "securityCode": "123"
    })
}
