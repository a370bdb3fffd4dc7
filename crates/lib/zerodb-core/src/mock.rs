//! Scripted stand-in for the ZeroDB API, served on a loopback port.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode, header::AUTHORIZATION};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use serde_json::{Value, json};

use crate::remote::ApiEndpoints;

#[derive(Debug, Clone)]
pub enum Reply {
    Json(StatusCode, Value),
    Text(StatusCode, &'static str),
    Stall(Duration),
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Self::Json(StatusCode::OK, body)
    }

    async fn render(self) -> Response {
        match self {
            Self::Json(status, body) => (status, Json(body)).into_response(),
            Self::Text(status, body) => (status, body).into_response(),
            Self::Stall(delay) => {
                tokio::time::sleep(delay).await;
                StatusCode::GATEWAY_TIMEOUT.into_response()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub authorization: Option<String>,
    pub body: Value,
}

struct MockState {
    login_reply: Mutex<Reply>,
    execute_reply: Mutex<Reply>,
    logins: Mutex<Vec<Value>>,
    login_calls: AtomicUsize,
    executions: Mutex<Vec<RecordedCall>>,
}

pub struct MockRemote {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockRemote {
    pub async fn start() -> Self {
        let state = Arc::new(MockState {
            login_reply: Mutex::new(Reply::ok(json!({
                "access_token": "mock-access-token",
                "expires_in": 1800,
                "token_type": "bearer"
            }))),
            execute_reply: Mutex::new(Reply::ok(json!({ "success": true, "result": {} }))),
            logins: Mutex::new(Vec::new()),
            login_calls: AtomicUsize::new(0),
            executions: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route("/v1/public/auth/login-json", post(login))
            .route("/v1/public/zerodb/mcp/execute", post(execute))
            .with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock listener");
        let addr = listener.local_addr().expect("mock listener address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server");
        });
        Self { addr, state }
    }

    pub fn endpoints(&self) -> ApiEndpoints {
        ApiEndpoints::new(&format!("http://{}", self.addr))
    }

    pub fn reply_to_login(&self, reply: Reply) {
        *self.state.login_reply.lock().unwrap() = reply;
    }

    pub fn reply_to_execute(&self, reply: Reply) {
        *self.state.execute_reply.lock().unwrap() = reply;
    }

    pub fn login_calls(&self) -> usize {
        self.state.login_calls.load(Ordering::SeqCst)
    }

    pub fn login_bodies(&self) -> Vec<Value> {
        self.state.logins.lock().unwrap().clone()
    }

    pub fn executions(&self) -> Vec<RecordedCall> {
        self.state.executions.lock().unwrap().clone()
    }
}

async fn login(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    state.login_calls.fetch_add(1, Ordering::SeqCst);
    state.logins.lock().unwrap().push(body);
    let reply = state.login_reply.lock().unwrap().clone();
    reply.render().await
}

async fn execute(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state
        .executions
        .lock()
        .unwrap()
        .push(RecordedCall { authorization, body });
    let reply = state.execute_reply.lock().unwrap().clone();
    reply.render().await
}
