use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use serde_json::{Value, json};
use zerodb_core::remote::ApiEndpoints;
use zerodb_core::{Gateway, GatewayConfig};
use zerodb_mcp::ZeroDbMcp;

pub const PROJECT_ID: &str = "test-project-123";

struct RemoteState {
    login_status: Mutex<StatusCode>,
    login_calls: AtomicUsize,
    executions: Mutex<Vec<Value>>,
}

/// Loopback ZeroDB API: logins succeed unless told otherwise, every operation
/// succeeds and echoes its operation name.
pub struct FakeZeroDb {
    endpoints: ApiEndpoints,
    state: Arc<RemoteState>,
}

impl FakeZeroDb {
    pub async fn start() -> Self {
        let state = Arc::new(RemoteState {
            login_status: Mutex::new(StatusCode::OK),
            login_calls: AtomicUsize::new(0),
            executions: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route("/v1/public/auth/login-json", post(login))
            .route("/v1/public/zerodb/mcp/execute", post(execute))
            .with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake api");
        let addr = listener.local_addr().expect("fake api address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake api server");
        });
        Self {
            endpoints: ApiEndpoints::new(&format!("http://{addr}")),
            state,
        }
    }

    pub fn server(&self) -> ZeroDbMcp {
        let config = GatewayConfig::new(self.endpoints.clone(), "test@ainative.studio", "pw")
            .with_project_id(Some(PROJECT_ID.to_string()));
        ZeroDbMcp::new(Gateway::new(config).expect("gateway"))
    }

    pub fn reject_logins(&self) {
        *self.state.login_status.lock().unwrap() = StatusCode::UNAUTHORIZED;
    }

    pub fn login_calls(&self) -> usize {
        self.state.login_calls.load(Ordering::SeqCst)
    }

    pub fn executions(&self) -> Vec<Value> {
        self.state.executions.lock().unwrap().clone()
    }
}

async fn login(State(state): State<Arc<RemoteState>>) -> Response {
    state.login_calls.fetch_add(1, Ordering::SeqCst);
    let status = *state.login_status.lock().unwrap();
    if status.is_success() {
        Json(json!({ "access_token": "fake-token", "expires_in": 1800 })).into_response()
    } else {
        (status, Json(json!({ "detail": "Incorrect username or password" }))).into_response()
    }
}

async fn execute(State(state): State<Arc<RemoteState>>, Json(body): Json<Value>) -> Response {
    let operation = body["operation"].clone();
    state.executions.lock().unwrap().push(body);
    Json(json!({ "success": true, "result": { "operation": operation } })).into_response()
}
