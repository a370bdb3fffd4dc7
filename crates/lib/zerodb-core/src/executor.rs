//! Generic remote-operation execution and response translation.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::credentials::CredentialManager;
use crate::envelope::OperationEnvelope;
use crate::remote::describe_transport_error;

pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(30);
pub const PROJECT_ID_KEY: &str = "project_id";

pub type Params = Map<String, Value>;

#[derive(Debug, Clone)]
pub struct ExecutorSettings {
    pub execute_url: String,
    pub default_project_id: Option<String>,
    pub timeout: Duration,
}

impl ExecutorSettings {
    #[must_use]
    pub fn new(execute_url: impl Into<String>) -> Self {
        Self {
            execute_url: execute_url.into(),
            default_project_id: None,
            timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_default_project_id(mut self, project_id: Option<String>) -> Self {
        self.default_project_id = project_id;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Serialize)]
struct ExecuteRequest<'a> {
    operation: &'a str,
    params: &'a Params,
}

/// Failure that happened before a business result could be read.
#[derive(Debug, Clone, PartialEq)]
struct TransportFailure {
    message: String,
    details: Option<Value>,
}

impl TransportFailure {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::new(format!("request timed out after {timeout:?}"))
        } else if err.is_connect() {
            Self::new(format!("connection error: {}", describe_transport_error(err)))
        } else {
            Self::new(describe_transport_error(err))
        }
    }

    /// Prefers the server's `error.message` over the bare status line.
    fn from_status(status: u16, body: Option<&Value>) -> Self {
        let error = body.and_then(|body| body.get("error"));
        let message = error
            .and_then(|error| error.get("message"))
            .and_then(Value::as_str)
            .map_or_else(
                || format!("request failed with status code {status}"),
                str::to_string,
            );
        let details = error
            .and_then(|error| error.get("details"))
            .filter(|details| is_truthy(Some(details)))
            .cloned();
        Self { message, details }
    }

    fn render(&self, operation: &str) -> String {
        let mut text = format!("Error executing {operation}: {}", self.message);
        if let Some(details) = &self.details {
            text.push_str("\nDetails: ");
            text.push_str(&details.to_string());
        }
        text
    }
}

/// Forwards operations to the remote execute endpoint.
pub struct OperationExecutor {
    client: reqwest::Client,
    settings: ExecutorSettings,
    credentials: Arc<CredentialManager>,
}

impl OperationExecutor {
    #[must_use]
    pub const fn new(
        client: reqwest::Client,
        settings: ExecutorSettings,
        credentials: Arc<CredentialManager>,
    ) -> Self {
        Self {
            client,
            settings,
            credentials,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &ExecutorSettings {
        &self.settings
    }

    /// Executes `operation` remotely. Never fails: every error becomes a failure envelope.
    ///
    /// Callers are expected to have run [`CredentialManager::ensure_valid`] first.
    pub async fn execute(&self, operation: &str, mut params: Params) -> OperationEnvelope {
        inject_default_project(&mut params, self.settings.default_project_id.as_deref());
        debug!(operation, "executing operation");

        let Some(token) = self.credentials.bearer().await else {
            warn!(operation, "no credential available");
            return OperationEnvelope::failure(format!(
                "Error executing {operation}: no credential available"
            ));
        };

        match self.dispatch(operation, &params, &token).await {
            Ok(envelope) => envelope,
            Err(failure) => {
                warn!(operation, error = %failure.message, "operation failed");
                OperationEnvelope::failure(failure.render(operation))
            }
        }
    }

    async fn dispatch(
        &self,
        operation: &str,
        params: &Params,
        token: &str,
    ) -> Result<OperationEnvelope, TransportFailure> {
        let timeout = self.settings.timeout;
        let response = self
            .client
            .post(&self.settings.execute_url)
            .bearer_auth(token)
            .timeout(timeout)
            .json(&ExecuteRequest { operation, params })
            .send()
            .await
            .map_err(|err| TransportFailure::from_reqwest(err, timeout))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| TransportFailure::from_reqwest(err, timeout))?;
        let body = serde_json::from_slice::<Value>(&bytes);

        if !status.is_success() {
            return Err(TransportFailure::from_status(
                status.as_u16(),
                body.as_ref().ok(),
            ));
        }

        let body = body
            .map_err(|err| TransportFailure::new(format!("malformed response: {err}")))?;
        Ok(translate(&body))
    }
}

/// Adds the configured project id unless the caller supplied one.
pub fn inject_default_project(params: &mut Params, default_project_id: Option<&str>) {
    let Some(project_id) = default_project_id else {
        return;
    };
    let supplied = params
        .get(PROJECT_ID_KEY)
        .is_some_and(|value| !value.is_null());
    if !supplied {
        params.insert(
            PROJECT_ID_KEY.to_string(),
            Value::String(project_id.to_string()),
        );
    }
}

fn translate(body: &Value) -> OperationEnvelope {
    if is_truthy(body.get("success")) {
        OperationEnvelope::success(pretty(body.get("result")))
    } else {
        OperationEnvelope::failure(format!("Operation failed: {}", pretty(body.get("error"))))
    }
}

fn pretty(value: Option<&Value>) -> String {
    let value = value.unwrap_or(&Value::Null);
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// JSON truthiness: `false`, `null`, `0`, `""` and absence are falsy.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number
            .as_f64()
            .is_some_and(|number| number.is_normal() || number.is_subnormal()),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}
