use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::credentials::{AuthSettings, CredentialManager, DEFAULT_AUTH_TIMEOUT};
use crate::executor::{DEFAULT_OPERATION_TIMEOUT, ExecutorSettings, OperationExecutor};
use crate::remote::{ApiEndpoints, build_client};

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the gateway and the services it owns.
#[derive(Clone)]
pub struct GatewayConfig {
    pub endpoints: ApiEndpoints,
    pub username: String,
    pub password: String,
    pub project_id: Option<String>,
    pub auth_timeout: Duration,
    pub operation_timeout: Duration,
    pub connect_timeout: Duration,
}

impl GatewayConfig {
    pub fn new(
        endpoints: ApiEndpoints,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            endpoints,
            username: username.into(),
            password: password.into(),
            project_id: None,
            auth_timeout: DEFAULT_AUTH_TIMEOUT,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    pub fn with_project_id(mut self, project_id: Option<String>) -> Self {
        self.project_id = project_id;
        self
    }

    pub fn with_auth_timeout(mut self, auth_timeout: Duration) -> Self {
        self.auth_timeout = auth_timeout;
        self
    }

    pub fn with_operation_timeout(mut self, operation_timeout: Duration) -> Self {
        self.operation_timeout = operation_timeout;
        self
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("endpoints", &self.endpoints)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("project_id", &self.project_id)
            .field("auth_timeout", &self.auth_timeout)
            .field("operation_timeout", &self.operation_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// Shared handle over the credential manager and the operation executor.
///
/// Both services share one HTTP client and therefore one connection pool.
#[derive(Clone)]
pub struct Gateway {
    endpoints: ApiEndpoints,
    credentials: Arc<CredentialManager>,
    executor: Arc<OperationExecutor>,
}

impl Gateway {
    /// Builds the HTTP client and wires the services to it.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: GatewayConfig) -> Result<Self, reqwest::Error> {
        let client = build_client(config.connect_timeout)?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: GatewayConfig) -> Self {
        let auth = AuthSettings::new(
            config.endpoints.login_url(),
            config.username,
            config.password,
        )
        .with_timeout(config.auth_timeout);
        let credentials = Arc::new(CredentialManager::new(client.clone(), auth));

        let settings = ExecutorSettings::new(config.endpoints.execute_url())
            .with_default_project_id(config.project_id)
            .with_timeout(config.operation_timeout);
        let executor = Arc::new(OperationExecutor::new(
            client,
            settings,
            credentials.clone(),
        ));

        Self {
            endpoints: config.endpoints,
            credentials,
            executor,
        }
    }

    pub const fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    pub fn credentials(&self) -> Arc<CredentialManager> {
        self.credentials.clone()
    }

    pub fn executor(&self) -> Arc<OperationExecutor> {
        self.executor.clone()
    }

    pub fn spawn_refresher(&self, every: Duration) -> JoinHandle<()> {
        self.credentials.clone().spawn_refresher(every)
    }
}
