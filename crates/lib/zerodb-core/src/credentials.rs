//! Bearer credential lifecycle.
//!
//! [`CredentialManager`] owns the only copy of the current token and its expiry.
//! Request handling calls [`CredentialManager::ensure_valid`] before each remote
//! operation, and a background task started with
//! [`CredentialManager::spawn_refresher`] renews on a fixed interval regardless of
//! traffic. Renewals are not serialized: each successful renewal replaces the
//! credential wholesale and the last one to finish wins.

use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{info, warn};

use crate::envelope::OperationEnvelope;
use crate::remote::describe_transport_error;

pub const DEFAULT_AUTH_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(25 * 60);
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 1800;
/// A credential this close to expiry is renewed before use.
pub const RENEWAL_MARGIN_SECS: i64 = 5 * 60;

/// A bearer token together with the instant after which it must not be used.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    expires_at: DateTime<Utc>,
}

impl Credential {
    #[must_use]
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns true when less than `margin` remains before expiry.
    #[must_use]
    pub fn expires_within(&self, now: DateTime<Utc>, margin: TimeDelta) -> bool {
        self.expires_at - now < margin
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// True when there is no credential, or the one present is inside the renewal margin.
#[must_use]
pub fn needs_renewal(credential: Option<&Credential>, now: DateTime<Utc>) -> bool {
    let margin = TimeDelta::seconds(RENEWAL_MARGIN_SECS);
    credential.is_none_or(|credential| credential.expires_within(now, margin))
}

/// Why a credential could not be acquired.
///
/// The rendered message never includes response bodies; at most an HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
    Timeout { after: Duration },
    Status(u16),
    Transport(String),
    MissingToken,
    MalformedResponse,
}

impl AuthError {
    #[must_use]
    pub const fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout { after: timeout }
        } else {
            Self::Transport(describe_transport_error(err))
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("authentication failed: ")?;
        match self {
            Self::InvalidCredentials => f.write_str("invalid credentials"),
            Self::Timeout { after } => write!(f, "connection error (timed out after {after:?})"),
            Self::Status(code) => write!(f, "connection error (HTTP {code})"),
            Self::Transport(detail) => write!(f, "connection error ({detail})"),
            Self::MissingToken => {
                f.write_str("connection error (invalid response format: missing access_token)")
            }
            Self::MalformedResponse => {
                f.write_str("connection error (invalid response format: body is not JSON)")
            }
        }
    }
}

impl Error for AuthError {}

/// Static login configuration.
#[derive(Clone)]
pub struct AuthSettings {
    pub login_url: String,
    pub username: String,
    pub password: String,
    pub timeout: Duration,
}

impl AuthSettings {
    #[must_use]
    pub fn new(
        login_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            login_url: login_url.into(),
            username: username.into(),
            password: password.into(),
            timeout: DEFAULT_AUTH_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("login_url", &self.login_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Acquires, stores and refreshes the bearer credential.
pub struct CredentialManager {
    client: reqwest::Client,
    settings: AuthSettings,
    store: RwLock<Option<Credential>>,
    refresh_failures: AtomicU64,
}

impl CredentialManager {
    #[must_use]
    pub fn new(client: reqwest::Client, settings: AuthSettings) -> Self {
        Self {
            client,
            settings,
            store: RwLock::new(None),
            refresh_failures: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &AuthSettings {
        &self.settings
    }

    pub async fn current(&self) -> Option<Credential> {
        self.store.read().await.clone()
    }

    pub async fn bearer(&self) -> Option<String> {
        self.store
            .read()
            .await
            .as_ref()
            .map(|credential| credential.token().to_string())
    }

    pub async fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.store.read().await.as_ref().map(Credential::expires_at)
    }

    /// Number of background renewals that failed since start.
    #[must_use]
    pub fn refresh_failures(&self) -> u64 {
        self.refresh_failures.load(Ordering::Relaxed)
    }

    /// Renews first if the credential is absent or about to expire.
    ///
    /// # Errors
    /// Returns the renewal error; the stored credential is left untouched.
    pub async fn ensure_valid(&self) -> Result<(), AuthError> {
        let stale = needs_renewal(self.store.read().await.as_ref(), Utc::now());
        if stale {
            self.renew().await?;
        }
        Ok(())
    }

    /// Logs in and replaces the stored credential.
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidCredentials`] on HTTP 401 and a connection-class
    /// error for anything else. A failed renewal keeps the previous credential.
    pub async fn renew(&self) -> Result<Credential, AuthError> {
        info!("renewing authentication token");
        match self.request_credential().await {
            Ok(credential) => {
                *self.store.write().await = Some(credential.clone());
                info!(expires_at = %credential.expires_at(), "token renewed");
                Ok(credential)
            }
            Err(err) => {
                warn!(error = %err, "token renewal failed");
                Err(err)
            }
        }
    }

    /// Renewal on user request, reported as an envelope instead of an error.
    pub async fn renew_manually(&self) -> OperationEnvelope {
        match self.renew().await {
            Ok(credential) => OperationEnvelope::success(format!(
                "Token renewed successfully. Expires at: {}",
                credential
                    .expires_at()
                    .to_rfc3339_opts(SecondsFormat::Millis, true)
            )),
            Err(err) => OperationEnvelope::failure(format!("Token renewal failed: {err}")),
        }
    }

    /// Spawns the periodic renewal loop. The first renewal happens one full
    /// interval after the call; failures are counted and logged, never raised.
    pub fn spawn_refresher(self: Arc<Self>, every: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + every, every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if let Err(err) = self.renew().await {
                    self.refresh_failures.fetch_add(1, Ordering::Relaxed);
                    warn!(error = %err, "automatic token renewal failed");
                }
            }
        })
    }

    async fn request_credential(&self) -> Result<Credential, AuthError> {
        let timeout = self.settings.timeout;
        let response = self
            .client
            .post(&self.settings.login_url)
            .timeout(timeout)
            .json(&LoginRequest {
                username: &self.settings.username,
                password: &self.settings.password,
            })
            .send()
            .await
            .map_err(|err| AuthError::from_transport(err, timeout))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(AuthError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| AuthError::from_transport(err, timeout))?;
        let body: Value =
            serde_json::from_slice(&body).map_err(|_| AuthError::MalformedResponse)?;

        let token = body
            .get("access_token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;
        let lifetime = body.get("expires_in").and_then(Value::as_i64);

        Ok(Credential::new(token, expiry_after(Utc::now(), lifetime)))
    }

    #[cfg(test)]
    pub(crate) async fn install(&self, credential: Credential) {
        *self.store.write().await = Some(credential);
    }
}

/// Expiry for a token issued at `now`. Missing, non-positive or unrepresentable
/// lifetimes fall back to [`DEFAULT_TOKEN_LIFETIME_SECS`].
fn expiry_after(now: DateTime<Utc>, lifetime_secs: Option<i64>) -> DateTime<Utc> {
    let default = TimeDelta::seconds(DEFAULT_TOKEN_LIFETIME_SECS);
    let lifetime = lifetime_secs
        .filter(|secs| *secs > 0)
        .and_then(TimeDelta::try_seconds)
        .unwrap_or(default);
    now.checked_add_signed(lifetime).unwrap_or(now)
}
