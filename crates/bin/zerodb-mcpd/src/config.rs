use clap::Parser;
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use zerodb_core::GatewayConfig;
use zerodb_core::remote::{ApiEndpoints, DEFAULT_API_URL};
use zerodb_mcp::server::McpHttpServerConfig;

const DEFAULT_AUTH_TIMEOUT_SECS: u64 = 10;
const DEFAULT_OPERATION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 25 * 60;
const DEFAULT_SSE_KEEP_ALIVE_SECS: u64 = 15;

#[derive(Parser, Debug)]
#[command(name = "zerodb-mcpd", version, about = "ZeroDB MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "ZERODB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[arg(long, env = "ZERODB_PROJECT_ID")]
    project_id: Option<String>,

    #[arg(long, env = "ZERODB_USERNAME", hide_env_values = true)]
    username: Option<String>,

    #[arg(long, env = "ZERODB_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[arg(
        long,
        env = "ZERODB_AUTH_TIMEOUT_SECS",
        default_value_t = DEFAULT_AUTH_TIMEOUT_SECS
    )]
    auth_timeout_secs: u64,

    #[arg(
        long,
        env = "ZERODB_OPERATION_TIMEOUT_SECS",
        default_value_t = DEFAULT_OPERATION_TIMEOUT_SECS
    )]
    operation_timeout_secs: u64,

    #[arg(
        long,
        env = "ZERODB_REFRESH_INTERVAL_SECS",
        default_value_t = DEFAULT_REFRESH_INTERVAL_SECS
    )]
    refresh_interval_secs: u64,

    /// Serve streamable HTTP on this address instead of stdio.
    #[arg(long = "http", env = "ZERODB_MCP_HTTP_ADDR")]
    http_addr: Option<SocketAddr>,

    /// Run the HTTP transport without per-client sessions.
    #[arg(long, env = "ZERODB_MCP_HTTP_STATELESS")]
    http_stateless: bool,

    /// SSE keep-alive ping interval; 0 disables pings.
    #[arg(
        long,
        env = "ZERODB_MCP_SSE_KEEP_ALIVE_SECS",
        default_value_t = DEFAULT_SSE_KEEP_ALIVE_SECS
    )]
    sse_keep_alive_secs: u64,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Clone)]
pub struct ZeroDbConfig {
    pub endpoints: ApiEndpoints,
    pub project_id: Option<String>,
    pub username: String,
    pub password: String,
    pub auth_timeout: Duration,
    pub operation_timeout: Duration,
    pub refresh_interval: Duration,
    pub http: Option<McpHttpServerConfig>,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingSetting(&'static str),
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSetting(name) => write!(
                f,
                "missing required setting: {name} (credentials must come from the environment, not the source)"
            ),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl ZeroDbConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }

    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig::new(
            self.endpoints.clone(),
            self.username.clone(),
            self.password.clone(),
        )
        .with_project_id(self.project_id.clone())
        .with_auth_timeout(self.auth_timeout)
        .with_operation_timeout(self.operation_timeout)
    }
}

impl TryFrom<CliArgs> for ZeroDbConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let username = non_blank(args.username)
            .ok_or(ConfigError::MissingSetting("ZERODB_USERNAME"))?;
        let password = non_blank(args.password)
            .ok_or(ConfigError::MissingSetting("ZERODB_PASSWORD"))?;
        let project_id = non_blank(args.project_id);

        let api_url = args.api_url.trim();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://"))
            || api_url.len() <= "https://".len()
        {
            return Err(ConfigError::InvalidSetting {
                name: "ZERODB_API_URL",
                value: args.api_url,
            });
        }

        Ok(Self {
            endpoints: ApiEndpoints::new(api_url),
            project_id,
            username,
            password,
            auth_timeout: positive_secs("ZERODB_AUTH_TIMEOUT_SECS", args.auth_timeout_secs)?,
            operation_timeout: positive_secs(
                "ZERODB_OPERATION_TIMEOUT_SECS",
                args.operation_timeout_secs,
            )?,
            refresh_interval: positive_secs(
                "ZERODB_REFRESH_INTERVAL_SECS",
                args.refresh_interval_secs,
            )?,
            http: args.http_addr.map(|addr| {
                let keep_alive = (args.sse_keep_alive_secs > 0)
                    .then_some(Duration::from_secs(args.sse_keep_alive_secs));
                McpHttpServerConfig::new(addr)
                    .with_stateful_mode(!args.http_stateless)
                    .with_sse_keep_alive(keep_alive)
            }),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn positive_secs(name: &'static str, secs: u64) -> Result<Duration, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::InvalidSetting {
            name,
            value: secs.to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            api_url: DEFAULT_API_URL.to_string(),
            project_id: Some("test-project-123".to_string()),
            username: Some("test@ainative.studio".to_string()),
            password: Some("TestPassword123!".to_string()),
            auth_timeout_secs: DEFAULT_AUTH_TIMEOUT_SECS,
            operation_timeout_secs: DEFAULT_OPERATION_TIMEOUT_SECS,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            http_addr: None,
            http_stateless: false,
            sse_keep_alive_secs: DEFAULT_SSE_KEEP_ALIVE_SECS,
        }
    }

    #[test]
    fn defaults_match_hosted_api_and_token_lifetime() {
        let config = ZeroDbConfig::try_from(base_args()).expect("config should parse");

        assert_eq!(config.endpoints.base(), DEFAULT_API_URL);
        assert_eq!(config.auth_timeout, Duration::from_secs(10));
        assert_eq!(config.operation_timeout, Duration::from_secs(30));
        assert_eq!(config.refresh_interval, Duration::from_secs(1500));
        assert!(config.http.is_none());
    }

    #[test]
    fn missing_credentials_are_fatal() {
        let mut args = base_args();
        args.username = None;
        assert!(matches!(
            ZeroDbConfig::try_from(args),
            Err(ConfigError::MissingSetting("ZERODB_USERNAME"))
        ));

        let mut args = base_args();
        args.password = Some("   ".to_string());
        let err = ZeroDbConfig::try_from(args).err().expect("blank password rejected");
        assert!(matches!(err, ConfigError::MissingSetting("ZERODB_PASSWORD")));
        assert!(!err.to_string().contains("TestPassword123!"));
    }

    #[test]
    fn blank_project_id_disables_injection() {
        let mut args = base_args();
        args.project_id = Some(String::new());

        let config = ZeroDbConfig::try_from(args).expect("config should parse");

        assert!(config.project_id.is_none());
        assert!(config.gateway_config().project_id.is_none());
    }

    #[test]
    fn rejects_non_http_api_url_and_zero_timeouts() {
        let mut args = base_args();
        args.api_url = "ftp://example.com".to_string();
        assert!(matches!(
            ZeroDbConfig::try_from(args),
            Err(ConfigError::InvalidSetting { name: "ZERODB_API_URL", .. })
        ));

        let mut args = base_args();
        args.operation_timeout_secs = 0;
        assert!(matches!(
            ZeroDbConfig::try_from(args),
            Err(ConfigError::InvalidSetting { name: "ZERODB_OPERATION_TIMEOUT_SECS", .. })
        ));
    }

    #[test]
    fn http_transport_options_reach_server_config() {
        let addr: SocketAddr = "127.0.0.1:8090".parse().expect("socket address");

        let mut args = base_args();
        args.http_addr = Some(addr);
        let config = ZeroDbConfig::try_from(args).expect("config should parse");
        assert_eq!(config.http, Some(McpHttpServerConfig::new(addr)));

        let mut args = base_args();
        args.http_addr = Some(addr);
        args.http_stateless = true;
        args.sse_keep_alive_secs = 0;
        let http = ZeroDbConfig::try_from(args)
            .expect("config should parse")
            .http
            .expect("http transport selected");
        assert!(!http.stateful_mode);
        assert_eq!(http.sse_keep_alive, None);
    }

    #[test]
    fn api_url_trailing_slash_is_trimmed() {
        let mut args = base_args();
        args.api_url = "http://localhost:8000/".to_string();

        let config = ZeroDbConfig::try_from(args).expect("config should parse");

        assert_eq!(
            config.gateway_config().endpoints.execute_url(),
            "http://localhost:8000/v1/public/zerodb/mcp/execute"
        );
    }
}
