//! Core services for zerodb-mcp.
//!
//! This crate keeps the bearer credential for the ZeroDB API valid for the
//! lifetime of the process, forwards operations to the remote execute endpoint,
//! and translates every outcome into a uniform text envelope. It also carries
//! the static catalog of tools advertised to MCP clients.

pub mod catalog;
pub mod credentials;
pub mod envelope;
pub mod executor;
pub mod remote;
pub mod services;

#[cfg(test)]
mod mock;

pub use credentials::{AuthError, Credential, CredentialManager};
pub use envelope::OperationEnvelope;
pub use executor::OperationExecutor;
pub use services::{Gateway, GatewayConfig};
