//! MCP server implementation for zerodb-mcp.
//!
//! Every catalog tool except credential renewal is registered as a dynamic
//! route that checks the credential and hands its arguments to the operation
//! executor. Renewal is a regular rmcp tool on the core router.

mod helpers;
pub mod server;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRoute;
use rmcp::handler::server::tool::ToolCallContext;
use rmcp::model::{
    CallToolResult,
    ErrorCode,
    JsonObject,
    ServerCapabilities,
    ServerInfo,
    Tool,
};
use rmcp::{ErrorData, ServerHandler, handler::server::tool::ToolRouter, tool, tool_handler, tool_router};
use tracing::warn;
use zerodb_core::catalog::{self, RENEW_TOKEN_TOOL, ToolAction, ToolSpec};
use zerodb_core::{Gateway, OperationEnvelope};

const SERVER_INSTRUCTIONS: &str = r"zerodb-mcp exposes the ZeroDB API as MCP tools.

Tool groups:
- Memory: `zerodb_store_memory`, `zerodb_search_memory`, `zerodb_get_context`.
- Vectors (1536 dimensions): upsert, batch upsert, search, get, list, delete, stats, index, optimize, export.
- Quantum helpers: compress, decompress, hybrid search, optimize, feature map, kernel similarity.
- NoSQL tables: create/list/get/delete tables, insert/query/update/delete rows.
- Files: upload (base64), download, list, delete, metadata, presigned URLs.
- Events: create, list, get, subscribe, stats.
- Projects: create, get, list, update, delete, stats, enable database features.
- RLHF feedback: interactions, agent/workflow feedback, error reports, collection control.
- Admin (admin accounts only): system stats, all projects, user usage, health, optimize.

Notes:
- `project_id` defaults to the server's configured project when omitted.
- Results are returned as pretty-printed JSON text; failures set `isError`.
- Authentication is renewed automatically; `zerodb_renew_token` forces a renewal.";

type ToolFuture<'a> = Pin<Box<dyn Future<Output = Result<CallToolResult, ErrorData>> + Send + 'a>>;

/// MCP server wrapper around the ZeroDB gateway.
#[derive(Clone)]
pub struct ZeroDbMcp {
    tool_router: ToolRouter<Self>,
    gateway: Arc<Gateway>,
}

impl ZeroDbMcp {
    /// Creates a new server using a gateway by value.
    #[must_use]
    pub fn new(gateway: Gateway) -> Self {
        Self::with_gateway(Arc::new(gateway))
    }

    /// Creates a new server using a shared gateway handle.
    #[must_use]
    pub fn with_gateway(gateway: Arc<Gateway>) -> Self {
        let tool_router = Self::tool_router_core() + remote_tool_router();
        Self {
            tool_router,
            gateway,
        }
    }

    /// Tools advertised to clients.
    #[must_use]
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Routes a tool call and converts the envelope into an MCP result.
    ///
    /// # Errors
    /// Returns an error only for tool names missing from the catalog.
    pub async fn call(
        &self,
        tool_name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ErrorData> {
        let envelope = self
            .dispatch(tool_name, arguments.unwrap_or_default())
            .await?;
        Ok(helpers::call_result(envelope))
    }

    /// Routes a tool call to the credential manager or the operation executor.
    ///
    /// Remote operations run only after the credential has been checked; a
    /// failed check is reported as a failure envelope, not an error.
    ///
    /// # Errors
    /// Returns an error only for tool names missing from the catalog.
    pub async fn dispatch(
        &self,
        tool_name: &str,
        arguments: JsonObject,
    ) -> Result<OperationEnvelope, ErrorData> {
        let spec = catalog::find(tool_name).ok_or_else(|| {
            helpers::mcp_err(ErrorCode::INVALID_PARAMS, format!("unknown tool: {tool_name}"))
        })?;

        match spec.action {
            ToolAction::RenewCredential => Ok(self.gateway.credentials().renew_manually().await),
            ToolAction::Remote(operation) => {
                if let Err(err) = self.gateway.credentials().ensure_valid().await {
                    warn!(tool = tool_name, error = %err, "credential check failed");
                    return Ok(OperationEnvelope::failure(format!(
                        "Error executing {tool_name}: {err}"
                    )));
                }
                Ok(self.gateway.executor().execute(operation, arguments).await)
            }
        }
    }
}

fn remote_tool_router() -> ToolRouter<ZeroDbMcp> {
    let mut router = ToolRouter::new();
    for spec in catalog::TOOLS {
        if spec.remote_operation().is_some() {
            router.add_route(ToolRoute::new_dyn(tool_definition(spec), call_remote_tool));
        }
    }
    router
}

fn tool_definition(spec: &ToolSpec) -> Tool {
    Tool::new(spec.name, spec.description, spec.input_schema())
}

fn call_remote_tool(context: ToolCallContext<'_, ZeroDbMcp>) -> ToolFuture<'_> {
    Box::pin(async move {
        let ToolCallContext {
            service,
            name,
            arguments,
            ..
        } = context;
        service.call(&name, arguments).await
    })
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl ZeroDbMcp {
    #[tool(name = "zerodb_renew_token", description = "Manually renew authentication token")]
    async fn renew_token(&self) -> Result<CallToolResult, ErrorData> {
        self.call(RENEW_TOKEN_TOOL, None).await
    }
}

#[tool_handler]
impl ServerHandler for ZeroDbMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
