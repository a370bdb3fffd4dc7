use std::borrow::Cow;

use rmcp::ErrorData;
use rmcp::model::{CallToolResult, Content, ErrorCode};
use zerodb_core::OperationEnvelope;

pub fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

/// Successful results carry no `isError` key on the wire.
pub fn call_result(envelope: OperationEnvelope) -> CallToolResult {
    if envelope.is_error() {
        CallToolResult::error(vec![Content::text(envelope.into_text())])
    } else {
        let mut result = CallToolResult::success(vec![Content::text(envelope.into_text())]);
        result.is_error = None;
        result
    }
}
