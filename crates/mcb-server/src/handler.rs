//! The shared `rmcp::ServerHandler` both transports serve.
//!
//! Grounded on the manual (non-macro) `ServerHandler` pattern: a static
//! tool table drives `list_tools`, and `call_tool` is one
//! `match request.name.as_ref() { ... }` into the [`ToolDispatcher`]. No
//! `#[tool_router]`/`#[tool_handler]` macro expansion — with ~30
//! heterogeneously-shaped tools the explicit table reads more plainly than
//! the macro-generated dispatch would.

use std::borrow::Cow;
use std::sync::Arc;

use mcb_domain::error::Error;
use mcb_domain::ports::ProgressChannel;
use mcb_domain::value_objects::SessionId;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, ErrorData, Implementation, InitializeRequestParam,
    InitializeResult, ListToolsResult, PaginatedRequestParam, ProgressNotificationParam,
    ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{Peer, RoleServer, ServerHandler};
use serde_json::Value;

use crate::dispatcher::{DispatchOutcome, ToolDispatcher};
use crate::tools;

/// Forwards `ProgressChannel::notify` onto the MCP peer's native progress
/// notification, keyed by whatever `progressToken` the caller attached to
/// its request `_meta` (absent when the caller didn't ask to be notified —
/// `notify` is then a no-op).
struct PeerProgressChannel {
    peer: Peer<RoleServer>,
    token: Option<rmcp::model::ProgressToken>,
}

#[async_trait::async_trait]
impl ProgressChannel for PeerProgressChannel {
    async fn notify(&self, event: mcb_domain::ports::ProgressEvent) {
        let Some(token) = self.token.clone() else {
            return;
        };
        let _ = self
            .peer
            .notify_progress(ProgressNotificationParam {
                progress_token: token,
                progress: event.percent.unwrap_or(0.0),
                total: Some(100.0),
                message: event.message,
            })
            .await;
    }
}

/// One `ServerHandler` instance per connection: one stdio process
/// connection, or one HTTP `mcp-session-id`. Each mints its own
/// [`SessionId`] at construction, which is what makes "exactly one session
/// per connection" fall out of `rmcp`'s own connection lifecycle rather
/// than needing a second bookkeeping layer.
pub struct MemoryBankHandler {
    dispatcher: Arc<ToolDispatcher>,
    session_id: SessionId,
}

impl MemoryBankHandler {
    /// Build a handler bound to a freshly minted session id.
    #[must_use]
    pub fn new(dispatcher: Arc<ToolDispatcher>) -> Self {
        Self {
            dispatcher,
            session_id: SessionId::new(),
        }
    }

    /// The session id this handler's connection is bound to. Transports
    /// that need to pre-seed or report the session (e.g. the HTTP
    /// transport's `mcp-session-id` response header) read this.
    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }
}

fn outcome_to_result(outcome: DispatchOutcome) -> CallToolResult {
    CallToolResult {
        content: vec![Content::text(outcome.text)],
        structured_content: Some(outcome.structured),
        is_error: Some(outcome.is_error),
        meta: None,
    }
}

fn tool_error(message: impl Into<String>) -> ErrorData {
    ErrorData::invalid_params(message.into(), None)
}

impl ServerHandler for MemoryBankHandler {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcb".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "Persistent, branch-scoped memory bank for AI coding agents. Call \
                 `init-memory-bank` first to bind a session to a project root, \
                 repository, and branch."
                    .to_string(),
            ),
        }
    }

    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, ErrorData> {
        Ok(InitializeResult {
            protocol_version: request.protocol_version,
            capabilities: self.get_info().capabilities,
            server_info: self.get_info().server_info,
            instructions: self.get_info().instructions,
        })
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        let tools = tools::all()
            .into_iter()
            .map(|spec| {
                let schema = (spec.input_schema)();
                let schema_object = match schema {
                    Value::Object(map) => map,
                    _ => serde_json::Map::new(),
                };
                Tool::new(
                    Cow::Borrowed(spec.name),
                    Cow::Borrowed(spec.description),
                    Arc::new(schema_object),
                )
            })
            .collect();
        Ok(ListToolsResult {
            tools,
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let arguments = request
            .arguments
            .map(Value::Object)
            .unwrap_or(Value::Object(serde_json::Map::new()));

        let progress_token = context.meta.get_progress_token();
        let progress = PeerProgressChannel {
            peer: context.peer.clone(),
            token: progress_token,
        };

        if context.ct.is_cancelled() {
            return Err(tool_error(Error::Cancelled.to_string()));
        }

        let outcome = self
            .dispatcher
            .dispatch(
                self.session_id,
                request.name.as_ref(),
                arguments,
                &progress,
                &context.ct,
            )
            .await;

        Ok(outcome_to_result(outcome))
    }
}
