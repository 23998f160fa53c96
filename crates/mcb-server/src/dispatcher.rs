//! The Tool Dispatcher: a static `name -> handler` table, session
//! resolution, and the single translation point from
//! [`mcb_domain::error::Error`] to the wire response envelope.
//!
//! Transport-agnostic: [`ToolDispatcher::dispatch`] takes whichever
//! [`ProgressChannel`] and [`CancellationToken`] the calling transport
//! constructed for this request, and knows nothing about stdio or HTTP.

use std::path::PathBuf;
use std::sync::Arc;

use mcb_application::facade::ServiceFacade;
use mcb_application::operations::args::{
    AssociateContextArgs, AssociateDecisionArgs, AssociateFileArgs, BulkDeleteByBranchArgs,
    BulkDeleteByRepositoryArgs, BulkDeleteByTagArgs, BulkDeleteByTypeArgs, ComponentArgs,
    ComponentIdArgs, ComponentTraversalArgs, ContextArgs, CountArgs, DateRangeArgs, DecisionArgs,
    FileArgs, GetEntityArgs, ItemContextArgs, MetadataArgs, PropertiesArgs, RelatedItemsArgs,
    RuleArgs, ShortestPathArgs, TagArgs, TagItemArgs,
};
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::{LogLevel, OperationLogger, ProgressChannel};
use mcb_domain::value_objects::SessionId;
use mcb_domain::Session;
use mcb_infrastructure::SessionManager;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;

/// Arguments for the `init-memory-bank` tool. Not part of
/// `mcb-application`'s argument set: binding a session is a dispatcher
/// concern, not an operation.
#[derive(Debug, Clone, Deserialize)]
struct InitMemoryBankArgs {
    repository: String,
    branch: Option<String>,
    #[serde(alias = "projectRoot")]
    project_root: Option<String>,
}

/// The outcome of one dispatched call, already translated from
/// `Result<T, Error>` into the shape every transport serialises
/// (either a structured success payload or an error envelope). Transports turn this into
/// their own wire type (`rmcp::model::CallToolResult` for both of ours).
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// Mirrors the MCP `isError` field.
    pub is_error: bool,
    /// A human-readable summary, always present as the `content[0].text`.
    pub text: String,
    /// The typed result, serialised. Always `Some` on success; `Some` with
    /// an `{"error": ...}` shape on failure so callers that only look at
    /// `structuredContent` still see the message.
    pub structured: Value,
}

/// The Tool Dispatcher: resolves a request's session, shapes its raw JSON
/// arguments into the matching operation's typed arguments, and delegates
/// to the [`ServiceFacade`].
pub struct ToolDispatcher {
    facade: ServiceFacade,
    sessions: Arc<SessionManager>,
    logger: Arc<dyn OperationLogger>,
}

fn parse<T: for<'de> Deserialize<'de>>(tool: &str, arguments: &Value) -> Result<T> {
    serde_json::from_value(arguments.clone())
        .map_err(|e| Error::invalid_argument(format!("{tool}: invalid arguments: {e}")))
}

fn str_override<'a>(arguments: &'a Value, key: &str) -> Option<&'a str> {
    arguments.get(key).and_then(Value::as_str)
}

impl ToolDispatcher {
    /// Build a dispatcher over an already-wired façade, session table, and
    /// logger.
    #[must_use]
    pub fn new(
        facade: ServiceFacade,
        sessions: Arc<SessionManager>,
        logger: Arc<dyn OperationLogger>,
    ) -> Self {
        Self {
            facade,
            sessions,
            logger,
        }
    }

    /// Dispatch one `{tool, arguments}` call for `session_id`, returning an
    /// already-translated [`DispatchOutcome`]. Never returns an `Err` —
    /// every failure is folded into `DispatchOutcome::is_error`.
    pub async fn dispatch(
        &self,
        session_id: SessionId,
        tool: &str,
        arguments: Value,
        progress: &dyn ProgressChannel,
        cancellation: &CancellationToken,
    ) -> DispatchOutcome {
        match self
            .dispatch_inner(session_id, tool, &arguments, progress, cancellation)
            .await
        {
            Ok(value) => DispatchOutcome {
                is_error: false,
                text: format!("{tool} succeeded"),
                structured: value,
            },
            Err(err) => {
                let level = if err.is_caller_error() {
                    LogLevel::Warn
                } else {
                    LogLevel::Error
                };
                self.logger.log(level, tool, &err.to_string(), None);
                DispatchOutcome {
                    is_error: true,
                    text: err.to_string(),
                    structured: json!({ "error": err.to_string() }),
                }
            }
        }
    }

    /// Resolve the session to act under for a non-init call: the bound
    /// session, with `projectRoot` swapped for a per-call override when the
    /// transport allows it (session binding stays mandatory; only the root
    /// it resolves against may be overridden).
    fn effective_session(&self, session: Session, arguments: &Value) -> Session {
        match str_override(arguments, "projectRoot") {
            Some(root) => Session {
                project_root: PathBuf::from(root),
                ..session
            },
            None => session,
        }
    }

    #[allow(clippy::too_many_lines)]
    async fn dispatch_inner(
        &self,
        session_id: SessionId,
        tool: &str,
        arguments: &Value,
        progress: &dyn ProgressChannel,
        cancellation: &CancellationToken,
    ) -> Result<Value> {
        if tool == "init-memory-bank" {
            let args: InitMemoryBankArgs = parse(tool, arguments)?;
            let project_root = match args.project_root {
                Some(root) => PathBuf::from(root),
                None => std::env::current_dir().map_err(Error::Io)?,
            };
            let session = Session::new(session_id, project_root, args.repository, args.branch);
            self.sessions.bind(session.clone());
            let result = self.facade.init_repository(&session).await?;
            return serde_json::to_value(result).map_err(Error::Json);
        }

        let bound = self.sessions.require(&session_id)?;
        let session = self.effective_session(bound, arguments);
        let repository = str_override(arguments, "repository");
        let branch = str_override(arguments, "branch");

        let value = match tool {
            "metadata" => {
                let args: MetadataArgs = parse(tool, arguments)?;
                to_value(self.facade.upsert_metadata(&session, repository, branch, args).await?)?
            }
            "context" => {
                let args: ContextArgs = parse(tool, arguments)?;
                to_value(self.facade.upsert_context(&session, repository, branch, args).await?)?
            }
            "component" => {
                let args: ComponentArgs = parse(tool, arguments)?;
                to_value(self.facade.upsert_component(&session, repository, branch, args).await?)?
            }
            "decision" => {
                let args: DecisionArgs = parse(tool, arguments)?;
                to_value(self.facade.upsert_decision(&session, repository, branch, args).await?)?
            }
            "rule" => {
                let args: RuleArgs = parse(tool, arguments)?;
                to_value(self.facade.upsert_rule(&session, repository, branch, args).await?)?
            }
            "file" => {
                let args: FileArgs = parse(tool, arguments)?;
                to_value(self.facade.upsert_file(&session, repository, branch, args).await?)?
            }
            "tag" => {
                let args: TagArgs = parse(tool, arguments)?;
                to_value(self.facade.upsert_tag(&session, args).await?)?
            }
            "associate_file_with_component" => {
                let args: AssociateFileArgs = parse(tool, arguments)?;
                to_value(
                    self.facade
                        .associate_file_with_component(
                            &session,
                            repository,
                            branch,
                            &args.file_id,
                            &args.component_id,
                        )
                        .await?,
                )?
            }
            "associate_context_with_item" => {
                let args: AssociateContextArgs = parse(tool, arguments)?;
                to_value(
                    self.facade
                        .associate_context_with_item(
                            &session,
                            repository,
                            branch,
                            &args.context_id,
                            args.item_kind,
                            &args.item_id,
                        )
                        .await?,
                )?
            }
            "associate_decision_with_component" => {
                let args: AssociateDecisionArgs = parse(tool, arguments)?;
                to_value(
                    self.facade
                        .associate_decision_with_component(
                            &session,
                            repository,
                            branch,
                            &args.decision_id,
                            &args.component_id,
                        )
                        .await?,
                )?
            }
            "tag_item" => {
                let args: TagItemArgs = parse(tool, arguments)?;
                to_value(
                    self.facade
                        .tag_item(
                            &session,
                            repository,
                            branch,
                            args.item_kind,
                            &args.item_id,
                            &args.tag_id,
                        )
                        .await?,
                )?
            }
            "get-entity" => {
                let args: GetEntityArgs = parse(tool, arguments)?;
                to_value(
                    self.facade
                        .get_entity(&session, repository, branch, args.kind, &args.id)
                        .await?,
                )?
            }
            "get-component" => {
                let args: ComponentIdArgs = parse(tool, arguments)?;
                to_value(self.facade.get_component(&session, repository, branch, &args.id).await?)?
            }
            "get_component_dependencies" => {
                let args: ComponentTraversalArgs = parse(tool, arguments)?;
                to_value(
                    self.facade
                        .get_component_dependencies(&session, repository, branch, args)
                        .await?,
                )?
            }
            "get_component_dependents" => {
                let args: ComponentIdArgs = parse(tool, arguments)?;
                to_value(
                    self.facade
                        .get_component_dependents(&session, repository, branch, &args.id)
                        .await?,
                )?
            }
            "get_governing_items_for_component" => {
                let args: ComponentIdArgs = parse(tool, arguments)?;
                to_value(
                    self.facade
                        .get_governing_items_for_component(&session, repository, branch, &args.id)
                        .await?,
                )?
            }
            "get_item_contextual_history" => {
                let args: ItemContextArgs = parse(tool, arguments)?;
                to_value(
                    self.facade
                        .get_item_contextual_history(&session, repository, branch, &args.id)
                        .await?,
                )?
            }
            "get_related_items" => {
                let args: RelatedItemsArgs = parse(tool, arguments)?;
                to_value(
                    self.facade
                        .get_related_items(&session, repository, branch, args)
                        .await?,
                )?
            }
            "shortest_path" => {
                let args: ShortestPathArgs = parse(tool, arguments)?;
                to_value(
                    self.facade
                        .shortest_path(&session, repository, branch, &args.start_id, &args.end_id)
                        .await?,
                )?
            }
            "get_decisions_by_date_range" => {
                let args: DateRangeArgs = parse(tool, arguments)?;
                to_value(
                    self.facade
                        .get_decisions_by_date_range(&session, repository, branch, args.start, args.end)
                        .await?,
                )?
            }
            "pagerank" => to_value(
                self.facade
                    .pagerank(&session, repository, branch, progress, cancellation)
                    .await?,
            )?,
            "louvain_community_detection" => to_value(
                self.facade
                    .louvain_community_detection(&session, repository, branch, progress, cancellation)
                    .await?,
            )?,
            "k_core_decomposition" => to_value(
                self.facade
                    .k_core_decomposition(&session, repository, branch, progress, cancellation)
                    .await?,
            )?,
            "strongly_connected_components" => to_value(
                self.facade
                    .strongly_connected_components(&session, repository, branch)
                    .await?,
            )?,
            "weakly_connected_components" => to_value(
                self.facade
                    .weakly_connected_components(&session, repository, branch)
                    .await?,
            )?,
            "labels" => to_value(self.facade.labels(&session).await?)?,
            "count" => {
                let args: CountArgs = parse(tool, arguments)?;
                let (repository, branch) = if args.scoped {
                    (repository, branch)
                } else {
                    (None, None)
                };
                let count = self.facade.count(&session, &args.label, repository, branch).await?;
                json!({ "label": args.label, "count": count })
            }
            "properties" => {
                let args: PropertiesArgs = parse(tool, arguments)?;
                to_value(self.facade.properties(&session, &args.label).await?)?
            }
            "indexes" => to_value(self.facade.indexes(&session).await?)?,
            "bulkDeleteByType" => {
                let args: BulkDeleteByTypeArgs = parse(tool, arguments)?;
                to_value(
                    self.facade
                        .bulk_delete_by_type(&session, repository, branch, args)
                        .await?,
                )?
            }
            "bulkDeleteByTag" => {
                let args: BulkDeleteByTagArgs = parse(tool, arguments)?;
                to_value(
                    self.facade
                        .bulk_delete_by_tag(&session, repository, branch, args)
                        .await?,
                )?
            }
            "bulkDeleteByBranch" => {
                let args: BulkDeleteByBranchArgs = parse(tool, arguments)?;
                to_value(
                    self.facade
                        .bulk_delete_by_branch(&session, repository, branch, args)
                        .await?,
                )?
            }
            "bulkDeleteByRepository" => {
                let args: BulkDeleteByRepositoryArgs = parse(tool, arguments)?;
                to_value(self.facade.bulk_delete_by_repository(&session, args).await?)?
            }
            other => {
                return Err(Error::invalid_argument(format!("unknown tool '{other}'")));
            }
        };

        Ok(value)
    }
}

fn to_value<T: serde::Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).map_err(Error::Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcb_domain::ports::NoopProgressChannel;
    use mcb_infrastructure::registry::SqliteClientRegistry;
    use mcb_providers::SqliteGatewayFactory;
    use mcb_domain::ports::NoopOperationLogger;

    fn dispatcher() -> (ToolDispatcher, Arc<SessionManager>) {
        let sessions = Arc::new(SessionManager::new());
        let facade = ServiceFacade::new(
            Arc::new(SqliteClientRegistry::new()),
            Arc::new(SqliteGatewayFactory),
        );
        let dispatcher = ToolDispatcher::new(facade, Arc::clone(&sessions), Arc::new(NoopOperationLogger));
        (dispatcher, sessions)
    }

    #[tokio::test]
    async fn non_init_call_without_a_session_fails_unbound() {
        let (dispatcher, _sessions) = dispatcher();
        let outcome = dispatcher
            .dispatch(
                SessionId::new(),
                "labels",
                json!({}),
                &NoopProgressChannel,
                &CancellationToken::new(),
            )
            .await;
        assert!(outcome.is_error);
        assert!(outcome.text.contains("session not bound"));
    }

    #[tokio::test]
    async fn unknown_tool_is_an_invalid_argument_error() {
        let (dispatcher, sessions) = dispatcher();
        let dir = tempfile::tempdir().unwrap();
        let id = SessionId::new();
        sessions.bind(Session::new(id.clone(), dir.path().to_path_buf(), "acme", None));

        let outcome = dispatcher
            .dispatch(
                id,
                "not-a-real-tool",
                json!({}),
                &NoopProgressChannel,
                &CancellationToken::new(),
            )
            .await;
        assert!(outcome.is_error);
        assert!(outcome.text.contains("unknown tool"));
    }

    #[tokio::test]
    async fn init_memory_bank_binds_a_session() {
        let (dispatcher, sessions) = dispatcher();
        let dir = tempfile::tempdir().unwrap();
        let id = SessionId::new();

        let outcome = dispatcher
            .dispatch(
                id.clone(),
                "init-memory-bank",
                json!({ "repository": "acme/widgets", "branch": "main", "projectRoot": dir.path() }),
                &NoopProgressChannel,
                &CancellationToken::new(),
            )
            .await;

        assert!(!outcome.is_error, "{}", outcome.text);
        let session = sessions.require(&id).unwrap();
        assert_eq!(session.repository, "acme/widgets");
        assert_eq!(session.branch, "main");
    }
}
