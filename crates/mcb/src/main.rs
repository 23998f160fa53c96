//! Process entry point: loads [`ServerConfig`], installs `tracing`, wires
//! the Client Registry, Gateway Factory, Session Manager, and Tool
//! Dispatcher into a running server or one-shot administrative command.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use chrono::Utc;
use clap::Parser;
use mcb::cli::{Cli, Command, ScopeArgs};
use mcb_application::facade::ServiceFacade;
use mcb_application::operations::args::{ComponentArgs, ContextArgs, DecisionArgs, RuleArgs};
use mcb_domain::error::Result;
use mcb_domain::ports::NoopOperationLogger;
use mcb_domain::value_objects::SessionId;
use mcb_domain::Session;
use mcb_infrastructure::{init_tracing, ServerConfig, SessionManager, SqliteClientRegistry};
use mcb_providers::SqliteGatewayFactory;
use mcb_server::ToolDispatcher;

fn project_root(scope: &ScopeArgs) -> Result<PathBuf> {
    match &scope.project_root {
        Some(root) => Ok(root.clone()),
        None => std::env::current_dir().map_err(mcb_domain::Error::Io),
    }
}

fn session_for(repository: String, scope: &ScopeArgs) -> Result<Session> {
    Ok(Session::new(
        SessionId::new(),
        project_root(scope)?,
        repository,
        Some(scope.branch.clone()),
    ))
}

/// A fresh `ctx-` id, since the CLI surface (unlike the MCP tool) has no
/// caller-supplied logical id for contexts.
fn generate_context_id(agent: &str) -> String {
    format!("ctx-{}-{agent}", Utc::now().format("%Y%m%dT%H%M%S%3f"))
}

async fn run(cli: Cli, config: ServerConfig) -> Result<()> {
    let facade = ServiceFacade::new(
        Arc::new(SqliteClientRegistry::with_db_dirname(config.db_dirname.clone())),
        Arc::new(SqliteGatewayFactory),
    );

    match cli.command {
        Command::Serve { http, port, host } => {
            let sessions = Arc::new(SessionManager::new());
            let dispatcher = Arc::new(ToolDispatcher::new(
                facade,
                sessions,
                Arc::new(NoopOperationLogger),
            ));
            if http {
                let host = host.unwrap_or(config.host);
                let port = port.unwrap_or(config.http_stream_port);
                mcb_server::transport::http::serve(dispatcher, &host, port).await
            } else {
                mcb_server::transport::stdio::serve(dispatcher).await
            }
        }

        Command::Init { repository, scope } => {
            let session = session_for(repository, &scope)?;
            let result = facade.init_repository(&session).await?;
            print_json(&result)
        }

        Command::AddContext {
            repository,
            agent,
            summary,
            observation,
            issue,
            scope,
        } => {
            let session = session_for(repository, &scope)?;
            let args = ContextArgs {
                id: generate_context_id(&agent),
                agent,
                summary,
                observation,
                date: None,
                issue,
                link: None,
            };
            let result = facade.upsert_context(&session, None, None, args).await?;
            print_json(&result)
        }

        Command::AddComponent {
            repository,
            id,
            name,
            kind,
            status,
            depends_on,
            scope,
        } => {
            let session = session_for(repository, &scope)?;
            let args = ComponentArgs {
                id,
                name,
                kind,
                status,
                depends_on,
            };
            let result = facade.upsert_component(&session, None, None, args).await?;
            print_json(&result)
        }

        Command::AddDecision {
            repository,
            id,
            name,
            context,
            status,
            scope,
        } => {
            let session = session_for(repository, &scope)?;
            let args = DecisionArgs {
                id,
                name,
                date: None,
                context,
                status,
                component_id: None,
            };
            let result = facade.upsert_decision(&session, None, None, args).await?;
            print_json(&result)
        }

        Command::AddRule {
            repository,
            id,
            name,
            content,
            trigger,
            status,
            scope,
        } => {
            let session = session_for(repository, &scope)?;
            let args = RuleArgs {
                id,
                name,
                created: None,
                content,
                triggers: trigger,
                status,
            };
            let result = facade.upsert_rule(&session, None, None, args).await?;
            print_json(&result)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(mcb_domain::Error::Json)?;
    println!("{text}");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.debug);

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "command failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
