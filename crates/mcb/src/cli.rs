//! The `clap` command surface: `serve`
//! for running the MCP server, plus an administrative set (`init`,
//! `add-context`, `add-component`, `add-decision`, `add-rule`) that drives
//! the Service Façade directly, no MCP round-trip needed.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Memory bank kernel: MCP server and administrative CLI.
#[derive(Debug, Parser)]
#[command(name = "mcb", version, about)]
pub struct Cli {
    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Arguments shared by every administrative subcommand: where its database
/// lives and which branch it operates on.
#[derive(Debug, Args)]
pub struct ScopeArgs {
    /// Absolute path containing (or to contain) the project's database.
    /// Defaults to the current working directory.
    #[arg(long)]
    pub project_root: Option<PathBuf>,
    /// Branch name.
    #[arg(long, default_value = "main")]
    pub branch: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the MCP server.
    Serve {
        /// Serve the HTTP+SSE transport instead of the stdio duplex
        /// transport.
        #[arg(long)]
        http: bool,
        /// HTTP+SSE bind port (only meaningful with `--http`).
        #[arg(long)]
        port: Option<u16>,
        /// HTTP+SSE bind host (only meaningful with `--http`).
        #[arg(long)]
        host: Option<String>,
    },

    /// Create or update a repository's branch record.
    Init {
        /// Logical repository name.
        repository: String,
        #[command(flatten)]
        scope: ScopeArgs,
    },

    /// Record an observation or note as a `Context` node.
    AddContext {
        /// Logical repository name.
        repository: String,
        /// Recording agent identifier.
        #[arg(long)]
        agent: String,
        /// Short summary.
        #[arg(long)]
        summary: String,
        /// Full observation text.
        #[arg(long, default_value = "")]
        observation: String,
        /// Optional linked issue reference.
        #[arg(long)]
        issue: Option<String>,
        #[command(flatten)]
        scope: ScopeArgs,
    },

    /// Create or update a `Component` node.
    AddComponent {
        /// Logical repository name.
        repository: String,
        /// Logical component id (must carry the `comp-` prefix).
        id: String,
        /// Display name.
        #[arg(long)]
        name: String,
        /// Free-form component kind.
        #[arg(long)]
        kind: Option<String>,
        /// Lifecycle status: `active`, `deprecated`, or `planned`.
        #[arg(long)]
        status: Option<String>,
        /// Logical ids of components this one depends on.
        #[arg(long = "depends-on")]
        depends_on: Vec<String>,
        #[command(flatten)]
        scope: ScopeArgs,
    },

    /// Create or update a `Decision` node.
    AddDecision {
        /// Logical repository name.
        repository: String,
        /// Logical decision id (must carry the `dec-` prefix).
        id: String,
        /// Short title.
        #[arg(long)]
        name: String,
        /// Rationale / context behind the decision.
        #[arg(long, default_value = "")]
        context: String,
        /// Lifecycle status: `proposed`, `approved`, `implemented`, or
        /// `failed`.
        #[arg(long)]
        status: Option<String>,
        #[command(flatten)]
        scope: ScopeArgs,
    },

    /// Create or update a `Rule` node.
    AddRule {
        /// Logical repository name.
        repository: String,
        /// Logical rule id (must carry the `rule-` prefix).
        id: String,
        /// Display name.
        #[arg(long)]
        name: String,
        /// Rule body text.
        #[arg(long)]
        content: String,
        /// Retrieval-filtering keywords/events.
        #[arg(long)]
        trigger: Vec<String>,
        /// Lifecycle status: `active` or `deprecated`.
        #[arg(long)]
        status: Option<String>,
        #[command(flatten)]
        scope: ScopeArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_component_with_dependencies() {
        let cli = Cli::parse_from([
            "mcb",
            "add-component",
            "acme/widgets",
            "comp-auth",
            "--name",
            "AuthService",
            "--depends-on",
            "comp-db",
            "--depends-on",
            "comp-cache",
        ]);
        match cli.command {
            Command::AddComponent { repository, id, name, depends_on, scope, .. } => {
                assert_eq!(repository, "acme/widgets");
                assert_eq!(id, "comp-auth");
                assert_eq!(name, "AuthService");
                assert_eq!(depends_on, vec!["comp-db", "comp-cache"]);
                assert_eq!(scope.branch, "main");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn serve_defaults_to_stdio() {
        let cli = Cli::parse_from(["mcb", "serve"]);
        match cli.command {
            Command::Serve { http, .. } => assert!(!http),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn init_accepts_a_project_root_override() {
        let cli = Cli::parse_from([
            "mcb",
            "init",
            "acme/widgets",
            "--branch",
            "dev",
            "--project-root",
            "/tmp/acme",
        ]);
        match cli.command {
            Command::Init { repository, scope } => {
                assert_eq!(repository, "acme/widgets");
                assert_eq!(scope.branch, "dev");
                assert_eq!(scope.project_root, Some(PathBuf::from("/tmp/acme")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
