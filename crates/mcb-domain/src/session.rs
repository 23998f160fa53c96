//! Session-bound request context.
//!
//! A session owns the triple `(project_root, repository, branch)` for its
//! lifetime. The duplex transport binds exactly one session per connection,
//! implicitly, on the first `init-memory-bank` call. The HTTP/SSE transport
//! generates one session per `mcp-session-id`.

use std::path::PathBuf;

use crate::constants::DEFAULT_BRANCH;
use crate::value_objects::SessionId;

/// The context a bound session carries: where its database lives, and the
/// default repository/branch non-init calls fall back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Server-generated or connection-scoped session identifier.
    pub id: SessionId,
    /// Absolute path to the client project root (contains the database
    /// directory).
    pub project_root: PathBuf,
    /// Default repository name established by `init-memory-bank`.
    pub repository: String,
    /// Default branch established by `init-memory-bank`; defaults to `main`
    /// when the init call omits it.
    pub branch: String,
}

impl Session {
    /// Bind a new session from an `init-memory-bank` call's arguments.
    #[must_use]
    pub fn new(
        id: SessionId,
        project_root: PathBuf,
        repository: impl Into<String>,
        branch: Option<String>,
    ) -> Self {
        Self {
            id,
            project_root,
            repository: repository.into(),
            branch: branch.unwrap_or_else(|| DEFAULT_BRANCH.to_owned()),
        }
    }

    /// Resolve the repository a non-init call should use: the argument
    /// override if present, else the session's bound default.
    #[must_use]
    pub fn resolve_repository<'a>(&'a self, arg_override: Option<&'a str>) -> &'a str {
        arg_override.unwrap_or(&self.repository)
    }

    /// Resolve the branch a non-init call should use: the argument override
    /// if present, else the session's bound default.
    #[must_use]
    pub fn resolve_branch<'a>(&'a self, arg_override: Option<&'a str>) -> &'a str {
        arg_override.unwrap_or(&self.branch)
    }
}
