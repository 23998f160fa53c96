//! ID-prefix and scope validation helpers: an `InvalidArgument`
//! is returned before any gateway call for malformed caller input.

use mcb_domain::error::{Error, Result};
use mcb_domain::{
    ID_PREFIX_COMPONENT, ID_PREFIX_CONTEXT, ID_PREFIX_DECISION, ID_PREFIX_FILE, ID_PREFIX_RULE,
    ID_PREFIX_TAG,
};

fn require_prefix(id: &str, prefix: &str, kind: &str) -> Result<()> {
    if id.starts_with(prefix) {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!(
            "{kind} id '{id}' must start with '{prefix}'"
        )))
    }
}

/// Validate a `Component` logical id carries the `comp-` prefix.
pub fn component_id(id: &str) -> Result<()> {
    require_prefix(id, ID_PREFIX_COMPONENT, "component")
}

/// Validate a `Decision` logical id carries the `dec-` prefix.
pub fn decision_id(id: &str) -> Result<()> {
    require_prefix(id, ID_PREFIX_DECISION, "decision")
}

/// Validate a `Rule` logical id carries the `rule-` prefix.
pub fn rule_id(id: &str) -> Result<()> {
    require_prefix(id, ID_PREFIX_RULE, "rule")
}

/// Validate a `File` logical id carries the `file-` prefix.
pub fn file_id(id: &str) -> Result<()> {
    require_prefix(id, ID_PREFIX_FILE, "file")
}

/// Validate a `Tag` logical id carries the `tag-` prefix.
pub fn tag_id(id: &str) -> Result<()> {
    require_prefix(id, ID_PREFIX_TAG, "tag")
}

/// Validate a `Context` logical id carries the `ctx-` prefix.
pub fn context_id(id: &str) -> Result<()> {
    require_prefix(id, ID_PREFIX_CONTEXT, "context")
}

/// Validate neither `repository` nor `branch` is empty.
pub fn scope(repository: &str, branch: &str) -> Result<()> {
    if repository.trim().is_empty() {
        return Err(Error::invalid_argument("repository must not be empty"));
    }
    if branch.trim().is_empty() {
        return Err(Error::invalid_argument("branch must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_prefix() {
        assert!(component_id("AuthService").is_err());
        assert!(component_id("comp-AuthService").is_ok());
    }

    #[test]
    fn rejects_empty_scope() {
        assert!(scope("", "main").is_err());
        assert!(scope("acme/widgets", "").is_err());
        assert!(scope("acme/widgets", "main").is_ok());
    }
}
