//!
//! **Documentation**: [docs/modules/domain.md](../../../../docs/modules/domain.md#value-objects)
//!
//! Strong-typed identifiers for all memory bank entities.
//!
//! Most entities here are addressed by free-form, human-chosen string IDs
//! (`define_string_id!`) rather than UUIDs, since callers supply their own IDs
//! (`"comp-auth-service"`, `"dec-20260101-retry-policy"`, ...). `SessionId` is
//! the one server-generated identifier and stays UUID-backed.

define_id!(
    SessionId,
    "Strong typed identifier for a bound MCP session"
);

define_string_id!(
    RepositoryId,
    "Strong typed identifier for a tracked repository (unscoped by branch)"
);
define_string_id!(ComponentId, "Strong typed identifier for a Component node");
define_string_id!(DecisionId, "Strong typed identifier for a Decision node");
define_string_id!(RuleId, "Strong typed identifier for a Rule node");
define_string_id!(ContextId, "Strong typed identifier for a Context node");
define_string_id!(FileId, "Strong typed identifier for a File node");
define_string_id!(TagId, "Strong typed identifier for a Tag node (global, unscoped)");
