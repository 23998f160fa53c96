//! Stateless operation functions, one module per category.
//!
//! Every function here takes a [`Gateways`](mcb_domain::ports::Gateways)
//! bundle plus already-validated `(repository, branch)` scope and typed
//! arguments, and returns a typed result from [`crate::results`]. No
//! transport or session concerns live here — that's the Tool Dispatcher's
//! job one layer up, in `mcb-server`.

/// Typed argument structs for every tool, deserialised from the request's
/// `arguments` object.
pub mod args;
/// Associations: `associate_file_with_component`, `tag_item`,
/// `CONTEXT_OF`/`DECISION_ON` linking.
pub mod associate;
/// Long-running graph analytics: PageRank, Louvain, k-core, SCC/WCC.
pub mod analytics;
/// Bulk deletes by type, tag, branch, or repository.
pub mod bulk_delete;
/// Pure reads against the engine's catalog.
pub mod introspection;
/// Traversals and scoped/date-ranged reads.
pub mod query;
/// Entity upserts (create-or-update, `MERGE` semantics).
pub mod upsert;
/// ID-prefix and scope validation helpers.
pub mod validate;
