//! # Application Layer
//!
//! The Operations Layer and Service Façade: the stateless functions that
//! implement each domain operation, and the per-request entry point the
//! delivery layer (`mcb-server`) calls into.
//!
//! No transport concerns live here: operations take a [`Gateways`](mcb_domain::ports::Gateways)
//! bundle, a `(repository, branch)` scope, typed arguments, and return a
//! typed result. The façade's only job is resolving the `StoreClient` for a
//! request's project root and constructing the gateways before delegating.

/// Typed result envelopes returned by the operations layer (design note:
/// "a small sum type per response category avoids a single untyped
/// envelope").
pub mod results;

/// Stateless operation functions, one module per category.
pub mod operations;

/// The per-request Service Façade.
pub mod facade;

pub use facade::ServiceFacade;
pub use results::{AnalyticsResult, AssociationResult, BulkResult, EntityResult, ListResult};
