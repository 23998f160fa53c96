//! Embedded graph-store engine for the memory bank kernel.
//!
//! Backs the domain's [`mcb_domain::ports::StoreClient`] contract with an
//! SQLite-based property graph (see `DESIGN.md` for the substitution
//! rationale) and supplies the concrete [`mcb_domain::ports::GatewayFactory`]
//! that wires a [`mcb_domain::ports::Gateways`] bundle onto that store.

pub mod sqlite;

pub use sqlite::factory::SqliteGatewayFactory;
pub use sqlite::store_client::SqliteStoreClient;
