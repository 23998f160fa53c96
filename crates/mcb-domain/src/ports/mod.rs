//!
//! **Documentation**: [docs/modules/domain.md](../../../../docs/modules/domain.md#ports)
//!
//! Port traits the application layer programs against. Concrete
//! implementations live in `mcb-providers` (Store Client, gateways) and
//! `mcb-infrastructure` (Client Registry, progress channels) — kept out of
//! `mcb-domain` so the domain stays a pure, dependency-free core.

mod gateways;
mod logging;
mod progress;
mod registry;
mod store_client;

pub use gateways::{
    ComponentGateway, ContextGateway, DecisionGateway, FileGateway, GatewayFactory, Gateways,
    IntrospectionGateway, MetadataGateway, RepositoryGateway, RuleGateway, TagGateway,
};
pub use logging::{LogLevel, NoopOperationLogger, OperationLogger};
pub use progress::{NoopProgressChannel, ProgressChannel, ProgressEvent};
pub use registry::ClientRegistry;
pub use store_client::{Params, QueryValue, Row, StoreClient};
