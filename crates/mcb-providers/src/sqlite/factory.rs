use std::sync::Arc;

use mcb_domain::ports::{GatewayFactory, Gateways, StoreClient};

use super::gateways::{
    SqliteComponentGateway, SqliteContextGateway, SqliteDecisionGateway, SqliteFileGateway,
    SqliteIntrospectionGateway, SqliteMetadataGateway, SqliteRepositoryGateway, SqliteRuleGateway,
    SqliteTagGateway,
};

/// The concrete [`GatewayFactory`] wiring every SQLite-backed gateway onto a
/// [`StoreClient`]. This is the one place `mcb-providers` hands a fully
/// assembled [`Gateways`] bundle to the Service Façade, keeping
/// `mcb-application` free of any direct dependency on this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteGatewayFactory;

impl GatewayFactory for SqliteGatewayFactory {
    fn gateways(&self, store: Arc<dyn StoreClient>) -> Gateways {
        Gateways {
            repositories: Arc::new(SqliteRepositoryGateway::new(Arc::clone(&store))),
            metadata: Arc::new(SqliteMetadataGateway::new(Arc::clone(&store))),
            contexts: Arc::new(SqliteContextGateway::new(Arc::clone(&store))),
            components: Arc::new(SqliteComponentGateway::new(Arc::clone(&store))),
            decisions: Arc::new(SqliteDecisionGateway::new(Arc::clone(&store))),
            rules: Arc::new(SqliteRuleGateway::new(Arc::clone(&store))),
            files: Arc::new(SqliteFileGateway::new(Arc::clone(&store))),
            tags: Arc::new(SqliteTagGateway::new(Arc::clone(&store))),
            introspection: Arc::new(SqliteIntrospectionGateway::new(store)),
        }
    }
}
