//! Pure reads against the engine's catalog:
//! thin passthroughs to [`IntrospectionGateway`](mcb_domain::ports::IntrospectionGateway).

use mcb_domain::error::Result;
use mcb_domain::ports::Gateways;

use crate::results::ListResult;

/// Node labels the Schema Installer has created.
pub async fn labels(gateways: &Gateways) -> Result<ListResult> {
    Ok(ListResult::Strings(gateways.introspection.labels().await?))
}

/// Count of nodes carrying `label`, optionally scoped to
/// `(repository, branch)`.
pub async fn count(
    gateways: &Gateways,
    label: &str,
    repository: Option<&str>,
    branch: Option<&str>,
) -> Result<i64> {
    gateways.introspection.count(label, repository, branch).await
}

/// Declared property names for `label`.
pub async fn properties(gateways: &Gateways, label: &str) -> Result<ListResult> {
    Ok(ListResult::Strings(
        gateways.introspection.properties(label).await?,
    ))
}

/// Installed index names.
pub async fn indexes(gateways: &Gateways) -> Result<ListResult> {
    Ok(ListResult::Strings(gateways.introspection.indexes().await?))
}
