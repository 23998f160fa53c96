//! SQLite implementations of the nine Repository Gateway traits.

mod component;
mod context;
mod decision;
mod file;
mod introspection;
mod metadata;
mod repository;
mod rule;
mod tag;

pub use component::SqliteComponentGateway;
pub use context::SqliteContextGateway;
pub use decision::SqliteDecisionGateway;
pub use file::SqliteFileGateway;
pub use introspection::SqliteIntrospectionGateway;
pub use metadata::SqliteMetadataGateway;
pub use repository::SqliteRepositoryGateway;
pub use rule::SqliteRuleGateway;
pub use tag::SqliteTagGateway;
