mod operation_kind;
#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;

pub use operation_kind::OperationKind;
pub use schema::Schema;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::SchemaBuildError;

#[cfg(test)]
mod tests;
