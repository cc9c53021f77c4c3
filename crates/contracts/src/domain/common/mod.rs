//! Common types and traits for all aggregates

pub mod aggregate_root;
pub mod entity_metadata;
pub mod validation;

// Re-exports
pub use aggregate_root::AggregateRoot;
pub use entity_metadata::EntityMetadata;
pub use validation::{normalize_optional, FieldError, Validate, ValidationErrors};
