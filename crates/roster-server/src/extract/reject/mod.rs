//! Drop-in replacements for the axum extractors with richer rejections.

pub mod enhanced_query;
pub mod validated_query;

pub use self::enhanced_query::Query;
pub use self::validated_query::ValidateQuery;
