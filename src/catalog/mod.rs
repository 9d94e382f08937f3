//! Catalog types (nouns)
//!
//! The catalog is the static registry behind a view: the dimensions and
//! metrics it exposes, and how each one binds to the underlying frame
//! (source column, and for metrics an aggregation function). All column
//! resolution goes through the catalog; a missing binding is an error,
//! never a fallback to a raw column name.

mod dimension;
mod metric;
mod registry;
mod types;

pub use dimension::Dimension;
pub use metric::Metric;
pub use registry::{Catalog, CatalogError, DimensionBinding, MetricBinding};
pub use types::{
    Aggregation, ParseAggregationError, ParseSemanticTypeError, SemanticType,
};
