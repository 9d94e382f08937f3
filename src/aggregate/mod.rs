//! Grouping and aggregation (verb)
//!
//! Turns a filtered frame into the requested result shape: grouped
//! dimension/metric rollups, a distinct dimension projection, or a
//! single-row whole-table aggregation, depending on which of the two
//! request lists is non-empty.

mod rollup;

pub use rollup::{aggregate, aggregate_column};
