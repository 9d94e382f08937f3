//! Query request and result types (nouns)
//!
//! A `DataQuery` bundles everything a caller can ask of a view: dimensions
//! to group by, metrics to aggregate, filters, ordering, pagination, and an
//! optional top-N group limit. Results come back as a `SemanticResult`
//! pairing the computed table (or row count) with trace requests describing
//! the logical query that ran.

mod filter;
mod request;
mod result;

pub use filter::{Filter, FilterValue, Operator, ParseOperatorError, Predicate};
pub use request::{
    DataQuery, Feature, GroupLimit, OrderDirection, OrderElement, OrderTuple,
    ParseOrderDirectionError,
};
pub use result::{ResultSet, SemanticRequest, SemanticResult};
