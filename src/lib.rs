//! semframe - Evaluate semantic-layer queries against in-memory data frames
//!
//! This library provides:
//! - Catalog types (Dimension, Metric, SemanticType, Aggregation)
//! - An in-memory relational table (Frame, Value)
//! - Query request types (DataQuery, Filter, OrderTuple, GroupLimit)
//! - A full evaluation pipeline: filtering, top-N group limiting,
//!   grouping/aggregation, ordering, pagination
//! - A view facade returning traced results (SemanticResult)
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `catalog/` - semantic entities and their column/aggregation bindings
//! - `frame/` - the in-memory table (Frame, Value)
//! - `query/` - request and result types (DataQuery, Filter, SemanticResult)
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML → Schema (view definitions with inline data)
//! - `predicate/` - Frame + filters → filtered Frame
//! - `group_limit/` - Frame + GroupLimit → Frame restricted to top-N groups
//! - `aggregate/` - Frame + dimensions + metrics → aggregated Frame
//! - `output/` - ordering and pagination of the aggregated Frame
//! - `engine/` - FrameView facade and the SemanticLayer view registry
//!
//! # Example
//!
//! ```ignore
//! use semframe::{SemanticLayer, DataQuery};
//!
//! let layer = SemanticLayer::from_file("schema.yaml")?;
//! let view = layer.view("sales")?;
//! let query = DataQuery {
//!     dimensions: vec![view.dimension("sales.region").unwrap().clone()],
//!     metrics: vec![view.metric("sales.total_revenue").unwrap().clone()],
//!     ..Default::default()
//! };
//! let result = view.get_dataframe(&query)?;
//! ```

pub mod catalog;
pub mod frame;
pub mod query;
pub mod parser;
pub mod predicate;
pub mod group_limit;
pub mod aggregate;
pub mod output;
pub mod engine;

// Re-export commonly used types
pub use catalog::{Aggregation, Catalog, CatalogError, Dimension, Metric, SemanticType};
pub use engine::{describe_query, FrameView, QueryError, SemanticLayer};
pub use frame::{Frame, Value};
pub use group_limit::GroupLimitError;
pub use parser::{parse_file, parse_str, ParseError, Schema};
pub use query::{
    DataQuery, Feature, Filter, FilterValue, GroupLimit, Operator, OrderDirection,
    OrderElement, OrderTuple, Predicate, ResultSet, SemanticRequest, SemanticResult,
};
