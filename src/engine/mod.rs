//! Engine facade (verb)
//!
//! `FrameView` is the queryable unit: a catalog plus its backing frame,
//! exposing `get_dataframe`, `get_row_count`, and `get_values`.
//! `SemanticLayer` owns named views and is what a host hands requests to.

mod describe;
mod error;
mod layer;
mod view;

pub use describe::describe_query;
pub use error::QueryError;
pub use layer::SemanticLayer;
pub use view::{FrameView, REQUEST_KIND};
