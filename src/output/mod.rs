//! Result shaping (verb)
//!
//! Ordering and pagination of the aggregated result frame. Both operate on
//! display-name columns, after aggregation has renamed everything.

mod order;
mod paginate;

pub use order::order_frame;
pub use paginate::paginate;
