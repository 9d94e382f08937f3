//! Top-N group limiting (verb)
//!
//! Restricts a frame to the rows belonging to the highest- or
//! lowest-ranked distinct combinations of a set of dimensions. This is a
//! row filter, not an aggregation: rows of surviving groups pass through
//! untouched.

mod error;
mod limit;

pub use error::GroupLimitError;
pub use limit::{limit_groups, validate};
