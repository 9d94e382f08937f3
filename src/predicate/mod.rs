//! Predicate evaluation (verb)
//!
//! Applies a filter set to a frame as a conjunction, producing a new
//! filtered frame. Only `Filter::Where` shapes are evaluated; the other
//! shapes are identity transforms by construction.

mod apply;

pub use apply::apply_filters;
