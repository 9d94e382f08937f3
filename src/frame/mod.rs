//! In-memory relational table (nouns)
//!
//! `Frame` is the table every pipeline stage consumes and produces, and
//! `Value` is its typed cell. Stages never mutate a shared frame; each one
//! returns a new `Frame`, so a view's canonical data stays untouched for
//! the lifetime of the engine.

mod frame;
mod value;

pub use frame::{Frame, FrameError};
pub use value::Value;
