//! Result types

use crate::frame::Frame;

/// An auditable description of a logical query that was executed
///
/// Trace-only: the engine never consults these when computing results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticRequest {
    /// The kind of engine that answered (e.g. `frame`)
    pub kind: String,
    /// Human-readable summary of the equivalent query
    pub description: String,
}

impl SemanticRequest {
    pub fn new(kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
        }
    }
}

/// The payload of a semantic result
#[derive(Debug, Clone, PartialEq)]
pub enum ResultSet {
    /// A result table
    Frame(Frame),
    /// A scalar row count
    Count(usize),
}

impl ResultSet {
    pub fn as_frame(&self) -> Option<&Frame> {
        match self {
            ResultSet::Frame(f) => Some(f),
            ResultSet::Count(_) => None,
        }
    }

    pub fn as_count(&self) -> Option<usize> {
        match self {
            ResultSet::Count(n) => Some(*n),
            ResultSet::Frame(_) => None,
        }
    }
}

/// A computed result plus the trace of requests that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticResult {
    pub requests: Vec<SemanticRequest>,
    pub results: ResultSet,
}

impl SemanticResult {
    pub fn new(requests: Vec<SemanticRequest>, results: ResultSet) -> Self {
        Self { requests, results }
    }

    /// An empty result with no trace entries
    pub fn empty() -> Self {
        Self {
            requests: Vec::new(),
            results: ResultSet::Frame(Frame::empty()),
        }
    }
}
