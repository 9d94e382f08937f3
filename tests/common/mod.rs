//! Shared test utilities for integration tests

#![allow(dead_code)]

use semframe::{Dimension, FrameView, Metric, SemanticLayer};

/// Load the sales fixture from the tests/test_data directory
pub fn load_layer() -> SemanticLayer {
    SemanticLayer::from_file("tests/test_data/sales.yaml")
        .unwrap_or_else(|e| panic!("Failed to load sales fixture: {}", e))
}

/// Get a dimension entity from a view by id
pub fn dimension(view: &FrameView, id: &str) -> Dimension {
    view.dimension(id)
        .unwrap_or_else(|| panic!("Dimension '{}' not in catalog", id))
        .clone()
}

/// Get a metric entity from a view by id
pub fn metric(view: &FrameView, id: &str) -> Metric {
    view.metric(id)
        .unwrap_or_else(|| panic!("Metric '{}' not in catalog", id))
        .clone()
}

// Revenue by region in the fixture:
//   East 2300, South 2090, West 1500, North 1090
pub const REGIONS_BY_REVENUE_DESC: [&str; 4] = ["East", "South", "West", "North"];
