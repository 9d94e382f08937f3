//! Integration tests for the view registry and catalog listing

mod common;

use common::load_layer;
use semframe::{Feature, QueryError};

#[test]
fn test_view_lookup() {
    let layer = load_layer();
    let view = layer.view("sales").unwrap();
    assert_eq!(view.name(), "sales");
    assert_eq!(view.uid(), "frame.sales");
    assert_eq!(
        view.description(),
        Some("In-memory sales figures by region, category, and day.")
    );
}

#[test]
fn test_unknown_view_is_an_error() {
    let layer = load_layer();
    let err = layer.view("orders").unwrap_err();
    assert!(matches!(err, QueryError::UnknownView(ref name) if name == "orders"));
    assert_eq!(err.to_string(), "Semantic view 'orders' does not exist");
}

#[test]
fn test_catalog_listing() {
    let layer = load_layer();
    let view = layer.view("sales").unwrap();

    let dimension_ids: Vec<&str> = view.dimensions().map(|d| d.id.as_str()).collect();
    assert_eq!(
        dimension_ids,
        vec!["sales.region", "sales.product_category", "sales.sale_date"]
    );

    let metric_ids: Vec<&str> = view.metrics().map(|m| m.id.as_str()).collect();
    assert_eq!(
        metric_ids,
        vec![
            "sales.total_revenue",
            "sales.total_units_sold",
            "sales.average_price"
        ]
    );

    let revenue = view.metric("sales.total_revenue").unwrap();
    assert_eq!(revenue.expression, "SUM(revenue)");
}

#[test]
fn test_group_limit_capability_is_declared() {
    let layer = load_layer();
    let view = layer.view("sales").unwrap();
    assert!(view.features().contains(&Feature::GroupLimit));
}
