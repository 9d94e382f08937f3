//! Aggregation over frames

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::{Aggregation, Catalog, CatalogError, Dimension, Metric};
use crate::frame::{Frame, Value};

/// Aggregate a frame by the requested dimensions and metrics
///
/// Exactly one of three shapes applies; the caller guarantees at least one
/// list is non-empty:
/// - dimensions and metrics: group by the dimension source columns and
///   aggregate each metric within each group
/// - dimensions only: distinct projection of the dimension columns
/// - metrics only: one row aggregating each metric over the whole frame
///
/// Result columns carry display names. Groups come out sorted by key;
/// distinct projections keep first-seen row order.
pub fn aggregate(
    frame: &Frame,
    dimensions: &[Dimension],
    metrics: &[Metric],
    catalog: &Catalog,
) -> Result<Frame, CatalogError> {
    if !dimensions.is_empty() && !metrics.is_empty() {
        grouped(frame, dimensions, metrics, catalog)
    } else if !dimensions.is_empty() {
        distinct_projection(frame, dimensions, catalog)
    } else {
        whole_frame(frame, metrics, catalog)
    }
}

fn grouped(
    frame: &Frame,
    dimensions: &[Dimension],
    metrics: &[Metric],
    catalog: &Catalog,
) -> Result<Frame, CatalogError> {
    let key_cols = dimension_indices(frame, dimensions, catalog)?;

    let mut metric_cols = Vec::with_capacity(metrics.len());
    for metric in metrics {
        let binding = catalog.metric_binding(metric)?;
        let col = frame
            .column_index(&binding.source_column)
            .ok_or_else(|| CatalogError::MissingColumn(binding.source_column.clone()))?;
        metric_cols.push((col, binding.aggregation));
    }

    let mut columns: Vec<String> = dimensions.iter().map(|d| d.name.clone()).collect();
    columns.extend(metrics.iter().map(|m| m.name.clone()));

    let rows = group_rows(frame, &key_cols)
        .into_iter()
        .map(|(key, row_indices)| {
            let mut row = key;
            for &(col, aggregation) in &metric_cols {
                let values = row_indices.iter().map(|&i| &frame.rows()[i][col]);
                row.push(aggregate_column(aggregation, values));
            }
            row
        })
        .collect();

    Ok(Frame::from_parts(columns, rows))
}

fn distinct_projection(
    frame: &Frame,
    dimensions: &[Dimension],
    catalog: &Catalog,
) -> Result<Frame, CatalogError> {
    let key_cols = dimension_indices(frame, dimensions, catalog)?;
    let mut result = frame.project(&key_cols).distinct();
    for dimension in dimensions {
        let source = catalog.dimension_column(dimension)?;
        if source != dimension.name {
            result.rename_column(source, &dimension.name);
        }
    }
    Ok(result)
}

fn whole_frame(
    frame: &Frame,
    metrics: &[Metric],
    catalog: &Catalog,
) -> Result<Frame, CatalogError> {
    let mut columns = Vec::with_capacity(metrics.len());
    let mut row = Vec::with_capacity(metrics.len());
    for metric in metrics {
        let binding = catalog.metric_binding(metric)?;
        let col = frame
            .column_index(&binding.source_column)
            .ok_or_else(|| CatalogError::MissingColumn(binding.source_column.clone()))?;
        columns.push(metric.name.clone());
        row.push(aggregate_column(binding.aggregation, frame.column_values(col)));
    }
    Ok(Frame::from_parts(columns, vec![row]))
}

/// Resolve dimensions to column indices of `frame`
fn dimension_indices(
    frame: &Frame,
    dimensions: &[Dimension],
    catalog: &Catalog,
) -> Result<Vec<usize>, CatalogError> {
    dimensions
        .iter()
        .map(|d| {
            let source = catalog.dimension_column(d)?;
            frame
                .column_index(source)
                .ok_or_else(|| CatalogError::MissingColumn(source.to_string()))
        })
        .collect()
}

/// Group row indices by key tuple; iteration order is sorted by key
fn group_rows(frame: &Frame, key_cols: &[usize]) -> BTreeMap<Vec<Value>, Vec<usize>> {
    let mut groups: BTreeMap<Vec<Value>, Vec<usize>> = BTreeMap::new();
    for (i, row) in frame.rows().iter().enumerate() {
        let key: Vec<Value> = key_cols.iter().map(|&c| row[c].clone()).collect();
        groups.entry(key).or_default().push(i);
    }
    groups
}

/// Apply one aggregation function over a column's values
///
/// Nulls are skipped by every function. Sum over integers stays integral
/// and an all-null sum is integer zero; Avg is a float, Null over an empty
/// population. Min/Max use the value total order.
pub fn aggregate_column<'a, I>(aggregation: Aggregation, values: I) -> Value
where
    I: Iterator<Item = &'a Value>,
{
    match aggregation {
        Aggregation::Count => {
            Value::Int(values.filter(|v| !v.is_null()).count() as i64)
        }
        Aggregation::CountDistinct => {
            let distinct: BTreeSet<&Value> = values.filter(|v| !v.is_null()).collect();
            Value::Int(distinct.len() as i64)
        }
        Aggregation::Min => values
            .filter(|v| !v.is_null())
            .min_by(|a, b| a.total_cmp(b))
            .cloned()
            .unwrap_or(Value::Null),
        Aggregation::Max => values
            .filter(|v| !v.is_null())
            .max_by(|a, b| a.total_cmp(b))
            .cloned()
            .unwrap_or(Value::Null),
        Aggregation::Sum => sum(values),
        Aggregation::Avg => avg(values),
    }
}

fn sum<'a, I>(values: I) -> Value
where
    I: Iterator<Item = &'a Value>,
{
    let mut int_sum: i64 = 0;
    let mut float_sum: f64 = 0.0;
    let mut saw_float = false;
    for value in values {
        match value {
            Value::Int(i) => int_sum += i,
            Value::Float(f) => {
                saw_float = true;
                float_sum += f;
            }
            _ => {}
        }
    }
    if saw_float {
        Value::Float(float_sum + int_sum as f64)
    } else {
        Value::Int(int_sum)
    }
}

fn avg<'a, I>(values: I) -> Value
where
    I: Iterator<Item = &'a Value>,
{
    let mut total: f64 = 0.0;
    let mut count: usize = 0;
    for value in values {
        if let Some(f) = value.as_f64() {
            total += f;
            count += 1;
        }
    }
    if count == 0 {
        Value::Null
    } else {
        Value::Float(total / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SemanticType;

    fn sales_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_dimension(
            Dimension::new("sales.region", "region", SemanticType::String, ""),
            "region",
        );
        catalog.add_dimension(
            Dimension::new("sales.category", "product_category", SemanticType::String, ""),
            "category",
        );
        catalog.add_metric(
            Metric::new(
                "sales.total_revenue",
                "total_revenue",
                SemanticType::Decimal,
                "SUM(revenue)",
                "",
            ),
            "revenue",
            Aggregation::Sum,
        );
        catalog.add_metric(
            Metric::new(
                "sales.average_price",
                "average_price",
                SemanticType::Decimal,
                "AVG(price)",
                "",
            ),
            "price",
            Aggregation::Avg,
        );
        catalog
    }

    fn sales_frame() -> Frame {
        Frame::from_rows(
            vec!["region".into(), "category".into(), "revenue".into(), "price".into()],
            vec![
                vec![Value::Str("West".into()), Value::Str("A".into()), Value::Float(100.0), Value::Float(10.0)],
                vec![Value::Str("East".into()), Value::Str("A".into()), Value::Float(250.0), Value::Float(25.0)],
                vec![Value::Str("East".into()), Value::Str("B".into()), Value::Float(50.0), Value::Float(5.0)],
                vec![Value::Str("East".into()), Value::Str("A".into()), Value::Float(200.0), Value::Float(15.0)],
            ],
        )
        .unwrap()
    }

    fn dim(catalog: &Catalog, id: &str) -> Dimension {
        catalog.dimension(id).unwrap().clone()
    }

    fn metric(catalog: &Catalog, id: &str) -> Metric {
        catalog.metric(id).unwrap().clone()
    }

    #[test]
    fn test_grouped_aggregation() {
        let catalog = sales_catalog();
        let out = aggregate(
            &sales_frame(),
            &[dim(&catalog, "sales.region")],
            &[metric(&catalog, "sales.total_revenue")],
            &catalog,
        )
        .unwrap();

        assert_eq!(out.columns(), ["region", "total_revenue"]);
        assert_eq!(out.len(), 2);
        // Groups come out sorted by key
        assert_eq!(out.value(0, 0), Some(&Value::Str("East".into())));
        assert_eq!(out.value(0, 1), Some(&Value::Float(500.0)));
        assert_eq!(out.value(1, 0), Some(&Value::Str("West".into())));
        assert_eq!(out.value(1, 1), Some(&Value::Float(100.0)));
    }

    #[test]
    fn test_grouped_multiple_metrics_keep_request_order() {
        let catalog = sales_catalog();
        let out = aggregate(
            &sales_frame(),
            &[dim(&catalog, "sales.region")],
            &[
                metric(&catalog, "sales.average_price"),
                metric(&catalog, "sales.total_revenue"),
            ],
            &catalog,
        )
        .unwrap();

        assert_eq!(out.columns(), ["region", "average_price", "total_revenue"]);
        assert_eq!(out.value(0, 1), Some(&Value::Float(15.0)));
    }

    #[test]
    fn test_dimensions_only_distinct_projection() {
        let catalog = sales_catalog();
        let out = aggregate(
            &sales_frame(),
            &[dim(&catalog, "sales.region"), dim(&catalog, "sales.category")],
            &[],
            &catalog,
        )
        .unwrap();

        // First-seen order, renamed to display names
        assert_eq!(out.columns(), ["region", "product_category"]);
        assert_eq!(out.len(), 3);
        assert_eq!(out.value(0, 0), Some(&Value::Str("West".into())));
    }

    #[test]
    fn test_metrics_only_single_row() {
        let catalog = sales_catalog();
        let out = aggregate(
            &sales_frame(),
            &[],
            &[
                metric(&catalog, "sales.total_revenue"),
                metric(&catalog, "sales.average_price"),
            ],
            &catalog,
        )
        .unwrap();

        assert_eq!(out.columns(), ["total_revenue", "average_price"]);
        assert_eq!(out.len(), 1);
        assert_eq!(out.value(0, 0), Some(&Value::Float(600.0)));
        assert_eq!(out.value(0, 1), Some(&Value::Float(13.75)));
    }

    #[test]
    fn test_aggregate_column_functions() {
        let values = vec![
            Value::Int(3),
            Value::Null,
            Value::Int(5),
            Value::Int(3),
        ];
        assert_eq!(aggregate_column(Aggregation::Count, values.iter()), Value::Int(3));
        assert_eq!(
            aggregate_column(Aggregation::CountDistinct, values.iter()),
            Value::Int(2)
        );
        assert_eq!(aggregate_column(Aggregation::Sum, values.iter()), Value::Int(11));
        assert_eq!(aggregate_column(Aggregation::Min, values.iter()), Value::Int(3));
        assert_eq!(aggregate_column(Aggregation::Max, values.iter()), Value::Int(5));
    }

    #[test]
    fn test_sum_promotes_to_float_when_mixed() {
        let values = vec![Value::Int(1), Value::Float(0.5)];
        assert_eq!(aggregate_column(Aggregation::Sum, values.iter()), Value::Float(1.5));
    }

    #[test]
    fn test_avg_of_empty_population_is_null() {
        let values = vec![Value::Null, Value::Null];
        assert_eq!(aggregate_column(Aggregation::Avg, values.iter()), Value::Null);
    }
}
