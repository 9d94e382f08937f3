//! Query description

use crate::query::DataQuery;

/// Render a one-line, human-readable summary of a query
///
/// Clause order is fixed: SELECT, DIMENSIONS, METRICS, FILTERS, ORDER BY,
/// LIMIT, OFFSET. The string goes into trace requests and logs only; it
/// never feeds back into evaluation. Note the asymmetry with pagination:
/// `OFFSET 0` is rendered when the caller supplied it, even though a zero
/// offset drops nothing.
pub fn describe_query(query: &DataQuery) -> String {
    let mut parts = vec!["SELECT".to_string()];

    if !query.dimensions.is_empty() {
        let names: Vec<&str> = query.dimensions.iter().map(|d| d.name.as_str()).collect();
        parts.push(format!("DIMENSIONS {}", names.join(", ")));
    }
    if !query.metrics.is_empty() {
        let names: Vec<&str> = query.metrics.iter().map(|m| m.name.as_str()).collect();
        parts.push(format!("METRICS {}", names.join(", ")));
    }
    if let Some(filters) = &query.filters {
        if !filters.is_empty() {
            parts.push(format!("FILTERS ({} applied)", filters.len()));
        }
    }
    if let Some(order) = &query.order {
        let rendered: Vec<String> = order
            .iter()
            .map(|t| format!("{} {}", t.element.name(), t.direction))
            .collect();
        if !rendered.is_empty() {
            parts.push(format!("ORDER BY {}", rendered.join(", ")));
        }
    }
    if let Some(limit) = query.limit {
        parts.push(format!("LIMIT {}", limit));
    }
    if let Some(offset) = query.offset {
        parts.push(format!("OFFSET {}", offset));
    }

    parts.join(" ")
}
