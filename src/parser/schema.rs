//! Schema definition types and loading

use serde::Deserialize;
use std::path::Path;

use crate::catalog::{Aggregation, SemanticType};

use super::error::ParseError;

/// The root schema: a list of view definitions
#[derive(Debug, Deserialize)]
pub struct Schema {
    pub views: Vec<ViewDef>,
}

/// One queryable view: its catalog entries plus its backing table
#[derive(Debug, Deserialize)]
pub struct ViewDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dimensions: Vec<DimensionDef>,
    #[serde(default)]
    pub metrics: Vec<MetricDef>,
    pub columns: Vec<ColumnDef>,
    /// Inline data rows, one array per row, aligned with `columns`
    #[serde(default)]
    pub rows: Vec<Vec<serde_yaml::Value>>,
}

/// A dimension declaration
#[derive(Debug, Deserialize)]
pub struct DimensionDef {
    pub id: String,
    pub name: String,
    /// Source column in the backing table
    pub column: String,
    #[serde(rename = "type", default)]
    pub semantic_type: SemanticType,
    #[serde(default)]
    pub description: String,
}

/// A metric declaration
#[derive(Debug, Deserialize)]
pub struct MetricDef {
    pub id: String,
    pub name: String,
    /// Source column the aggregation reads
    pub column: String,
    pub aggregation: Aggregation,
    #[serde(rename = "type", default)]
    pub semantic_type: SemanticType,
    /// Display label; defaults to `<AGG>(<column>)` when omitted
    #[serde(default)]
    pub expression: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// A typed column of the backing table
#[derive(Debug, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    #[serde(rename = "type", default)]
    pub semantic_type: SemanticType,
}

impl Schema {
    /// Get a view definition by name
    pub fn view(&self, name: &str) -> Option<&ViewDef> {
        self.views.iter().find(|v| v.name == name)
    }
}

/// Load a schema from a YAML file
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Schema, ParseError> {
    let path_str = path.as_ref().display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str,
        source: e,
    })?;
    parse_str(&contents)
}

/// Parse a schema from a YAML string
pub fn parse_str(contents: &str) -> Result<Schema, ParseError> {
    let schema: Schema = serde_yaml::from_str(contents)?;
    for view in &schema.views {
        check_view(view)?;
    }
    Ok(schema)
}

/// Structural checks beyond what deserialization enforces
fn check_view(view: &ViewDef) -> Result<(), ParseError> {
    let column_names: Vec<&str> = view.columns.iter().map(|c| c.name.as_str()).collect();

    for dim in &view.dimensions {
        if !column_names.contains(&dim.column.as_str()) {
            return Err(ParseError::schema(format!(
                "view '{}': dimension '{}' references unknown column '{}'",
                view.name, dim.id, dim.column
            )));
        }
    }
    for metric in &view.metrics {
        if !column_names.contains(&metric.column.as_str()) {
            return Err(ParseError::schema(format!(
                "view '{}': metric '{}' references unknown column '{}'",
                view.name, metric.id, metric.column
            )));
        }
    }
    for (i, row) in view.rows.iter().enumerate() {
        if row.len() != view.columns.len() {
            return Err(ParseError::schema(format!(
                "view '{}': row {} has {} cells, expected {}",
                view.name,
                i,
                row.len(),
                view.columns.len()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"
views:
  - name: sales
    dimensions:
      - id: sales.region
        name: region
        column: region
        type: string
        description: The region dimension.
    metrics:
      - id: sales.total_revenue
        name: total_revenue
        column: revenue
        aggregation: sum
        type: decimal
    columns:
      - { name: region, type: string }
      - { name: revenue, type: decimal }
    rows:
      - [East, 1250.0]
      - [West, 800.0]
"#;

    #[test]
    fn test_parse_schema() {
        let schema = parse_str(SCHEMA).unwrap();
        assert_eq!(schema.views.len(), 1);

        let view = schema.view("sales").unwrap();
        assert_eq!(view.dimensions[0].id, "sales.region");
        assert_eq!(view.metrics[0].aggregation, Aggregation::Sum);
        assert_eq!(view.columns[1].semantic_type, SemanticType::Decimal);
        assert_eq!(view.rows.len(), 2);
    }

    #[test]
    fn test_dimension_with_unknown_column_fails() {
        let bad = SCHEMA.replace("column: region", "column: territory");
        let err = parse_str(&bad).unwrap_err();
        assert!(matches!(err, ParseError::Schema { .. }));
    }

    #[test]
    fn test_short_row_fails() {
        let bad = SCHEMA.replace("- [East, 1250.0]", "- [East]");
        let err = parse_str(&bad).unwrap_err();
        assert!(matches!(err, ParseError::Schema { .. }));
    }

    #[test]
    fn test_invalid_yaml_fails() {
        let err = parse_str("views: [unterminated").unwrap_err();
        assert!(matches!(err, ParseError::Yaml { .. }));
    }

    #[test]
    fn test_unknown_aggregation_fails() {
        let bad = SCHEMA.replace("aggregation: sum", "aggregation: median");
        assert!(parse_str(&bad).is_err());
    }
}
