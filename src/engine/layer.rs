//! The view registry

use std::path::Path;

use chrono::NaiveDate;

use crate::catalog::{Catalog, Dimension, Metric, SemanticType};
use crate::frame::{Frame, Value};
use crate::parser::{self, ParseError, Schema, ViewDef};

use super::error::QueryError;
use super::view::FrameView;

/// A set of named semantic views over in-memory data
///
/// This is the object a host hands requests to: look a view up by name,
/// then query it. Unknown names are an error, not a silent empty result.
#[derive(Debug, Default)]
pub struct SemanticLayer {
    views: Vec<FrameView>,
}

impl SemanticLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a layer from a YAML schema file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        Self::from_schema(parser::parse_file(path)?)
    }

    /// Build a layer from parsed view definitions
    pub fn from_schema(schema: Schema) -> Result<Self, ParseError> {
        let mut layer = Self::new();
        for def in &schema.views {
            layer.views.push(build_view(def)?);
        }
        Ok(layer)
    }

    /// Register an already-built view
    pub fn add_view(&mut self, view: FrameView) {
        self.views.push(view);
    }

    /// All registered views
    pub fn views(&self) -> impl Iterator<Item = &FrameView> {
        self.views.iter()
    }

    /// Get a view by name
    pub fn view(&self, name: &str) -> Result<&FrameView, QueryError> {
        self.views
            .iter()
            .find(|v| v.name() == name)
            .ok_or_else(|| QueryError::UnknownView(name.to_string()))
    }
}

/// Turn one view definition into a runtime view
fn build_view(def: &ViewDef) -> Result<FrameView, ParseError> {
    let mut catalog = Catalog::new();
    for dim in &def.dimensions {
        catalog.add_dimension(
            Dimension::new(
                dim.id.clone(),
                dim.name.clone(),
                dim.semantic_type,
                dim.description.clone(),
            ),
            dim.column.clone(),
        );
    }
    for metric in &def.metrics {
        let expression = metric
            .expression
            .clone()
            .unwrap_or_else(|| metric.aggregation.expression(&metric.column));
        catalog.add_metric(
            Metric::new(
                metric.id.clone(),
                metric.name.clone(),
                metric.semantic_type,
                expression,
                metric.description.clone(),
            ),
            metric.column.clone(),
            metric.aggregation,
        );
    }

    let columns: Vec<String> = def.columns.iter().map(|c| c.name.clone()).collect();
    let mut rows = Vec::with_capacity(def.rows.len());
    for (i, row) in def.rows.iter().enumerate() {
        let mut cells = Vec::with_capacity(row.len());
        for (cell, column) in row.iter().zip(&def.columns) {
            let value = cell_value(cell, column.semantic_type).map_err(|reason| {
                ParseError::Schema {
                    message: format!(
                        "view '{}': row {}, column '{}': {}",
                        def.name, i, column.name, reason
                    ),
                }
            })?;
            cells.push(value);
        }
        rows.push(cells);
    }

    let data = Frame::from_rows(columns, rows)
        .map_err(|e| ParseError::Schema {
            message: format!("view '{}': {}", def.name, e),
        })?;

    let view = FrameView::new(def.name.clone(), catalog, data).map_err(|e| ParseError::Schema {
        message: format!("view '{}': {}", def.name, e),
    })?;
    Ok(match &def.description {
        Some(description) => view.with_description(description.clone()),
        None => view,
    })
}

/// Convert one YAML scalar to a typed cell
fn cell_value(cell: &serde_yaml::Value, semantic_type: SemanticType) -> Result<Value, String> {
    use serde_yaml::Value as Yaml;

    match (cell, semantic_type) {
        (Yaml::Null, _) => Ok(Value::Null),
        (Yaml::Bool(b), SemanticType::Boolean) => Ok(Value::Bool(*b)),
        (Yaml::Number(n), SemanticType::Integer) => n
            .as_i64()
            .map(Value::Int)
            .ok_or_else(|| format!("'{}' is not an integer", n)),
        (Yaml::Number(n), SemanticType::Decimal) => n
            .as_f64()
            .map(Value::Float)
            .ok_or_else(|| format!("'{}' is not a number", n)),
        (Yaml::String(s), SemanticType::String) => Ok(Value::Str(s.clone())),
        (Yaml::String(s), SemanticType::Date) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Value::Date)
            .map_err(|_| format!("'{}' is not a yyyy-mm-dd date", s)),
        (cell, semantic_type) => Err(format!(
            "value {:?} does not fit declared type '{}'",
            cell, semantic_type
        )),
    }
}
