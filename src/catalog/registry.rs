//! The catalog - static registry binding entities to frame columns

use std::fmt;

use super::dimension::Dimension;
use super::metric::Metric;
use super::types::Aggregation;

/// Binds a dimension to the frame column it reads from
#[derive(Debug, Clone)]
pub struct DimensionBinding {
    pub dimension: Dimension,
    pub source_column: String,
}

/// Binds a metric to the frame column it aggregates and the function applied
#[derive(Debug, Clone)]
pub struct MetricBinding {
    pub metric: Metric,
    pub source_column: String,
    pub aggregation: Aggregation,
}

/// Errors raised when a referenced entity has no catalog binding
///
/// These indicate a programming or configuration error in the caller, not a
/// transient condition; they surface immediately and are never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    UnknownDimension(String),
    UnknownMetric(String),
    /// A binding resolved, but its source column is absent from the frame
    MissingColumn(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownDimension(id) => {
                write!(f, "Dimension '{}' has no catalog binding", id)
            }
            CatalogError::UnknownMetric(id) => {
                write!(f, "Metric '{}' has no catalog binding", id)
            }
            CatalogError::MissingColumn(name) => {
                write!(f, "Source column '{}' is not present in the frame", name)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// The static registry of dimensions and metrics a view exposes
///
/// Every component of the evaluation pipeline resolves entity ids through
/// this registry. Lookup order follows registration order, which also fixes
/// the order `dimensions()`/`metrics()` list entities in.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dimensions: Vec<DimensionBinding>,
    metrics: Vec<MetricBinding>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dimension bound to `source_column`
    pub fn add_dimension(&mut self, dimension: Dimension, source_column: impl Into<String>) {
        self.dimensions.push(DimensionBinding {
            dimension,
            source_column: source_column.into(),
        });
    }

    /// Register a metric bound to `source_column` aggregated with `aggregation`
    pub fn add_metric(
        &mut self,
        metric: Metric,
        source_column: impl Into<String>,
        aggregation: Aggregation,
    ) {
        self.metrics.push(MetricBinding {
            metric,
            source_column: source_column.into(),
            aggregation,
        });
    }

    /// All registered dimensions, in registration order
    pub fn dimensions(&self) -> impl Iterator<Item = &Dimension> {
        self.dimensions.iter().map(|b| &b.dimension)
    }

    /// All registered metrics, in registration order
    pub fn metrics(&self) -> impl Iterator<Item = &Metric> {
        self.metrics.iter().map(|b| &b.metric)
    }

    /// Get a dimension by id
    pub fn dimension(&self, id: &str) -> Option<&Dimension> {
        self.dimensions
            .iter()
            .map(|b| &b.dimension)
            .find(|d| d.id == id)
    }

    /// Get a metric by id
    pub fn metric(&self, id: &str) -> Option<&Metric> {
        self.metrics.iter().map(|b| &b.metric).find(|m| m.id == id)
    }

    /// Resolve a dimension to its source column
    pub fn dimension_column(&self, dimension: &Dimension) -> Result<&str, CatalogError> {
        self.dimensions
            .iter()
            .find(|b| b.dimension == *dimension)
            .map(|b| b.source_column.as_str())
            .ok_or_else(|| CatalogError::UnknownDimension(dimension.id.clone()))
    }

    /// Resolve a metric to its source column and aggregation function
    pub fn metric_binding(&self, metric: &Metric) -> Result<&MetricBinding, CatalogError> {
        self.metrics
            .iter()
            .find(|b| b.metric == *metric)
            .ok_or_else(|| CatalogError::UnknownMetric(metric.id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SemanticType;

    fn region() -> Dimension {
        Dimension::new("sales.region", "region", SemanticType::String, "")
    }

    fn total_revenue() -> Metric {
        Metric::new(
            "sales.total_revenue",
            "total_revenue",
            SemanticType::Decimal,
            "SUM(revenue)",
            "",
        )
    }

    #[test]
    fn test_dimension_resolution() {
        let mut catalog = Catalog::new();
        catalog.add_dimension(region(), "region");

        assert_eq!(catalog.dimension_column(&region()).unwrap(), "region");
    }

    #[test]
    fn test_unknown_dimension_fails() {
        let catalog = Catalog::new();
        let err = catalog.dimension_column(&region()).unwrap_err();
        assert_eq!(err, CatalogError::UnknownDimension("sales.region".into()));
    }

    #[test]
    fn test_metric_resolution() {
        let mut catalog = Catalog::new();
        catalog.add_metric(total_revenue(), "revenue", Aggregation::Sum);

        let binding = catalog.metric_binding(&total_revenue()).unwrap();
        assert_eq!(binding.source_column, "revenue");
        assert_eq!(binding.aggregation, Aggregation::Sum);
    }

    #[test]
    fn test_unknown_metric_fails() {
        let catalog = Catalog::new();
        let err = catalog.metric_binding(&total_revenue()).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownMetric("sales.total_revenue".into())
        );
    }

    #[test]
    fn test_two_dimensions_may_share_a_source_column() {
        let mut catalog = Catalog::new();
        let by_name = Dimension::new("sales.region", "region", SemanticType::String, "");
        let by_code = Dimension::new("sales.region_code", "region_code", SemanticType::String, "");
        catalog.add_dimension(by_name.clone(), "region");
        catalog.add_dimension(by_code.clone(), "region");

        assert_eq!(catalog.dimension_column(&by_name).unwrap(), "region");
        assert_eq!(catalog.dimension_column(&by_code).unwrap(), "region");
        assert_ne!(by_name, by_code);
    }
}
