//! The queryable view facade

use tracing::debug;

use crate::aggregate::aggregate;
use crate::catalog::{Catalog, CatalogError, Dimension, Metric};
use crate::frame::Frame;
use crate::group_limit::{limit_groups, validate};
use crate::output::{order_frame, paginate};
use crate::predicate::apply_filters;
use crate::query::{
    DataQuery, Feature, Filter, ResultSet, SemanticRequest, SemanticResult,
};

use super::describe::describe_query;
use super::error::QueryError;

/// Kind tag attached to every trace request this engine emits
pub const REQUEST_KIND: &str = "frame";

/// A semantic view: a catalog bound to an immutable in-memory frame
///
/// The view holds no per-request state; every entry point takes `&self`
/// and each pipeline stage builds a new frame, so concurrent requests
/// against the same view serialize trivially and the canonical data never
/// changes for the lifetime of the view.
#[derive(Debug, Clone)]
pub struct FrameView {
    name: String,
    description: Option<String>,
    catalog: Catalog,
    data: Frame,
}

impl FrameView {
    /// Build a view, checking that every catalog binding resolves to a
    /// column of the backing frame
    pub fn new(
        name: impl Into<String>,
        catalog: Catalog,
        data: Frame,
    ) -> Result<Self, CatalogError> {
        for dimension in catalog.dimensions() {
            let column = catalog.dimension_column(dimension)?;
            if data.column_index(column).is_none() {
                return Err(CatalogError::MissingColumn(column.to_string()));
            }
        }
        for metric in catalog.metrics() {
            let column = &catalog.metric_binding(metric)?.source_column;
            if data.column_index(column).is_none() {
                return Err(CatalogError::MissingColumn(column.clone()));
            }
        }
        Ok(Self {
            name: name.into(),
            description: None,
            catalog,
            data,
        })
    }

    /// Attach a human-readable description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Stable identifier of this view
    pub fn uid(&self) -> String {
        format!("{}.{}", REQUEST_KIND, self.name)
    }

    /// Capabilities this view supports; callers must not send a
    /// `group_limit` unless `Feature::GroupLimit` is listed
    pub fn features(&self) -> &'static [Feature] {
        &[Feature::GroupLimit]
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All dimensions this view exposes
    pub fn dimensions(&self) -> impl Iterator<Item = &Dimension> {
        self.catalog.dimensions()
    }

    /// All metrics this view exposes
    pub fn metrics(&self) -> impl Iterator<Item = &Metric> {
        self.catalog.metrics()
    }

    /// Get a dimension by id
    pub fn dimension(&self, id: &str) -> Option<&Dimension> {
        self.catalog.dimension(id)
    }

    /// Get a metric by id
    pub fn metric(&self, id: &str) -> Option<&Metric> {
        self.catalog.metric(id)
    }

    /// Distinct values of one dimension, optionally filtered
    pub fn get_values(
        &self,
        dimension: &Dimension,
        filters: Option<&[Filter]>,
    ) -> Result<SemanticResult, QueryError> {
        let source = self.catalog.dimension_column(dimension)?.to_string();
        let filtered = apply_filters(&self.data, filters, &self.catalog)?;
        let col = filtered
            .column_index(&source)
            .ok_or_else(|| CatalogError::MissingColumn(source.clone()))?;

        let mut result = filtered.project(&[col]).distinct();
        if source != dimension.name {
            result.rename_column(&source, &dimension.name);
        }

        let description = format!("SELECT DISTINCT {}", source);
        debug!(view = %self.name, query = %description, rows = result.len(), "computed distinct values");
        Ok(SemanticResult::new(
            vec![SemanticRequest::new(REQUEST_KIND, description)],
            ResultSet::Frame(result),
        ))
    }

    /// Evaluate a query into a result table
    ///
    /// Pipeline: filter, group-limit (only with dimensions present),
    /// aggregate, order, paginate. A query naming neither dimensions nor
    /// metrics short-circuits to an empty result with no trace entries.
    pub fn get_dataframe(&self, query: &DataQuery) -> Result<SemanticResult, QueryError> {
        if query.is_empty() {
            return Ok(SemanticResult::empty());
        }
        if let Some(group_limit) = &query.group_limit {
            validate(group_limit)?;
        }

        let mut frame = apply_filters(&self.data, query.filters.as_deref(), &self.catalog)?;

        if let Some(group_limit) = &query.group_limit {
            if !query.dimensions.is_empty() {
                frame = limit_groups(&frame, &self.data, group_limit, &self.catalog)?;
                debug!(
                    view = %self.name,
                    top = group_limit.top,
                    rows = frame.len(),
                    "applied group limit"
                );
            }
        }

        let aggregated = aggregate(&frame, &query.dimensions, &query.metrics, &self.catalog)?;
        let ordered = order_frame(&aggregated, query.order.as_deref());
        let paged = paginate(&ordered, query.offset, query.limit);

        let description = describe_query(query);
        debug!(view = %self.name, query = %description, rows = paged.len(), "executed semantic query");
        Ok(SemanticResult::new(
            vec![SemanticRequest::new(REQUEST_KIND, description)],
            ResultSet::Frame(paged),
        ))
    }

    /// Row count of the table `get_dataframe` would return
    ///
    /// The count reflects pagination: it is the size of the page actually
    /// returned, not the logical match count before limit/offset. Trace
    /// requests are propagated unchanged from the underlying evaluation.
    pub fn get_row_count(&self, query: &DataQuery) -> Result<SemanticResult, QueryError> {
        if query.is_empty() {
            return Ok(SemanticResult::new(Vec::new(), ResultSet::Count(0)));
        }

        let result = self.get_dataframe(query)?;
        let count = result.results.as_frame().map(Frame::len).unwrap_or(0);
        Ok(SemanticResult::new(result.requests, ResultSet::Count(count)))
    }
}
