//! Request types

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{Dimension, Metric};

use super::filter::Filter;

/// Sort direction for ordering and group ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl Default for OrderDirection {
    fn default() -> Self {
        OrderDirection::Asc
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderDirection::Asc => write!(f, "ASC"),
            OrderDirection::Desc => write!(f, "DESC"),
        }
    }
}

/// Error when parsing an order direction string
#[derive(Debug, Clone)]
pub struct ParseOrderDirectionError {
    pub input: String,
}

impl fmt::Display for ParseOrderDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown order direction '{}'. Valid options: asc, desc", self.input)
    }
}

impl std::error::Error for ParseOrderDirectionError {}

impl FromStr for OrderDirection {
    type Err = ParseOrderDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ASC" | "ASCENDING" => Ok(OrderDirection::Asc),
            "DESC" | "DESCENDING" => Ok(OrderDirection::Desc),
            _ => Err(ParseOrderDirectionError {
                input: s.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for OrderDirection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        OrderDirection::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for OrderDirection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// What an order tuple refers to
#[derive(Debug, Clone, PartialEq)]
pub enum OrderElement {
    Dimension(Dimension),
    Metric(Metric),
}

impl OrderElement {
    /// The display name the element resolves to in the result table
    pub fn name(&self) -> &str {
        match self {
            OrderElement::Dimension(d) => &d.name,
            OrderElement::Metric(m) => &m.name,
        }
    }
}

/// One sort key: a dimension or metric plus a direction
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTuple {
    pub element: OrderElement,
    pub direction: OrderDirection,
}

impl OrderTuple {
    pub fn by_dimension(dimension: Dimension, direction: OrderDirection) -> Self {
        Self {
            element: OrderElement::Dimension(dimension),
            direction,
        }
    }

    pub fn by_metric(metric: Metric, direction: OrderDirection) -> Self {
        Self {
            element: OrderElement::Metric(metric),
            direction,
        }
    }
}

/// Keep only the top-N groups of a ranking
///
/// Ranks distinct combinations of `dimensions` by the aggregated `metric`
/// (or, without a metric, by the first dimension's raw value) in
/// `direction`, and keeps the first `top` combinations. When `filters` is
/// set the ranking is computed against the original unfiltered dataset
/// narrowed by those filters, independent of the request's own filters.
#[derive(Debug, Clone)]
pub struct GroupLimit {
    pub dimensions: Vec<Dimension>,
    pub metric: Option<Metric>,
    pub direction: OrderDirection,
    pub top: usize,
    pub filters: Option<Vec<Filter>>,
}

/// Capabilities a view declares support for
///
/// Callers must not send a `group_limit` to a view that does not list
/// `GroupLimit` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    GroupLimit,
}

/// A bundled data request against a view
///
/// All fields are optional in spirit: an empty query is answered with an
/// empty result without touching the dataset.
#[derive(Debug, Clone, Default)]
pub struct DataQuery {
    pub metrics: Vec<Metric>,
    pub dimensions: Vec<Dimension>,
    pub filters: Option<Vec<Filter>>,
    pub order: Option<Vec<OrderTuple>>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
    pub group_limit: Option<GroupLimit>,
}

impl DataQuery {
    /// True when the query names no dimensions and no metrics
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty() && self.dimensions.is_empty()
    }
}
