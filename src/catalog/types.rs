//! Semantic type and aggregation definitions for the catalog

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Semantic types exposed by catalog entities
///
/// These describe how a dimension or metric presents to callers, not how
/// the cell values are stored. Storage types live in `frame::Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticType {
    /// Variable-length text
    String,
    /// Calendar date
    Date,
    /// Whole number
    Integer,
    /// Fractional number (metrics like averages and monetary sums)
    Decimal,
    /// True/false flag
    Boolean,
}

impl Default for SemanticType {
    fn default() -> Self {
        SemanticType::String
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticType::String => write!(f, "string"),
            SemanticType::Date => write!(f, "date"),
            SemanticType::Integer => write!(f, "integer"),
            SemanticType::Decimal => write!(f, "decimal"),
            SemanticType::Boolean => write!(f, "boolean"),
        }
    }
}

/// Error when parsing a semantic type string
#[derive(Debug, Clone)]
pub struct ParseSemanticTypeError {
    pub input: String,
}

impl fmt::Display for ParseSemanticTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown semantic type '{}'. Valid options: string, date, integer, decimal, boolean",
            self.input
        )
    }
}

impl std::error::Error for ParseSemanticTypeError {}

impl FromStr for SemanticType {
    type Err = ParseSemanticTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "string" | "text" | "varchar" => Ok(SemanticType::String),
            "date" => Ok(SemanticType::Date),
            "integer" | "int" | "bigint" => Ok(SemanticType::Integer),
            "decimal" | "numeric" | "float" | "double" => Ok(SemanticType::Decimal),
            "boolean" | "bool" => Ok(SemanticType::Boolean),
            _ => Err(ParseSemanticTypeError {
                input: s.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for SemanticType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SemanticType::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for SemanticType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl SemanticType {
    /// Check if this is a numeric type
    pub fn is_numeric(&self) -> bool {
        matches!(self, SemanticType::Integer | SemanticType::Decimal)
    }

    /// Check if this is a temporal type
    pub fn is_temporal(&self) -> bool {
        matches!(self, SemanticType::Date)
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Aggregation functions for metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregation {
    /// Sum of values
    Sum,
    /// Arithmetic mean of values
    Avg,
    /// Count of non-null values
    Count,
    /// Count of distinct non-null values
    CountDistinct,
    /// Minimum value
    Min,
    /// Maximum value
    Max,
}

impl Default for Aggregation {
    fn default() -> Self {
        Aggregation::Sum
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aggregation::Sum => write!(f, "sum"),
            Aggregation::Avg => write!(f, "avg"),
            Aggregation::Count => write!(f, "count"),
            Aggregation::CountDistinct => write!(f, "count_distinct"),
            Aggregation::Min => write!(f, "min"),
            Aggregation::Max => write!(f, "max"),
        }
    }
}

impl Aggregation {
    /// Render the expression label for a metric over `column`,
    /// e.g. `SUM(revenue)`.
    pub fn expression(&self, column: &str) -> String {
        match self {
            Aggregation::Sum => format!("SUM({})", column),
            Aggregation::Avg => format!("AVG({})", column),
            Aggregation::Count => format!("COUNT({})", column),
            Aggregation::CountDistinct => format!("COUNT(DISTINCT {})", column),
            Aggregation::Min => format!("MIN({})", column),
            Aggregation::Max => format!("MAX({})", column),
        }
    }
}

/// Error when parsing an aggregation string
#[derive(Debug, Clone)]
pub struct ParseAggregationError {
    pub input: String,
}

impl fmt::Display for ParseAggregationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown aggregation '{}'. Valid options: sum, avg, count, count_distinct, min, max",
            self.input
        )
    }
}

impl std::error::Error for ParseAggregationError {}

impl FromStr for Aggregation {
    type Err = ParseAggregationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(Aggregation::Sum),
            "avg" | "average" | "mean" => Ok(Aggregation::Avg),
            "count" => Ok(Aggregation::Count),
            "count_distinct" | "countdistinct" => Ok(Aggregation::CountDistinct),
            "min" | "minimum" => Ok(Aggregation::Min),
            "max" | "maximum" => Ok(Aggregation::Max),
            _ => Err(ParseAggregationError {
                input: s.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Aggregation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Aggregation::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Aggregation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
