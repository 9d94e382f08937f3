//! Filter types
//!
//! Filters come in three structurally distinct shapes. Only `Where`
//! carries a condition this engine evaluates; `Having` belongs to an outer
//! layer and `Adhoc` is an opaque caller expression. Both of the latter
//! evaluate as identity transforms, so the predicate evaluator never needs
//! a runtime kind check to know what to skip.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::catalog::Dimension;
use crate::frame::Value;

/// Row-level comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    In,
    NotIn,
    IsNull,
    IsNotNull,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
        };
        write!(f, "{}", s)
    }
}

/// Error when parsing an operator string
///
/// A malformed operator is a hard failure; it is not one of the
/// structurally skipped filter shapes.
#[derive(Debug, Clone)]
pub struct ParseOperatorError {
    pub input: String,
}

impl fmt::Display for ParseOperatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown filter operator '{}'", self.input)
    }
}

impl std::error::Error for ParseOperatorError {}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "=" | "==" | "EQ" => Ok(Operator::Eq),
            "!=" | "<>" | "NE" => Ok(Operator::Ne),
            ">" | "GT" => Ok(Operator::Gt),
            "<" | "LT" => Ok(Operator::Lt),
            ">=" | "GE" => Ok(Operator::Ge),
            "<=" | "LE" => Ok(Operator::Le),
            "IN" => Ok(Operator::In),
            "NOT IN" => Ok(Operator::NotIn),
            "IS NULL" => Ok(Operator::IsNull),
            "IS NOT NULL" => Ok(Operator::IsNotNull),
            _ => Err(ParseOperatorError {
                input: s.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Operator::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Operator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// The right-hand side of a predicate
///
/// `In`/`NotIn` accept either shape: a scalar is treated as a one-element
/// list.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Scalar(Value),
    List(Vec<Value>),
}

impl FilterValue {
    /// View the value as a list, wrapping scalars
    pub fn as_list(&self) -> Vec<&Value> {
        match self {
            FilterValue::Scalar(v) => vec![v],
            FilterValue::List(vs) => vs.iter().collect(),
        }
    }

    /// Scalar view; `None` for lists
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            FilterValue::Scalar(v) => Some(v),
            FilterValue::List(_) => None,
        }
    }

    /// Convert a JSON value, mapping arrays to lists
    pub fn from_json(value: &serde_json::Value) -> FilterValue {
        match value {
            serde_json::Value::Array(items) => {
                FilterValue::List(items.iter().map(Value::from_json).collect())
            }
            other => FilterValue::Scalar(Value::from_json(other)),
        }
    }
}

impl From<Value> for FilterValue {
    fn from(v: Value) -> Self {
        FilterValue::Scalar(v)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Scalar(Value::from(v))
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Scalar(Value::from(v))
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        FilterValue::Scalar(Value::Int(v))
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        FilterValue::Scalar(Value::Float(v))
    }
}

impl From<Vec<Value>> for FilterValue {
    fn from(vs: Vec<Value>) -> Self {
        FilterValue::List(vs)
    }
}

/// An evaluatable row condition on a catalog dimension
///
/// The column reference is the dimension entity itself; the evaluator
/// resolves it to a source column through the catalog and fails on a
/// missing binding. `value` is ignored by `IsNull`/`IsNotNull`.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: Dimension,
    pub operator: Operator,
    pub value: Option<FilterValue>,
}

impl Predicate {
    pub fn new(column: Dimension, operator: Operator, value: impl Into<FilterValue>) -> Self {
        Self {
            column,
            operator,
            value: Some(value.into()),
        }
    }

    /// A predicate with no right-hand side (`IS NULL` / `IS NOT NULL`)
    pub fn unary(column: Dimension, operator: Operator) -> Self {
        Self {
            column,
            operator,
            value: None,
        }
    }
}

/// A filter attached to a request
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Constrains the base row set; the only shape this engine evaluates
    Where(Predicate),
    /// Aggregate-level condition applied by an outer layer; identity here
    Having(Predicate),
    /// Free-form caller expression; never evaluated here
    Adhoc(String),
}

impl Filter {
    /// The predicate to evaluate, if this filter has one
    pub fn where_predicate(&self) -> Option<&Predicate> {
        match self {
            Filter::Where(p) => Some(p),
            Filter::Having(_) | Filter::Adhoc(_) => None,
        }
    }
}
