//! Metric entity

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::types::SemanticType;

/// A metric - a numeric measure with an associated aggregation
///
/// The entity carries presentation fields only; the binding to a source
/// column and aggregation function lives in the catalog. Identity is the
/// `id` alone, same as `Dimension`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    /// Stable identifier, unique within a catalog (e.g. `sales.total_revenue`)
    pub id: String,
    /// Display name; result columns use this
    pub name: String,
    #[serde(rename = "type", default)]
    pub semantic_type: SemanticType,
    /// Human-readable aggregation label, e.g. `SUM(revenue)`
    #[serde(default)]
    pub expression: String,
    /// Human-readable description for UIs
    #[serde(default)]
    pub description: String,
}

impl Metric {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        semantic_type: SemanticType,
        expression: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            semantic_type,
            expression: expression.into(),
            description: description.into(),
        }
    }
}

impl PartialEq for Metric {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Metric {}

impl Hash for Metric {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
