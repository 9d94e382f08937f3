//! Dimension entity

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::types::SemanticType;

/// A dimension - a categorical or temporal grouping attribute
///
/// Identity is the `id` alone: two dimensions with the same id are the same
/// entity, and two dimensions bound to the same source column but carrying
/// different ids are distinct. Equality and hashing follow that rule so
/// dimensions behave as plain values in sets and lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dimension {
    /// Stable identifier, unique within a catalog (e.g. `sales.region`)
    pub id: String,
    /// Display name; result columns use this, never the source column
    pub name: String,
    #[serde(rename = "type", default)]
    pub semantic_type: SemanticType,
    /// Human-readable description for UIs
    #[serde(default)]
    pub description: String,
}

impl Dimension {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        semantic_type: SemanticType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            semantic_type,
            description: description.into(),
        }
    }
}

impl PartialEq for Dimension {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Dimension {}

impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
