//! Engine errors

use std::fmt;

use crate::catalog::CatalogError;
use crate::group_limit::GroupLimitError;

/// Errors a query can fail with
///
/// All of these indicate a caller-side programming or configuration error;
/// evaluation is deterministic, so none are transient and none are retried.
#[derive(Debug)]
pub enum QueryError {
    /// The requested view name is not registered
    UnknownView(String),
    /// A referenced dimension or metric has no catalog binding
    Catalog(CatalogError),
    /// The request carries a malformed group limit
    GroupLimit(GroupLimitError),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::UnknownView(name) => {
                write!(f, "Semantic view '{}' does not exist", name)
            }
            QueryError::Catalog(err) => write!(f, "{}", err),
            QueryError::GroupLimit(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::UnknownView(_) => None,
            QueryError::Catalog(err) => Some(err),
            QueryError::GroupLimit(err) => Some(err),
        }
    }
}

impl From<CatalogError> for QueryError {
    fn from(err: CatalogError) -> Self {
        QueryError::Catalog(err)
    }
}

impl From<GroupLimitError> for QueryError {
    fn from(err: GroupLimitError) -> Self {
        QueryError::GroupLimit(err)
    }
}
