use std::fmt;

/// Errors for malformed group limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupLimitError {
    /// The limit names no group dimensions
    NoDimensions,
    /// The limit asks for zero groups
    ZeroTop,
}

impl fmt::Display for GroupLimitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupLimitError::NoDimensions => {
                write!(f, "Group limit must name at least one dimension")
            }
            GroupLimitError::ZeroTop => {
                write!(f, "Group limit must keep at least one group")
            }
        }
    }
}

impl std::error::Error for GroupLimitError {}
