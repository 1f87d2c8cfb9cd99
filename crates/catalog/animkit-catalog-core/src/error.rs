//! Error types for catalog construction and lookup.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CatalogError {
    /// No record with the requested id
    #[error("Animation not found: {id}")]
    NotFound { id: String },

    /// Two records share the same id
    #[error("Duplicate animation id: {id}")]
    DuplicateId { id: String },

    /// Catalog JSON could not be decoded (includes unknown categories)
    #[error("Catalog parse error: {reason}")]
    Parse { reason: String },
}

impl CatalogError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "lookup",
            Self::DuplicateId { .. } => "validation",
            Self::Parse { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_stable() {
        let err = CatalogError::NotFound {
            id: "nope".to_string(),
        };
        assert_eq!(err.category(), "lookup");
        assert_eq!(err.to_string(), "Animation not found: nope");
    }

    #[test]
    fn json_errors_become_parse_errors() {
        let err: CatalogError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert_eq!(err.category(), "serialization");
    }
}
