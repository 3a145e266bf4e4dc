//! Lookup errors raised when a query names something the document lacks.

use thiserror::Error;

/// A section or entity requested from the catalog document is absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// A top-level section is missing or `null` (malformed or partial dataset).
    #[error("Section \"{0}\" not found in data")]
    MissingSection(&'static str),

    /// No entity with the requested ID exists.
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: String },
}

impl LookupError {
    /// Shorthand for [`LookupError::NotFound`].
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_display() {
        let err = LookupError::MissingSection("faqs");
        assert_eq!(err.to_string(), "Section \"faqs\" not found in data");

        let err = LookupError::not_found("Watch", "w-404");
        assert_eq!(err.to_string(), "Watch with ID w-404 not found");
    }
}
