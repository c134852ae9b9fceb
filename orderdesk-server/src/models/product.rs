//! Product name validation
//!
//! Presence is the only requirement; the catalog accepts any non-empty
//! name.

use super::ValidationError;

/// Validated product name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    /// Create a new product name, rejecting empty or whitespace-only input.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the product name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        assert!(ProductName::new("Widget").is_ok());
        assert!(ProductName::new("Heavy-Duty Widget (v2)").is_ok());
    }

    #[test]
    fn rejects_empty() {
        let err = ProductName::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "name" }));
    }

    #[test]
    fn rejects_whitespace_only() {
        let err = ProductName::new("   ").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn preserves_original_spelling() {
        let name = ProductName::new("  Widget  ").unwrap();
        assert_eq!(name.as_str(), "  Widget  ");
    }
}
