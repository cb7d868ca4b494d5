//! Form Errors
//!
//! Failures at the container and pairing boundary. User-correctable form
//! states are not errors; they are reported through validation marks.

use serde::{Deserialize, Serialize};

/// Common result type for container and pairing operations
pub type FormResult<T> = Result<T, FormError>;

/// Container/pairing-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormError {
    /// Index past the end of a container (container template, index, len)
    IndexOutOfRange(String, usize, usize),
    /// No item with this identifier in the container (container template, name)
    UnknownName(String, String),
    /// Two pre-existing items share an identifier (container template, name)
    DuplicateName(String, String),
    /// AI example and menu item identifiers diverged (example, menu item)
    PairingMismatch(String, String),
    /// Rejected editor configuration
    Config(String),
    /// Values could not be exported
    Serialization(String),
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::IndexOutOfRange(template, index, len) => {
                write!(f, "Index {} out of range for {} (len {})", index, template, len)
            }
            FormError::UnknownName(template, name) => {
                write!(f, "No item named {:?} in {}", name, template)
            }
            FormError::DuplicateName(template, name) => {
                write!(f, "Name {:?} used twice in {}", name, template)
            }
            FormError::PairingMismatch(example, menu) => {
                write!(f, "AI example {:?} paired with menu item {:?}", example, menu)
            }
            FormError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            FormError::Serialization(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for FormError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormError::IndexOutOfRange("criterion".to_string(), 3, 2);
        assert_eq!(err.to_string(), "Index 3 out of range for criterion (len 2)");

        let err = FormError::UnknownName("option".to_string(), "7".to_string());
        assert_eq!(err.to_string(), "No item named \"7\" in option");

        let err = FormError::DuplicateName("option".to_string(), "0".to_string());
        assert_eq!(err.to_string(), "Name \"0\" used twice in option");
    }
}
