//! Menu editing errors.

use std::fmt;

/// Errors raised when reading or editing a menu document.
///
/// Every editing operation validates before it mutates, so an error always
/// leaves the document exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// Non-numeric, negative or out-of-range value entered by an editor.
    MalformedInput {
        /// Field being edited.
        field: String,
        /// Raw value that was rejected.
        value: String,
        /// Why the value was rejected.
        message: String,
    },

    /// Name is empty after trimming.
    EmptyName {
        /// Kind of entity being named.
        entity: String,
    },

    /// Name already exists (compared case-insensitively).
    DuplicateName {
        /// Kind of entity.
        entity: String,
        /// Existing canonical name.
        name: String,
    },

    /// Name is reserved by the document structure.
    ReservedName {
        /// The rejected name.
        name: String,
    },

    /// Referenced entity does not exist.
    NotFound {
        /// Kind of entity.
        entity: String,
        /// Name that was looked up.
        name: String,
    },

    /// Operation requires the other combo model.
    ComboModelMismatch {
        /// Combo name.
        combo: String,
        /// Whether the operation expected a mix-and-match combo.
        expected_mix_and_match: bool,
    },
}

impl MenuError {
    pub(crate) fn not_found(entity: &str, name: &str) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            name: name.to_string(),
        }
    }

    pub(crate) fn duplicate(entity: &str, name: &str) -> Self {
        Self::DuplicateName {
            entity: entity.to_string(),
            name: name.to_string(),
        }
    }

    pub(crate) fn malformed(field: &str, value: impl fmt::Display, message: &str) -> Self {
        Self::MalformedInput {
            field: field.to_string(),
            value: value.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput {
                field,
                value,
                message,
            } => {
                write!(f, "Invalid {field} '{value}': {message}")
            }
            Self::EmptyName { entity } => write!(f, "{entity} name cannot be empty"),
            Self::DuplicateName { entity, name } => {
                write!(f, "{entity} '{name}' already exists")
            }
            Self::ReservedName { name } => write!(f, "'{name}' is a reserved name"),
            Self::NotFound { entity, name } => write!(f, "{entity} not found: {name}"),
            Self::ComboModelMismatch {
                combo,
                expected_mix_and_match,
            } => {
                if *expected_mix_and_match {
                    write!(f, "Combo '{combo}' is fixed; no item selection")
                } else {
                    write!(f, "Combo '{combo}' is mix-and-match; no fixed quantities")
                }
            }
        }
    }
}

impl std::error::Error for MenuError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_input_display() {
        let err = MenuError::malformed("price", "abc", "must be a number");
        assert_eq!(err.to_string(), "Invalid price 'abc': must be a number");
    }

    #[test]
    fn duplicate_name_display() {
        let err = MenuError::duplicate("Section", "Food");
        assert_eq!(err.to_string(), "Section 'Food' already exists");
    }

    #[test]
    fn combo_model_mismatch_display() {
        let err = MenuError::ComboModelMismatch {
            combo: "Kids Meal".to_string(),
            expected_mix_and_match: true,
        };
        assert!(err.to_string().contains("is fixed"));
    }
}
