// 🚨 Error Taxonomy - Everything a catalogue operation can refuse
//
// Four failure kinds, surfaced at the point of violation and terminal for
// the triggering call: nothing is retried and the catalogue is never left
// partially mutated (every lookup happens before the first write).

use thiserror::Error;

// ============================================================================
// ENTITY KIND
// ============================================================================

/// Which record collection an error is talking about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Author,
    Book,
    Patron,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Author => "author",
            EntityKind::Book => "book",
            EntityKind::Patron => "patron",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CATALOGUE ERROR
// ============================================================================

/// Result type alias for catalogue operations
pub type CatalogueResult<T> = Result<T, CatalogueError>;

/// Main error type for catalogue operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    /// An add operation used a key that is already taken
    #[error("{kind} '{name}' already exists")]
    DuplicateEntity { kind: EntityKind, name: String },

    /// A referenced entity (the author of a new book, the patron of a
    /// loan or return) does not exist
    #[error("{kind} '{name}' not found")]
    NotFound { kind: EntityKind, name: String },

    /// No available copy of the title. Covers both "title unknown" and
    /// "currently on loan" - the two cases are deliberately not
    /// distinguished.
    #[error("book '{title}' is either not in the catalogue or currently borrowed")]
    Unavailable { title: String },

    /// Return requested for a title the patron has no active loan on
    #[error("book '{title}' is not currently borrowed by {patron}")]
    NotCurrentlyBorrowed { title: String, patron: String },
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_as_str() {
        assert_eq!(EntityKind::Author.as_str(), "author");
        assert_eq!(EntityKind::Book.as_str(), "book");
        assert_eq!(EntityKind::Patron.as_str(), "patron");
    }

    #[test]
    fn test_duplicate_entity_display() {
        let err = CatalogueError::DuplicateEntity {
            kind: EntityKind::Author,
            name: "Mary Shelley".to_string(),
        };
        assert_eq!(err.to_string(), "author 'Mary Shelley' already exists");
    }

    #[test]
    fn test_not_found_display() {
        let err = CatalogueError::NotFound {
            kind: EntityKind::Patron,
            name: "Ada".to_string(),
        };
        assert_eq!(err.to_string(), "patron 'Ada' not found");
    }

    #[test]
    fn test_unavailable_names_both_cases() {
        let err = CatalogueError::Unavailable {
            title: "Frankenstein".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "book 'Frankenstein' is either not in the catalogue or currently borrowed"
        );
    }

    #[test]
    fn test_not_currently_borrowed_display() {
        let err = CatalogueError::NotCurrentlyBorrowed {
            title: "Frankenstein".to_string(),
            patron: "Ada".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "book 'Frankenstein' is not currently borrowed by Ada"
        );
    }
}
