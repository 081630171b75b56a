// ✍️ Author Entity - Identity by name
//
// Authors are keyed by unique name and never change after creation. Books
// reference an author by this name key rather than by pointer, so the
// record stays plain data.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// AUTHOR ENTITY
// ============================================================================

/// Author record. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Unique name (catalogue key)
    pub name: String,

    /// Nationality, free text
    pub nationality: String,
}

impl Author {
    /// Create a new author record
    pub fn new(name: String, nationality: String) -> Self {
        Author { name, nationality }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.nationality)
    }
}

// ============================================================================
// TESTS
// ============================================================================
