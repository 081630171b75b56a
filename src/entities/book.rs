// 📖 Book Entity - Title identity + availability flag
//
// Books are keyed by unique title and reference their author by name key.
// Availability is a two-state machine: Available -> Borrowed on a
// successful loan, Borrowed -> Available on a successful return, and no
// other transition exists.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// BOOK ENTITY
// ============================================================================

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique title (catalogue key)
    pub title: String,

    /// Name key of the author this book references
    pub author: String,

    /// Publication date, kept verbatim as the source record carries it
    pub publication_date: String,

    /// True while the single copy is out on loan
    pub is_borrowed: bool,
}

impl Book {
    /// Create a new book record, available by default
    pub fn new(title: String, author: String, publication_date: String) -> Self {
        Book {
            title,
            author,
            publication_date,
            is_borrowed: false,
        }
    }

    /// Whether the book can be loaned right now
    pub fn is_available(&self) -> bool {
        !self.is_borrowed
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' by {} (published {})",
            self.title, self.author, self.publication_date
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
