// 👤 Patron Entity - Identity by name + loan lists
//
// current_loans holds the active loans in the order they were made.
// borrowing_history is append-only: every loan ever made to this patron
// stays there, and a return removes from current_loans only.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::loan::LoanRecord;

// ============================================================================
// PATRON ENTITY
// ============================================================================

/// Patron record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patron {
    /// Unique name (catalogue key)
    pub name: String,

    /// Active loans, in the order they were made
    pub current_loans: Vec<LoanRecord>,

    /// Every loan ever made to this patron (append-only)
    pub borrowing_history: Vec<LoanRecord>,
}

impl Patron {
    /// Create a patron with empty loan lists
    pub fn new(name: String) -> Self {
        Patron {
            name,
            current_loans: Vec::new(),
            borrowing_history: Vec::new(),
        }
    }

    /// Register a new loan. The record lands in current_loans and in
    /// borrowing_history in the same call, so the two lists never disagree.
    pub fn record_loan(&mut self, record: LoanRecord) {
        self.current_loans.push(record.clone());
        self.borrowing_history.push(record);
    }

    /// First active loan matching the title, if any
    pub fn active_loan(&self, book_title: &str) -> Option<&LoanRecord> {
        self.current_loans
            .iter()
            .find(|loan| loan.book_title == book_title)
    }

    /// Close the active loan on `book_title`: removes it from current_loans
    /// and hands it back. History keeps its copy. None when no such loan -
    /// and in that case nothing is touched.
    pub fn close_loan(&mut self, book_title: &str) -> Option<LoanRecord> {
        let idx = self
            .current_loans
            .iter()
            .position(|loan| loan.book_title == book_title)?;
        Some(self.current_loans.remove(idx))
    }

    /// Number of active loans
    pub fn current_loan_count(&self) -> usize {
        self.current_loans.len()
    }
}

impl fmt::Display for Patron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ============================================================================
// TESTS
// ============================================================================
