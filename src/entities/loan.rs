// 🧾 Loan Record - One borrowing event
//
// Created by a successful loan. The same record (same UUID) sits in the
// patron's current_loans while active and in borrowing_history forever; a
// return removes the active copy only. The record points at its book by
// title key, never by reference.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// LOAN RECORD
// ============================================================================

/// A single loan of one book to one patron
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    /// Stable loan identity (UUID) - keeps a history entry identifiable
    /// after the active copy is removed
    pub id: String,

    /// Title key of the loaned book
    pub book_title: String,

    /// When the loan was made
    pub loan_date: DateTime<Utc>,

    /// When the book is due back (loan_date + loan period)
    pub due_date: DateTime<Utc>,
}

impl LoanRecord {
    /// Create a record for a loan made at `loan_date` running `loan_days` days
    pub fn new(book_title: String, loan_date: DateTime<Utc>, loan_days: i64) -> Self {
        LoanRecord {
            id: uuid::Uuid::new_v4().to_string(),
            book_title,
            loan_date,
            due_date: loan_date + Duration::days(loan_days),
        }
    }

    /// Overdue means strictly past due: a loan checked exactly at its due
    /// date is not overdue yet
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        self.due_date < now
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn loan_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_due_date_is_loan_date_plus_period() {
        let record = LoanRecord::new("Frankenstein".to_string(), loan_instant(), 14);

        assert_eq!(record.loan_date, loan_instant());
        assert_eq!(record.due_date, loan_instant() + Duration::days(14));
    }

    #[test]
    fn test_zero_day_loan_is_due_immediately() {
        let record = LoanRecord::new("Frankenstein".to_string(), loan_instant(), 0);

        assert_eq!(record.due_date, record.loan_date);
    }

    #[test]
    fn test_overdue_is_strictly_past_due() {
        let record = LoanRecord::new("Frankenstein".to_string(), loan_instant(), 14);
        let due = record.due_date;

        assert!(!record.is_overdue_at(due - Duration::seconds(1)));
        assert!(!record.is_overdue_at(due));
        assert!(record.is_overdue_at(due + Duration::seconds(1)));
    }

    #[test]
    fn test_each_record_gets_its_own_id() {
        let first = LoanRecord::new("Frankenstein".to_string(), loan_instant(), 14);
        let second = LoanRecord::new("Frankenstein".to_string(), loan_instant(), 14);

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
    }
}
