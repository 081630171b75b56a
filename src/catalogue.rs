// 📚 Library Catalogue - The aggregate owning every record
//
// One Catalogue value owns the author, book, and patron collections and
// implements every operation: add, loan, return, query, overdue check.
// Collections are plain Vecs scanned linearly - the data is small,
// insertion order doubles as the query order, and the uniqueness checks at
// add time make first-match scans exact. No global instance exists: callers
// construct and own their catalogue.
//
// Every fallible operation does all of its lookups before its first write,
// so a failed call leaves the catalogue exactly as it found it.

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::clock::{Clock, SystemClock};
use crate::entities::{Author, Book, LoanRecord, Patron};
use crate::error::{CatalogueError, CatalogueResult, EntityKind};

/// Loan period applied when the caller does not pick one
pub const DEFAULT_LOAN_DAYS: i64 = 14;

// ============================================================================
// QUERY PROJECTIONS
// ============================================================================

/// Per-patron row returned by query_patrons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatronSummary {
    /// Patron name
    pub name: String,

    /// Number of active loans
    pub current_loans: usize,
}

/// One entry returned by check_overdue_loans
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverdueLoan {
    /// Patron holding the loan
    pub patron: String,

    /// Title of the overdue book
    pub book: String,

    /// When it was due
    pub due_date: DateTime<Utc>,
}

// ============================================================================
// CATALOGUE
// ============================================================================

/// The catalogue aggregate
pub struct Catalogue {
    /// Books in insertion order
    books: Vec<Book>,

    /// Authors in insertion order
    authors: Vec<Author>,

    /// Patrons in insertion order
    patrons: Vec<Patron>,

    /// Time source for loan stamps and overdue checks
    clock: Box<dyn Clock>,
}

// The clock is a trait object without Debug, so the derive is off the table
impl fmt::Debug for Catalogue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalogue")
            .field("books", &self.books)
            .field("authors", &self.authors)
            .field("patrons", &self.patrons)
            .finish()
    }
}

impl Catalogue {
    /// Empty catalogue on the wall clock
    pub fn new() -> Self {
        Catalogue::with_clock(Box::new(SystemClock))
    }

    /// Empty catalogue on an injected time source
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Catalogue {
            books: Vec::new(),
            authors: Vec::new(),
            patrons: Vec::new(),
            clock,
        }
    }

    // ========================================================================
    // AUTHOR MANAGEMENT
    // ========================================================================

    /// Add an author. Fails with DuplicateEntity when the name is taken.
    pub fn add_author(&mut self, name: String, nationality: String) -> CatalogueResult<Author> {
        if self.authors.iter().any(|a| a.name == name) {
            return Err(CatalogueError::DuplicateEntity {
                kind: EntityKind::Author,
                name,
            });
        }

        let author = Author::new(name, nationality);
        self.authors.push(author.clone());
        Ok(author)
    }

    // ========================================================================
    // BOOK MANAGEMENT
    // ========================================================================

    /// Add a book referencing an existing author by name. Fails with
    /// DuplicateEntity when the title is taken and with NotFound when no
    /// such author has been added.
    pub fn add_book(
        &mut self,
        title: String,
        author_name: String,
        publication_date: String,
    ) -> CatalogueResult<Book> {
        if self.books.iter().any(|b| b.title == title) {
            return Err(CatalogueError::DuplicateEntity {
                kind: EntityKind::Book,
                name: title,
            });
        }
        if !self.authors.iter().any(|a| a.name == author_name) {
            return Err(CatalogueError::NotFound {
                kind: EntityKind::Author,
                name: author_name,
            });
        }

        let book = Book::new(title, author_name, publication_date);
        self.books.push(book.clone());
        Ok(book)
    }

    // ========================================================================
    // PATRON MANAGEMENT
    // ========================================================================

    /// Add a patron with empty loan lists. Fails with DuplicateEntity when
    /// the name is taken.
    pub fn add_patron(&mut self, name: String) -> CatalogueResult<Patron> {
        if self.patrons.iter().any(|p| p.name == name) {
            return Err(CatalogueError::DuplicateEntity {
                kind: EntityKind::Patron,
                name,
            });
        }

        let patron = Patron::new(name);
        self.patrons.push(patron.clone());
        Ok(patron)
    }

    // ========================================================================
    // LOAN / RETURN
    // ========================================================================

    /// Loan `title` to `patron_name` for the default 14-day period
    pub fn loan_book(&mut self, title: &str, patron_name: &str) -> CatalogueResult<LoanRecord> {
        self.loan_book_for(title, patron_name, DEFAULT_LOAN_DAYS)
    }

    /// Loan `title` to `patron_name` for `loan_days` days.
    ///
    /// The book is checked before the patron: an unknown title and a
    /// borrowed title both surface Unavailable, and they do so even when
    /// the patron is unknown too.
    pub fn loan_book_for(
        &mut self,
        title: &str,
        patron_name: &str,
        loan_days: i64,
    ) -> CatalogueResult<LoanRecord> {
        let book_idx = self
            .books
            .iter()
            .position(|b| b.title == title && b.is_available())
            .ok_or_else(|| CatalogueError::Unavailable {
                title: title.to_string(),
            })?;
        let patron_idx = self
            .patrons
            .iter()
            .position(|p| p.name == patron_name)
            .ok_or_else(|| CatalogueError::NotFound {
                kind: EntityKind::Patron,
                name: patron_name.to_string(),
            })?;

        let record = LoanRecord::new(
            self.books[book_idx].title.clone(),
            self.clock.now(),
            loan_days,
        );
        self.patrons[patron_idx].record_loan(record.clone());
        self.books[book_idx].is_borrowed = true;

        info!(
            "book '{}' loaned to {} until {}",
            title,
            patron_name,
            record.due_date.format("%Y-%m-%d")
        );
        Ok(record)
    }

    /// Return `title` from `patron_name`. The closed record is handed back;
    /// the patron's history keeps its copy.
    pub fn return_book(&mut self, title: &str, patron_name: &str) -> CatalogueResult<LoanRecord> {
        let patron_idx = self
            .patrons
            .iter()
            .position(|p| p.name == patron_name)
            .ok_or_else(|| CatalogueError::NotFound {
                kind: EntityKind::Patron,
                name: patron_name.to_string(),
            })?;

        let record = self.patrons[patron_idx].close_loan(title).ok_or_else(|| {
            CatalogueError::NotCurrentlyBorrowed {
                title: title.to_string(),
                patron: patron_name.to_string(),
            }
        })?;

        // The loan existed, so the book does too: titles are unique and
        // books are never removed.
        if let Some(book) = self.books.iter_mut().find(|b| b.title == record.book_title) {
            book.is_borrowed = false;
        }

        info!("book '{}' returned by {}", title, patron_name);
        Ok(record)
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// All books in insertion order, borrowed ones included
    pub fn query_books(&self) -> &[Book] {
        &self.books
    }

    /// All authors in insertion order
    pub fn query_authors(&self) -> &[Author] {
        &self.authors
    }

    /// Per-patron projection (name + active loan count), insertion order
    pub fn query_patrons(&self) -> Vec<PatronSummary> {
        self.patrons
            .iter()
            .map(|p| PatronSummary {
                name: p.name.clone(),
                current_loans: p.current_loan_count(),
            })
            .collect()
    }

    /// Every active loan whose due date is strictly past now, patrons in
    /// insertion order and each patron's loans in list order. Empty when
    /// nothing is overdue.
    pub fn check_overdue_loans(&self) -> Vec<OverdueLoan> {
        let now = self.clock.now();
        let mut overdue = Vec::new();

        for patron in &self.patrons {
            for loan in &patron.current_loans {
                if loan.is_overdue_at(now) {
                    overdue.push(OverdueLoan {
                        patron: patron.name.clone(),
                        book: loan.book_title.clone(),
                        due_date: loan.due_date,
                    });
                }
            }
        }

        overdue
    }

    // ========================================================================
    // LOOKUPS & COUNTS
    // ========================================================================

    /// Find an author by name
    pub fn find_author(&self, name: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.name == name)
    }

    /// Find a book by title
    pub fn find_book(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.title == title)
    }

    /// Find a patron by name
    pub fn find_patron(&self, name: &str) -> Option<&Patron> {
        self.patrons.iter().find(|p| p.name == name)
    }

    /// Borrowed flag for a title, None when the title is unknown
    pub fn is_borrowed(&self, title: &str) -> Option<bool> {
        self.find_book(title).map(|b| b.is_borrowed)
    }

    /// Number of authors
    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    /// Number of books
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Number of patrons
    pub fn patron_count(&self) -> usize {
        self.patrons.len()
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
