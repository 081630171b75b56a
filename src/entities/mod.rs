// Entity Models - plain records keyed by name or title
//
// Each record is owned by exactly one catalogue collection and points at
// other records by lookup key (author name, book title), never by pointer:
// - Author: name + nationality, immutable
// - Book: title + author key + borrowed flag
// - Patron: name + active loans + append-only history
// - LoanRecord: one borrowing event with loan and due dates

pub mod author;
pub mod book;
pub mod loan;
pub mod patron;

pub use author::Author;
pub use book::Book;
pub use loan::LoanRecord;
pub use patron::Patron;
