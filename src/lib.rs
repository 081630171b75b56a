// Library Catalogue - Core Library
// Exposes all modules for use in the CLI demo and tests

pub mod catalogue;
pub mod clock;
pub mod entities;
pub mod error;

// Re-export commonly used types
pub use catalogue::{Catalogue, OverdueLoan, PatronSummary, DEFAULT_LOAN_DAYS};
pub use clock::{Clock, ManualClock, SystemClock};
pub use entities::{Author, Book, LoanRecord, Patron};
pub use error::{CatalogueError, CatalogueResult, EntityKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
