// Library catalogue demo - seeds a small catalogue and walks every operation

use anyhow::Result;
use chrono::{Duration, Utc};

use library_catalogue::{Catalogue, ManualClock, VERSION};

fn main() -> Result<()> {
    env_logger::init();

    println!("📚 Library Catalogue v{}", VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Manual clock so the overdue check at the end has something to report
    let clock = ManualClock::new(Utc::now());
    let mut catalogue = Catalogue::with_clock(Box::new(clock.clone()));

    // 1. Authors
    println!("\n✍️  Adding authors...");
    catalogue.add_author("George Orwell".to_string(), "British".to_string())?;
    catalogue.add_author("Aldous Huxley".to_string(), "British".to_string())?;
    for author in catalogue.query_authors() {
        println!("✓ {}", author);
    }

    // 2. Books
    println!("\n📖 Adding books...");
    catalogue.add_book(
        "1984".to_string(),
        "George Orwell".to_string(),
        "1949-06-08".to_string(),
    )?;
    catalogue.add_book(
        "Brave New World".to_string(),
        "Aldous Huxley".to_string(),
        "1932-08-30".to_string(),
    )?;
    for book in catalogue.query_books() {
        println!("✓ {}", book);
    }

    // 3. Patrons
    println!("\n🧑 Registering patrons...");
    catalogue.add_patron("Alice Johnson".to_string())?;
    catalogue.add_patron("Bob Smith".to_string())?;
    println!("✓ {} patrons registered", catalogue.patron_count());

    // 4. Loans
    println!("\n🔖 Loaning books...");
    let loan = catalogue.loan_book("1984", "Alice Johnson")?;
    println!("✓ '1984' → Alice Johnson, due {}", loan.due_date.format("%Y-%m-%d"));
    let loan = catalogue.loan_book_for("Brave New World", "Bob Smith", 7)?;
    println!(
        "✓ 'Brave New World' → Bob Smith, due {}",
        loan.due_date.format("%Y-%m-%d")
    );

    // A borrowed title cannot go out twice
    if let Err(err) = catalogue.loan_book("1984", "Bob Smith") {
        println!("❌ second loan rejected: {}", err);
    }

    // 5. Patron overview
    println!("\n👥 Patron overview:");
    for summary in catalogue.query_patrons() {
        println!("   {} - {} active loan(s)", summary.name, summary.current_loans);
    }

    // 6. Return
    println!("\n↩️  Returning '1984'...");
    catalogue.return_book("1984", "Alice Johnson")?;
    println!("✓ '1984' back on the shelf");

    // 7. Overdue check, eight days later
    clock.advance(Duration::days(8));
    println!("\n⏰ Overdue check (8 days later):");
    let overdue = catalogue.check_overdue_loans();
    println!("{}", serde_json::to_string_pretty(&overdue)?);

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "🎉 Demo complete: {} authors, {} books, {} patrons",
        catalogue.author_count(),
        catalogue.book_count(),
        catalogue.patron_count()
    );

    Ok(())
}
