//! A utility for creating a pre-populated database for manual testing.

use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::{Connection, params};

use kakeibo::initialize_db;

/// A utility for creating a test database for the kakeibo web server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'kakeibo.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'kakeibo.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let connection = Connection::open(output_path)?;

    initialize_db(&connection)?;

    println!("Creating sample entries...");

    let sample_entries = [
        ("2025-07-25", "Salary", 280_000, "July pay", "income"),
        ("2025-07-28", "Groceries", 6_480, "Weekly shop", "expense"),
        ("2025-08-01", "Rent", 85_000, "", "expense"),
        ("2025-08-02", "Utilities", 11_320, "Electricity and gas", "expense"),
        ("2025-08-03", "Groceries", 4_980, "", "expense"),
        ("2025-08-04", "Eating Out", 2_000, "Lunch", "expense"),
        ("2025-08-05", "Side Job", 15_000, "Freelance article", "income"),
    ];

    for (date, category, amount, memo, entry_type) in sample_entries {
        connection.execute(
            "INSERT INTO entries (date, category, amount, memo, type) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![date, category, amount, memo, entry_type],
        )?;
    }

    println!("Success!");

    Ok(())
}
