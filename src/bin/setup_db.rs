use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use bank_admin_rs::{initialize_db, seed_sample_data};

/// A utility for creating the bank_admin_rs database and filling it with sample data.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short, env = "DATABASE_PATH", default_value = "bank.db")]
    output_path: String,

    /// Only create the tables, do not insert the sample rows.
    #[arg(long)]
    no_seed: bool,
}

/// Create the tables and insert the sample rows.
///
/// Running this against an existing database adds any missing tables and
/// sample rows and leaves everything else alone.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'bank.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'bank.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        println!("Updating database at {output_path:#?}");
    } else {
        println!("Creating database at {output_path:#?}");
    }
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;
    println!("Tables created/verified");

    if !args.no_seed {
        seed_sample_data(&conn)?;
        println!("Sample data inserted:");
        for table in [
            "customers",
            "account_types",
            "accounts",
            "banks",
            "loans",
            "transactions",
            "audit_log",
        ] {
            let count: i64 =
                conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
            println!("  - {count} {table}");
        }
    }

    println!("Success!");

    Ok(())
}
