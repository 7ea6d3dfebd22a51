//! Prints every record in a moneybook store. Handy for poking at a device
//! backup or a flat-store directory without booting the app.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use moneybook::{Gateway, StorageConfig};

/// Dump the contents of a moneybook store to stdout.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to a SQLite database.
    #[arg(long, conflicts_with = "flat_dir")]
    db_path: Option<PathBuf>,

    /// Directory of a flat (JSON collection) store.
    #[arg(long)]
    flat_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();

    let config = match (args.db_path, args.flat_dir) {
        (Some(path), None) => StorageConfig::Sqlite { path },
        (None, Some(dir)) => StorageConfig::Flat { dir },
        _ => {
            eprintln!("specify exactly one of --db-path or --flat-dir");
            return ExitCode::from(2);
        }
    };

    let gateway = match Gateway::open(config) {
        Ok(gateway) => gateway,
        Err(error) => {
            eprintln!("could not open the store: {error}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = dump(&gateway) {
        eprintln!("could not read the store: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn dump(gateway: &Gateway) -> Result<(), moneybook::Error> {
    println!("== categories ==");
    for category in gateway.categories()? {
        println!(
            "{:>20}  {}  {}  budget {:.2}",
            category.id, category.name, category.color, category.budget
        );
    }

    println!("== transactions ==");
    for entry in gateway.transactions()? {
        let transaction = &entry.transaction;
        println!(
            "{:>20}  {}  {:>10.2}  {}  {}  {}",
            transaction.id,
            transaction.date,
            transaction.amount,
            transaction.kind.as_str(),
            entry.category_name.as_deref().unwrap_or("-"),
            transaction.note
        );
    }

    println!("== debts ==");
    for debt in gateway.debts()? {
        println!(
            "{:>20}  {}  {:>10.2}  {}  {}  {}",
            debt.id,
            debt.date,
            debt.amount,
            debt.direction.as_str(),
            debt.status.as_str(),
            debt.person
        );
    }

    println!("== accounts ==");
    for account in gateway.accounts()? {
        println!(
            "{:>20}  {}  {:>12.2} {}  {}",
            account.id, account.name, account.balance, account.currency, account.kind
        );
    }

    Ok(())
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_filter(filter::LevelFilter::INFO),
        )
        .init();
}
