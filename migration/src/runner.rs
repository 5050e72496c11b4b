use colored::Colorize;
use futures::FutureExt;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 72;

/// Applies every registered migration in order, one status line each.
/// Exits the process on the first failure.
pub async fn apply_all(url: &str) {
    let db = sea_orm::Database::connect(url)
        .await
        .expect("could not open the database");
    let manager = SchemaManager::new(&db);

    println!("Running migrations...");
    let started = Instant::now();
    let migrations = <migration::Migrator as MigratorTrait>::migrations();
    let count = migrations.len();

    for step in migrations {
        apply_one(&manager, step).await;
    }

    println!("Applied {count} migration(s) in {:.2?}", started.elapsed());
}

async fn apply_one(manager: &SchemaManager<'_>, step: Box<dyn MigrationTrait>) {
    let name = step.name().to_string();
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub("Applying ".len() + name.len()));
    print!("Applying {}{dots} ", name.bold());
    io::stdout().flush().ok();

    let clock = Instant::now();
    let outcome = std::panic::AssertUnwindSafe(step.up(manager))
        .catch_unwind()
        .await;

    match outcome {
        Ok(Ok(())) => {
            let elapsed = format!("({:.2?})", clock.elapsed());
            println!("{} {}", "done".green(), elapsed.dimmed());
        }
        Ok(Err(err)) => {
            println!("{} {err}", "failed".red());
            std::process::exit(1);
        }
        Err(_) => {
            println!("{} panicked", "failed".red());
            std::process::exit(1);
        }
    }
}
