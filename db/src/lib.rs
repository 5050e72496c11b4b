pub mod models;
pub mod test_utils;

use common::config::Config;
use sea_orm::{Database, DatabaseConnection};
use std::path::Path;

/// Opens the SQLite database named by `DATABASE_PATH`, creating the file
/// (and its parent directory) on first use.
pub async fn connect() -> DatabaseConnection {
    let file = Path::new(&Config::get().database_path);

    // SQLite won't create intermediate directories.
    if let Some(dir) = file.parent() {
        std::fs::create_dir_all(dir).expect("could not create the database directory");
    }

    let url = format!("sqlite://{}?mode=rwc", file.display());
    Database::connect(&url)
        .await
        .unwrap_or_else(|err| panic!("could not open {url}: {err}"))
}
