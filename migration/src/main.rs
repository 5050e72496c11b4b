use std::path::{Path, PathBuf};
use std::{env, fs};

mod runner;

enum Command {
    Apply,
    Fresh,
    Clean,
}

impl Command {
    fn parse(arg: Option<&str>) -> Self {
        match arg {
            Some("fresh") => Command::Fresh,
            Some("clean") => Command::Clean,
            _ => Command::Apply,
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let db_file = PathBuf::from(env::var("DATABASE_PATH").expect("DATABASE_PATH must be set"));
    let args: Vec<String> = env::args().collect();

    match Command::parse(args.get(1).map(String::as_str)) {
        Command::Clean => delete_database(&db_file),
        Command::Fresh => {
            delete_database(&db_file);
            migrate(&db_file).await;
        }
        Command::Apply => migrate(&db_file).await,
    }
}

async fn migrate(db_file: &Path) {
    // SQLite creates the file, but not the directories above it.
    if let Some(dir) = db_file.parent() {
        fs::create_dir_all(dir).expect("could not create the database directory");
    }
    let url = format!("sqlite://{}?mode=rwc", db_file.display());
    runner::apply_all(&url).await;
}

fn delete_database(db_file: &Path) {
    match fs::remove_file(db_file) {
        Ok(()) => println!("Deleted {}", db_file.display()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            println!("Nothing to delete at {}", db_file.display());
        }
        Err(err) => panic!("could not delete {}: {err}", db_file.display()),
    }
}
