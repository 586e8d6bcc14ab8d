use std::{fs, path::PathBuf};

use booknest::books::load_catalog;
use booknest_app::{
    database::{self, Db},
    domain::books::{BooksService, PgBooksService, models::NewBook},
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct ImportBooksArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Catalog YAML file
    #[arg(long)]
    file: PathBuf,
}

pub(crate) async fn run(args: ImportBooksArgs) -> Result<(), String> {
    let yaml = fs::read_to_string(&args.file)
        .map_err(|error| format!("failed to read {}: {error}", args.file.display()))?;

    let books = load_catalog(&yaml).map_err(|error| format!("invalid catalog: {error}"))?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgBooksService::new(Db::new(pool));
    let count = books.len();

    for book in books {
        let title = book.title.clone();

        service
            .create_book(NewBook::from(book))
            .await
            .map_err(|error| format!("failed to import {title:?}: {error}"))?;
    }

    println!("imported {count} books");

    Ok(())
}
