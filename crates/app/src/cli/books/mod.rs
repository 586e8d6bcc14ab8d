use clap::{Args, Subcommand};

mod import;

#[derive(Debug, Args)]
pub(crate) struct BooksCommand {
    #[command(subcommand)]
    command: BooksSubcommand,
}

#[derive(Debug, Subcommand)]
enum BooksSubcommand {
    /// Load books from a YAML catalog file
    Import(import::ImportBooksArgs),
}

pub(crate) async fn run(command: BooksCommand) -> Result<(), String> {
    match command.command {
        BooksSubcommand::Import(args) => import::run(args).await,
    }
}
