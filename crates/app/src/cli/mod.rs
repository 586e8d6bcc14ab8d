use clap::{Parser, Subcommand};

mod admin;
mod books;
mod db;
mod orders;

#[derive(Debug, Parser)]
#[command(name = "booknest-app", about = "BookNest CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Admin(admin::AdminCommand),
    Books(books::BooksCommand),
    Db(db::DbCommand),
    Orders(orders::OrdersCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Admin(command) => admin::run(command).await,
            Commands::Books(command) => books::run(command).await,
            Commands::Db(command) => db::run(command).await,
            Commands::Orders(command) => orders::run(command).await,
        }
    }
}
