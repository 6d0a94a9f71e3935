mod storefront;
mod theme;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::storefront::StorefrontCommands;
use crate::theme::{ProfileCommands, ThemeCommands};

#[derive(Debug, Parser)]
#[command(name = "vitrina-cli")]
#[command(about = "Vitrina storefront theme tooling")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize theme documents offline
    Theme {
        #[command(subcommand)]
        command: ThemeCommands,
    },
    /// Repair raw profile rows offline
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Inspect storefronts stored in the database
    Storefront {
        #[command(subcommand)]
        command: StorefrontCommands,
    },
    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Check that the database is reachable
    Ping,
    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Theme { command }) => theme::run_theme(command)?,
        Some(Commands::Profile { command }) => theme::run_profile(command)?,
        Some(Commands::Storefront { command }) => storefront::run_storefront(command).await?,
        Some(Commands::Db { command }) => run_db(command).await?,
        None => println!("vitrina-cli: run with --help to list commands"),
    }

    Ok(())
}

async fn run_db(command: DbCommands) -> anyhow::Result<()> {
    let pool = vitrina_db::connect_pool_from_env().await?;
    match command {
        DbCommands::Ping => {
            vitrina_db::health_check(&pool).await?;
            println!("database ok");
        }
        DbCommands::Migrate => {
            let applied = vitrina_db::run_migrations(&pool).await?;
            tracing::info!(applied, "migrations complete");
            println!("applied {applied} migration(s)");
        }
    }
    Ok(())
}
