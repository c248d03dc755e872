mod render;
mod search;

use clap::{Parser, Subcommand};
use gemfinder_core::{DEFAULT_MAX_REVIEWS, DEFAULT_MIN_RATING};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gemfinder-cli")]
#[command(about = "Find highly rated, little-reviewed places on Google Maps")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one search, store the results, and print them
    Search {
        /// Type of place and where, e.g. "restaurants in lower east side, new york"
        query: String,
        #[command(flatten)]
        thresholds: Thresholds,
        /// Print results as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Read queries from stdin and search whenever the query changes
    Interactive {
        #[command(flatten)]
        thresholds: Thresholds,
    },
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, clap::Args)]
struct Thresholds {
    /// Minimum average rating (1.0–5.0)
    #[arg(long, default_value_t = DEFAULT_MIN_RATING)]
    min_rating: f64,
    /// Maximum number of reviews
    #[arg(long, default_value_t = DEFAULT_MAX_REVIEWS)]
    max_reviews: u32,
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    Ping,
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("gemfinder-cli ready; run with --help for commands");
        return Ok(());
    };

    let config = gemfinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    // Results go to stdout; keep logs on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, ?command, "running command");

    match command {
        Commands::Search {
            query,
            thresholds,
            json,
        } => search::run_search_command(&config, &query, thresholds, json).await?,
        Commands::Interactive { thresholds } => {
            search::run_interactive(&config, thresholds).await?;
        }
        Commands::Db { command } => {
            let pool_config = gemfinder_db::PoolConfig::from_app_config(&config);
            let pool = gemfinder_db::connect_pool(&config.database_url, pool_config).await?;
            run_db_command(&pool, command).await?;
        }
    }

    Ok(())
}

async fn run_db_command(pool: &sqlx::PgPool, command: DbCommands) -> anyhow::Result<()> {
    match command {
        DbCommands::Ping => {
            gemfinder_db::ping(pool).await?;
            println!("database reachable");
        }
        DbCommands::Migrate => {
            let applied = gemfinder_db::run_migrations(pool).await?;
            println!("applied {applied} migration(s)");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
