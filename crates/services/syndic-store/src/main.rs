//! Syndic Store - schema management for the syndic database.

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use syndic_store::config::StoreConfig;
use syndic_store::MigrateAction;

#[derive(Parser)]
#[command(name = "syndic-store")]
#[command(about = "Syndic database management")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply, roll back or inspect migrations
    Migrate {
        #[arg(value_enum, default_value = "up")]
        action: MigrateArg,
    },
    /// Check that the database is reachable
    Ping,
}

#[derive(Clone, Copy, ValueEnum)]
enum MigrateArg {
    Up,
    Down,
    Status,
    Fresh,
}

impl From<MigrateArg> for MigrateAction {
    fn from(arg: MigrateArg) -> Self {
        match arg {
            MigrateArg::Up => MigrateAction::Up,
            MigrateArg::Down => MigrateAction::Down,
            MigrateArg::Status => MigrateAction::Status,
            MigrateArg::Fresh => MigrateAction::Fresh,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = StoreConfig::from_env();

    match cli.command {
        Commands::Migrate { action } => {
            let status = syndic_store::run_migrations(&config, action.into()).await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        Commands::Ping => syndic_store::check_connection(&config).await?,
    }

    Ok(())
}
