//! Unpaid Notifier - daily notifications for unpaid dues.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::BillingMonth;
use unpaid_notifier_lib::config::NotifierConfig;

#[derive(Parser)]
#[command(name = "unpaid-notifier")]
#[command(about = "Raises notifications for unpaid monthly dues")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run the check once and exit
    RunOnce {
        /// Month to check (YYYY-MM), defaults to the current UTC month
        #[arg(long, value_parser = BillingMonth::parse)]
        month: Option<BillingMonth>,
    },
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
    let mut config = NotifierConfig::from_env();

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.service.host = host;
            }
            if let Some(port) = port {
                config.service.port = port;
            }
            unpaid_notifier_lib::run_server(config).await?;
        }
        Commands::RunOnce { month } => {
            let created = unpaid_notifier_lib::run_once(&config, month).await?;
            println!("{} notification(s) created", created);
        }
    }

    Ok(())
}
