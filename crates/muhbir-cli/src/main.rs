//! Muhbir - Upload Event Webhook Notifier
//!
//! Receives storage upload events and forwards a formatted notification
//! to a chat webhook.

use clap::{Parser, Subcommand};
use muhbir_api::NotifyServer;
use muhbir_core::config::NotifierConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "muhbir")]
#[command(author = "Muhbir Team")]
#[command(version = muhbir_core::VERSION)]
#[command(about = "Upload event webhook notifier", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Bind address
    #[arg(long, env = "MUHBIR_BIND_ADDRESS")]
    bind: Option<String>,

    /// Port number
    #[arg(short, long, env = "MUHBIR_PORT")]
    port: Option<u16>,

    /// Destination webhook URL
    #[arg(long, env = "MUHBIR_WEBHOOK_URL")]
    webhook_url: Option<String>,

    /// Environment label shown in notifications
    #[arg(long, env = "MUHBIR_ENVIRONMENT")]
    environment: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "MUHBIR_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the notification server
    Server,

    /// Deliver one notification from an upload-event JSON file
    Send {
        /// Path to the event JSON file
        event_file: String,
    },

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();

    // Load or create config
    let mut config = if let Some(config_path) = &cli.config {
        NotifierConfig::from_file(config_path)?
    } else {
        NotifierConfig::from_env()
    };

    // Override with CLI args
    if let Some(bind) = cli.bind {
        config.server.bind_address = bind;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(url) = cli.webhook_url {
        config.webhook.url = Some(url);
    }
    if let Some(environment) = cli.environment {
        config.webhook.environment = environment;
    }

    match cli.command {
        Some(Commands::Version) => {
            print_banner();
        }
        Some(Commands::Send { event_file }) => {
            let delivered = commands::send::execute(config, &event_file).await?;
            if !delivered {
                std::process::exit(1);
            }
        }
        Some(Commands::Server) | None => {
            print_banner();
            NotifyServer::new(config).run().await?;
        }
    }

    Ok(())
}

fn print_banner() {
    println!(
        r#"
    __  ___      __    __    _
   /  |/  /_  __/ /_  / /_  (_)____
  / /|_/ / / / / __ \/ __ \/ / ___/
 / / / / /_/ / / / / /_/ / / /
/_/ /_/\__,_/_/ /_/_.___/_/_/

   Upload Event Webhook Notifier
   Version: {}
"#,
        muhbir_core::VERSION
    );
}
