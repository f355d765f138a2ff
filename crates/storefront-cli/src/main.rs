mod order;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use storefront_core::Gallery;
use storefront_whatsapp::WhatsAppClient;
use tracing_subscriber::EnvFilter;

use crate::order::{run_order, OrderArgs};

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Storefront order dispatch and WhatsApp relay tools")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Dispatch an order: relay first, then native share, then a wa.me link
    Order(OrderArgs),
    /// Print one page of the portfolio gallery as JSON
    Gallery {
        /// Directory to scan (defaults to `STOREFRONT_PORTFOLIO_DIR`)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Offset of the first item
        #[arg(long, default_value_t = 0)]
        cursor: usize,
        /// Items per page
        #[arg(long, default_value_t = storefront_core::ITEMS_PER_LOAD)]
        limit: usize,
    },
    /// Send a plain text message straight through the Cloud API
    Text {
        /// Recipient phone (defaults to `RECIPIENT_PHONE_NUMBER`)
        #[arg(long)]
        to: Option<String>,
        /// Message body
        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = storefront_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Order(args)) => run_order(&config, args).await?,
        Some(Commands::Gallery { dir, cursor, limit }) => {
            let dir = dir.unwrap_or_else(|| config.portfolio_dir.clone());
            let page = Gallery::from_dir(&dir).page(cursor, limit.max(1));
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Some(Commands::Text { to, message }) => {
            if config.whatsapp.uses_placeholder_credentials() {
                tracing::warn!("WhatsApp credentials are placeholders; the send will likely fail");
            }
            let client = WhatsAppClient::new(&config.whatsapp, config.http_timeout_secs)?;
            let to = to.unwrap_or_else(|| config.whatsapp.recipient_phone.clone());
            let response = client.send_text(&to, &message).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        None => Cli::command().print_help()?,
    }

    Ok(())
}
