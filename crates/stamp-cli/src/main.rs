mod encode;
mod scan;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "stamp")]
#[command(about = "Classify, generate and replay stamp campaign links")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify one link and print the result as JSON
    Validate {
        /// Raw deep link or decoded QR payload
        uri: String,
    },
    /// Generate a campaign link
    Encode {
        #[command(subcommand)]
        command: EncodeCommands,
    },
    /// Replay scan events from stdin through the dispatcher
    ///
    /// Each line is a link, or one of `foreground`, `background`, `inactive`.
    Scan,
}

#[derive(Debug, Subcommand)]
enum EncodeCommands {
    /// Check-in link: `<base>/checkin/<payload>`
    Checkin {
        #[arg(long)]
        location_id: String,
        #[arg(long)]
        campaign: String,
        /// Link root; defaults to `STAMP_LINK_BASE_URL`
        #[arg(long)]
        base: Option<String>,
    },
    /// Referral link: `<base>/referral?info=<payload>`
    Referral {
        #[arg(long)]
        location_id: String,
        #[arg(long)]
        referral_code: String,
        /// Link root; defaults to `STAMP_LINK_BASE_URL`
        #[arg(long)]
        base: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = stamp_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Validate { uri }) => run_validate(&uri)?,
        Some(Commands::Encode { command }) => encode::run_encode(&config, command)?,
        Some(Commands::Scan) => scan::run_scan(&config).await?,
        None => println!("stamp: try `stamp --help`"),
    }

    Ok(())
}

fn run_validate(uri: &str) -> anyhow::Result<()> {
    match stamp_core::validate_str(uri) {
        Ok(result) => {
            println!("{}", serde_json::to_string(&result)?);
            Ok(())
        }
        Err(err) => {
            println!("{}", err.to_json());
            anyhow::bail!("{err}")
        }
    }
}

#[cfg(test)]
mod tests;
