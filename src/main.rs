use clap::Parser;
use std::path::PathBuf;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use contacts_cli::api::ContactApi;
use contacts_cli::config::Config;
use contacts_cli::session::Session;
use contacts_cli::shell::Shell;

#[derive(Parser, Debug)]
#[command(name = "contacts-cli")]
#[command(version)]
#[command(about = "A terminal client for a remote contact-management API")]
struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Generate example config and exit
    #[arg(long)]
    generate_config: bool,
}

const EXAMPLE_CONFIG: &str = include_str!("../example-config.yaml");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.generate_config {
        println!("{}", EXAMPLE_CONFIG);
        return Ok(());
    }

    let config_path = args.config.to_string_lossy();
    let config = match Config::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", config_path, e);
            return Err(e);
        }
    };

    let level = config
        .logging
        .min_level
        .parse::<Level>()
        .unwrap_or(Level::INFO);
    FmtSubscriber::builder().with_max_level(level).init();

    info!("Starting {} v{}", contacts_cli::NAME, contacts_cli::VERSION);
    info!("Contact API at {}", config.api.base_url);

    let session = Session::new(config.auth.clone());
    let api = ContactApi::new(config.api.base_url.clone()).with_page_size(config.api.page_size);
    let mut shell = Shell::new(session, api);

    tokio::select! {
        result = shell.run() => {
            if let Err(e) = result {
                error!("Shell error: {}", e);
                return Err(e.into());
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
    }

    Ok(())
}
