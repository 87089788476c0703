use arzesh::cli::{Cli, Commands};
use arzesh::config::Config;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    arzesh::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Show(args) => {
            tracing::debug!(endpoint = %config.feed.endpoint, "Fetching prices once");
            args.execute(&config).await?;
        }
        Commands::Watch(args) => {
            tracing::info!(endpoint = %config.feed.endpoint, "Watching prices");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
