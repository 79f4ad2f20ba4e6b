mod cli;
mod client;
mod commands;
mod config;
mod error;
mod output;
mod types;

use std::error::Error;
use std::io;

use clap::{CommandFactory, FromArgMatches};
use clap_complete::generate;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use cli::{Cli, Commands, IssueCommands, PageCommands};
use client::MagnetClient;
use config::Config;
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = Config::from_env();
    let cli = parse_cli(&config);

    let verbose = cli.verbose > 0;
    setup_logging(cli.verbose);

    if let Err(e) = run(cli, &config).await {
        if let Some(status) = e.status() {
            tracing::debug!(status, body = ?e.body(), "request failed");
        }
        eprintln!("{e}");

        // Show the error chain when logging was turned up
        if verbose {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

/// Parse arguments with the version string resolved at runtime.
fn parse_cli(config: &Config) -> Cli {
    let version = config.version();
    let command = Cli::command()
        .version(version.clone())
        .long_about(format!(
            "Magnet CLI {version}: issues, pages, and search.\n\n\
             Magnet CLI talks to the Magnet API. Set MAGNET_API_KEY. \
             Optional: MAGNET_API_URL (default https://www.magnet.run)."
        ));

    let mut matches = command.get_matches();
    Cli::from_arg_matches_mut(&mut matches).unwrap_or_else(|e| e.exit())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
}

async fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        // Commands that don't need an API key
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "magnet", &mut io::stdout());
        }
        command => {
            let api_key = config.api_key_or_exit();
            let client = MagnetClient::from_config(config, &api_key)?;
            tracing::debug!(base_url = client.base_url(), "client ready");

            match command {
                Commands::Issues { action } => match action {
                    IssueCommands::List(args) => commands::issues::list(&client, args).await?,
                    IssueCommands::Get(args) => commands::issues::get(&client, args).await?,
                    IssueCommands::Create(args) => commands::issues::create(&client, args).await?,
                    IssueCommands::Update(args) => commands::issues::update(&client, args).await?,
                },
                Commands::Pages { action } => match action {
                    PageCommands::List(args) => commands::pages::list(&client, args).await?,
                    PageCommands::Get(args) => commands::pages::get(&client, args).await?,
                    PageCommands::Create(args) => commands::pages::create(&client, args).await?,
                    PageCommands::Update(args) => commands::pages::update(&client, args).await?,
                },
                Commands::Search(args) => commands::search::run(&client, args).await?,
                Commands::Completions { .. } => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
