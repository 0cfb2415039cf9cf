//! # Outbound Guard
//!
//! Finds the links on a page that leave the site and puts a confirmation
//! step in front of them.

mod bootstrap;
mod commands;
mod di;

use clap::{Parser, Subcommand};
use outbound_guard_domain::CliOverrides;
use std::path::PathBuf;

use commands::click::ClickOptions;

#[derive(Parser)]
#[command(name = "outbound-guard")]
#[command(version)]
#[command(about = "Ask before following links that leave your site")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Additional excluded domain; may be repeated
    #[arg(short = 'x', long = "exclude", global = true)]
    excludes: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify every link on a page and show which ones are guarded
    Scan {
        /// HTML file to scan
        page: PathBuf,

        /// URL the page is served from
        #[arg(short = 'u', long)]
        page_url: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Click one link on a page and run the confirmation flow
    Click {
        /// HTML file containing the link
        page: PathBuf,

        /// URL the page is served from
        #[arg(short = 'u', long)]
        page_url: String,

        /// Link number as listed by `scan`
        #[arg(short = 'l', long)]
        link: usize,

        /// Log instead of launching a browser
        #[arg(long)]
        dry_run: bool,

        /// Disable colored dialog buttons
        #[arg(long)]
        no_color: bool,
    },

    /// Print the resolved settings payload handed to the page script
    Settings,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        extra_excludes: cli.excludes.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let guard = bootstrap::resolve_guard(&config, cli.config.as_deref());

    match cli.command {
        Command::Scan {
            page,
            page_url,
            json,
        } => commands::scan::run(&page, &page_url, &guard, json).await,
        Command::Click {
            page,
            page_url,
            link,
            dry_run,
            no_color,
        } => {
            let options = ClickOptions {
                link,
                dry_run,
                use_color: !no_color,
            };
            commands::click::run(&page, &page_url, &guard, options).await
        }
        Command::Settings => commands::settings::run(&guard),
    }
}
