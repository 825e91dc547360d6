// src/main.rs
use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use scope_hound::cli::Cli;
use scope_hound::config::Config;
use scope_hound::feed::{FeedSource, LocalFeed, RemoteFeed};
use scope_hound::filter::{BountyFilter, FilterOptions, ProgramTypeFilter, ScopeFilter};
use scope_hound::output::{self, human::HumanOutput, ExportFormat};
use scope_hound::platforms::{discover_asset_types, normalize, Platform};
use scope_hound::progress::FetchSpinner;
use scope_hound::prompt;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Clean exit on operator cancellation; not a failure.
macro_rules! cancel_or {
    ($selection:expr) => {
        match $selection {
            Some(value) => value,
            None => {
                println!("{}", "Cancelled by user.".red().bold());
                return Ok(());
            }
        }
    };
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    cli.validate()?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load config file (defaults when absent)
    let config = Config::load(Path::new(&cli.config))?;

    // Initialize logging; CLI flags override the configured level
    let log_level = cli.log_level().unwrap_or(&config.logging.level);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Resolve the feed source and the schema to read it with
    let (source, platform): (Box<dyn FeedSource>, Platform) = if let Some(ref path) = cli.input {
        let schema = cli
            .schema
            .context("--input requires --schema")?;
        (Box::new(LocalFeed::new(path)), schema)
    } else if let Some(platform) = cli.platform {
        let feed = RemoteFeed::new(platform, config.feeds.url_override(platform))?;
        (Box::new(feed), platform)
    } else {
        let options = [
            "HackerOne",
            "Bugcrowd",
            "YesWeHack",
            "Intigriti",
            "Load custom JSON",
        ];
        let choice = cancel_or!(prompt::ask_option("Select platform:", &options)?);

        if choice == 4 {
            let path = cancel_or!(prompt::ask_text("Enter path to JSON file: ")?);
            let schema_options = ["HackerOne", "Bugcrowd", "YesWeHack", "Intigriti"];
            let schema_choice = cancel_or!(prompt::ask_option(
                "Select platform type for the JSON:",
                &schema_options
            )?);
            (Box::new(LocalFeed::new(path)), Platform::ALL[schema_choice])
        } else {
            let platform = Platform::ALL[choice];
            let feed = RemoteFeed::new(platform, config.feeds.url_override(platform))?;
            (Box::new(feed), platform)
        }
    };

    // Fetch the feed
    let spinner = FetchSpinner::new(cli.should_show_progress());
    spinner.set_message(format!("Retrieving {}...", source.describe()));
    let programs = source.load().await?;
    spinner.finish();

    let adapter = platform.adapter();

    // Program type: only asked on platforms that distinguish bounty vs VDP
    let program_type = if !platform.has_program_type() {
        ProgramTypeFilter::All
    } else if let Some(choice) = cli.program_type {
        choice
    } else {
        let options = ["Bug bounty", "VDP", "Both"];
        let choice = cancel_or!(prompt::ask_option("Select program type:", &options)?);
        [
            ProgramTypeFilter::Bounty,
            ProgramTypeFilter::Vdp,
            ProgramTypeFilter::All,
        ][choice]
    };

    // Asset types: options come from the loaded feed, not a fixed list
    let asset_types = if let Some(ref types) = cli.asset_types {
        types.clone()
    } else {
        let discovered = discover_asset_types(adapter.as_ref(), &programs);
        if discovered.is_empty() {
            anyhow::bail!("Feed contains no targets to select asset types from");
        }
        let options: Vec<&str> = discovered.iter().map(String::as_str).collect();
        let picked = cancel_or!(prompt::ask_multi_option("Select asset type(s)", &options)?);
        picked.into_iter().map(|i| discovered[i].clone()).collect()
    };

    let scope = if let Some(choice) = cli.scope {
        choice
    } else {
        let options = ["In scope", "Out of scope", "All"];
        let choice = cancel_or!(prompt::ask_option("Select scope:", &options)?);
        [ScopeFilter::In, ScopeFilter::Out, ScopeFilter::All][choice]
    };

    let bounty = if let Some(choice) = cli.bounty {
        choice
    } else {
        let options = ["Eligible for bounty", "Not eligible", "All"];
        let choice = cancel_or!(prompt::ask_option("Bounty eligibility:", &options)?);
        [BountyFilter::Eligible, BountyFilter::NotEligible, BountyFilter::All][choice]
    };

    // Filter the feed
    let filters = FilterOptions::new(program_type, asset_types, scope, bounty);
    let records = normalize(adapter.as_ref(), &programs, &filters);

    // Present
    let presenter = HumanOutput::new(cli.no_color);
    presenter.present(&records, platform.monetary())?;

    // Export
    if let Some(ref formats) = cli.export {
        let base = cli
            .output
            .as_deref()
            .context("--export requires --output")?;
        output::export_all(&records, platform.monetary(), base, formats)?;
    } else if !records.is_empty() {
        let labels: Vec<&str> = ExportFormat::MENU.iter().map(|(_, label)| *label).collect();
        let picked = cancel_or!(prompt::ask_multi_option("Select output format(s)", &labels)?);
        let formats: Vec<ExportFormat> =
            picked.into_iter().map(|i| ExportFormat::MENU[i].0).collect();

        if !formats.contains(&ExportFormat::DoNotSave) {
            let base = cancel_or!(prompt::ask_text(
                "Enter base filename (without extension): "
            )?);
            output::export_all(&records, platform.monetary(), &base, &formats)?;
        }
    }

    println!("{}", "Done.".green().bold());
    Ok(())
}
