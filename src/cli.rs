// src/cli.rs
use clap::Parser;

use crate::filter::{BountyFilter, ProgramTypeFilter, ScopeFilter};
use crate::output::ExportFormat;
use crate::platforms::Platform;

/// scope-hound: Bug Bounty Scope Explorer
///
/// Fetch program scope data from a platform feed (or a local JSON file),
/// filter the assets, and print or export the matches. Any selection not
/// given as a flag is asked interactively.
#[derive(Parser, Debug, Clone)]
#[command(name = "scope-hound")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // ===== Input & Configuration =====
    /// Path to TOML config file
    #[arg(short = 'c', long = "config", default_value = "scope-hound.toml")]
    pub config: String,

    /// Platform feed to fetch
    #[arg(short = 'p', long = "platform", value_enum)]
    pub platform: Option<Platform>,

    /// Load a local JSON file instead of fetching a feed
    #[arg(short = 'i', long = "input", conflicts_with = "platform")]
    pub input: Option<String>,

    /// Schema the local JSON file conforms to (required with --input)
    #[arg(long = "schema", value_enum, requires = "input")]
    pub schema: Option<Platform>,

    // ===== Filtering =====
    /// Program type filter (bounty, vdp, all)
    #[arg(long = "program-type", value_enum)]
    pub program_type: Option<ProgramTypeFilter>,

    /// Asset types to include (comma separated, case-insensitive)
    #[arg(short = 't', long = "asset-types", value_delimiter = ',')]
    pub asset_types: Option<Vec<String>>,

    /// Scope side filter (in, out, all)
    #[arg(long = "scope", value_enum)]
    pub scope: Option<ScopeFilter>,

    /// Bounty eligibility filter (eligible, not-eligible, all)
    #[arg(long = "bounty", value_enum)]
    pub bounty: Option<BountyFilter>,

    // ===== Export =====
    /// Export formats (comma separated: txt, json, csv, html)
    #[arg(short = 'e', long = "export", value_enum, value_delimiter = ',')]
    pub export: Option<Vec<ExportFormat>>,

    /// Base filename for exports, without extension
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    // ===== Display =====
    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Disable the fetch spinner
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    // ===== Logging =====
    /// Verbose logging (set log level to debug)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Quiet logging (set log level to warn)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Cli {
    /// Validate flag combinations and return errors for invalid usage
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.verbose && self.quiet {
            anyhow::bail!("Cannot specify both --verbose and --quiet");
        }

        if self.input.is_some() && self.schema.is_none() {
            anyhow::bail!("--input requires --schema to state which feed format the file uses");
        }

        if let Some(ref formats) = self.export {
            if formats.is_empty() {
                anyhow::bail!("--export requires at least one format");
            }
            if self.output.is_none() {
                anyhow::bail!("--export requires --output for the base filename");
            }
        }

        Ok(())
    }

    /// The schema to interpret the loaded data with, when fully specified
    /// on the command line.
    pub fn selected_schema(&self) -> Option<Platform> {
        if self.input.is_some() {
            self.schema
        } else {
            self.platform
        }
    }

    /// Determine log level based on verbose/quiet flags
    pub fn log_level(&self) -> Option<&str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("warn")
        } else {
            None
        }
    }

    /// Check if the fetch spinner should be enabled
    pub fn should_show_progress(&self) -> bool {
        !self.no_progress && !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path() {
        let cli = Cli::parse_from(["scope-hound"]);
        assert_eq!(cli.config, "scope-hound.toml");
    }

    #[test]
    fn test_platform_flag() {
        let cli = Cli::parse_from(["scope-hound", "--platform", "hackerone"]);
        assert_eq!(cli.platform, Some(Platform::Hackerone));
        assert_eq!(cli.selected_schema(), Some(Platform::Hackerone));
    }

    #[test]
    fn test_input_with_schema() {
        let cli = Cli::parse_from([
            "scope-hound",
            "--input", "feed.json",
            "--schema", "intigriti",
        ]);
        assert!(cli.validate().is_ok());
        assert_eq!(cli.selected_schema(), Some(Platform::Intigriti));
    }

    #[test]
    fn test_input_without_schema_invalid() {
        let cli = Cli::parse_from(["scope-hound", "--input", "feed.json"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_platform_conflicts_with_input() {
        let result = Cli::try_parse_from([
            "scope-hound",
            "--platform", "bugcrowd",
            "--input", "feed.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_filter_flags() {
        let cli = Cli::parse_from([
            "scope-hound",
            "--platform", "yeswehack",
            "--program-type", "bounty",
            "--asset-types", "URL,API",
            "--scope", "in",
            "--bounty", "eligible",
        ]);
        assert_eq!(cli.program_type, Some(ProgramTypeFilter::Bounty));
        assert_eq!(cli.asset_types, Some(vec!["URL".to_string(), "API".to_string()]));
        assert_eq!(cli.scope, Some(ScopeFilter::In));
        assert_eq!(cli.bounty, Some(BountyFilter::Eligible));
    }

    #[test]
    fn test_export_requires_output() {
        let cli = Cli::parse_from(["scope-hound", "--export", "json,csv"]);
        assert!(cli.validate().is_err());

        let cli = Cli::parse_from([
            "scope-hound",
            "--export", "json,csv",
            "--output", "results",
        ]);
        assert!(cli.validate().is_ok());
        assert_eq!(
            cli.export,
            Some(vec![ExportFormat::Json, ExportFormat::Csv])
        );
    }

    #[test]
    fn test_verbose_and_quiet_invalid() {
        let cli = Cli::parse_from(["scope-hound", "--verbose", "--quiet"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        assert_eq!(Cli::parse_from(["scope-hound", "-v"]).log_level(), Some("debug"));
        assert_eq!(Cli::parse_from(["scope-hound", "-q"]).log_level(), Some("warn"));
        assert_eq!(Cli::parse_from(["scope-hound"]).log_level(), None);
    }

    #[test]
    fn test_progress_disabled_when_quiet() {
        assert!(!Cli::parse_from(["scope-hound", "-q"]).should_show_progress());
        assert!(!Cli::parse_from(["scope-hound", "--no-progress"]).should_show_progress());
        assert!(Cli::parse_from(["scope-hound"]).should_show_progress());
    }
}
