// src/record.rs
//! Normalized result records produced by the schema adapters

use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity slot of a record.
///
/// Its meaning is platform-dependent: HackerOne and Intigriti report a
/// qualitative label (severity tier / impact), Bugcrowd and YesWeHack report
/// a monetary payout. Untagged so JSON export keeps numbers as numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Severity {
    Payout(f64),
    Label(String),
}

impl Severity {
    pub fn label(s: impl Into<String>) -> Self {
        Severity::Label(s.into())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Payout(amount) => write!(f, "{}", amount),
            Severity::Label(label) => write!(f, "{}", label),
        }
    }
}

/// One filtered asset, normalized across all four platform schemas.
///
/// Field names are capitalized on the wire to match the export formats
/// (JSON keys, CSV header, HTML table header).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeRecord {
    #[serde(rename = "Program")]
    pub program: String,

    #[serde(rename = "Asset")]
    pub asset: String,

    #[serde(rename = "Type")]
    pub asset_type: String,

    /// `None` means the feed carries no signal for this target ("N/A").
    #[serde(rename = "Bounty")]
    pub bounty: Option<bool>,

    #[serde(rename = "Severity")]
    pub severity: Option<Severity>,
}

/// Terminal color for a severity label. Presentation only; exports always
/// see the unstyled label.
fn severity_color(label: &str) -> Color {
    match label.to_lowercase().as_str() {
        "low" => Color::Yellow,
        "medium" => Color::Magenta,
        "high" => Color::BrightMagenta,
        "critical" => Color::Red,
        "tier 1" => Color::Red,
        "tier 2" => Color::Magenta,
        "tier 3" => Color::Yellow,
        "no bounty" => Color::White,
        "out of scope" => Color::Blue,
        _ => Color::White,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Render the one-line display form of a record.
///
/// The styled (`color = true`) and plain (`color = false`) renderings carry
/// identical content; only ANSI styling differs. Text export writes the
/// plain form, the terminal presenter writes the styled one.
pub fn format_line(record: &ScopeRecord, monetary: bool, color: bool) -> String {
    let name = format!("[{}]", record.program);
    let bounty = match record.bounty {
        Some(true) => "True",
        Some(false) => "False",
        None => "N/A",
    };

    let detail = if monetary {
        match &record.severity {
            Some(Severity::Payout(p)) if *p > 0.0 => format!("Max Payout: ${}", p),
            _ => String::new(),
        }
    } else {
        let label = record
            .severity
            .as_ref()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "None".to_string());
        if color {
            let styled = capitalize(&label).color(severity_color(&label)).bold();
            format!("Severity: {}", styled)
        } else {
            format!("Severity: {}", capitalize(&label))
        }
    };

    if color {
        let bounty_col = match record.bounty {
            Some(true) => "True".green().bold().to_string(),
            Some(false) => "False".red().bold().to_string(),
            None => "N/A".to_string(),
        };
        format!(
            "{} {} | Type: {} | Bounty: {} | {}",
            name.blue().bold(),
            record.asset,
            record.asset_type,
            bounty_col,
            detail
        )
    } else {
        format!(
            "{} {} | Type: {} | Bounty: {} | {}",
            name, record.asset, record.asset_type, bounty, detail
        )
    }
}
