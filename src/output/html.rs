// src/output/html.rs
//! HTML export: one bordered table, header row plus one row per record
//!
//! All cell values are escaped; an asset identifier containing markup must
//! not corrupt the generated document.

use anyhow::Result;
use std::io::Write;

use crate::record::ScopeRecord;

const COLUMNS: [&str; 5] = ["Program", "Asset", "Type", "Bounty", "Severity"];

/// Minimal HTML entity escaping for text placed inside table cells.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub fn write(records: &[ScopeRecord], mut out: impl Write) -> Result<()> {
    out.write_all(
        b"<html><body><table border='1' style='border-collapse: collapse; font-family: monospace;'>",
    )?;

    out.write_all(b"<thead style='background:#eee;font-weight:bold;'><tr>")?;
    for column in COLUMNS {
        write!(out, "<th style='padding: 4px;'>{}</th>", column)?;
    }
    out.write_all(b"</tr></thead><tbody>")?;

    for record in records {
        let bounty = match record.bounty {
            Some(true) => "true".to_string(),
            Some(false) => "false".to_string(),
            None => "N/A".to_string(),
        };
        let severity = record
            .severity
            .as_ref()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "None".to_string());

        out.write_all(b"<tr>")?;
        for cell in [
            record.program.as_str(),
            record.asset.as_str(),
            record.asset_type.as_str(),
            bounty.as_str(),
            severity.as_str(),
        ] {
            write!(out, "<td style='padding: 4px;'>{}</td>", escape(cell))?;
        }
        out.write_all(b"</tr>")?;
    }

    out.write_all(b"</tbody></table></body></html>")?;
    out.flush()?;
    Ok(())
}
