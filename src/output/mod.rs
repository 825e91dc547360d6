// src/output/mod.rs
//! Export handling for filtered scope records
//!
//! Each format gets its own writer module; `export_all` dispatches the same
//! record sequence to every selected format so the exports never diverge.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use tracing::info;

use crate::record::ScopeRecord;

pub mod csv;
pub mod html;
pub mod human;
pub mod json;
pub mod text;

/// Export formats the operator can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Txt,
    Json,
    Csv,
    Html,
    /// Selecting this anywhere in the format set suppresses all export,
    /// even when other formats are also selected.
    #[value(skip)]
    DoNotSave,
}

impl ExportFormat {
    /// Menu labels for the interactive format picker.
    pub const MENU: [(ExportFormat, &'static str); 5] = [
        (ExportFormat::Txt, "Txt"),
        (ExportFormat::Json, "Json"),
        (ExportFormat::Csv, "Csv"),
        (ExportFormat::Html, "Html"),
        (ExportFormat::DoNotSave, "Do not save"),
    ];

    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Html => "html",
            ExportFormat::DoNotSave => "",
        }
    }
}

/// Write every selected format to `<base>.<ext>`.
///
/// An empty record list still produces valid (degenerate) files. Returns
/// without writing anything when "Do not save" is among the selections.
pub fn export_all(
    records: &[ScopeRecord],
    monetary: bool,
    base: &str,
    formats: &[ExportFormat],
) -> Result<()> {
    if formats.contains(&ExportFormat::DoNotSave) {
        info!("\"Do not save\" selected, skipping export");
        return Ok(());
    }

    for format in formats {
        let path = format!("{}.{}", base, format.extension());
        let file = File::create(Path::new(&path))
            .with_context(|| format!("Failed to create {}", path))?;

        match format {
            ExportFormat::Txt => text::write(records, monetary, file)?,
            ExportFormat::Json => json::write(records, file)?,
            ExportFormat::Csv => csv::write(records, file)?,
            ExportFormat::Html => html::write(records, file)?,
            ExportFormat::DoNotSave => unreachable!(),
        }

        info!("Wrote {} records to {}", records.len(), path);
    }

    Ok(())
}
