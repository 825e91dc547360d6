// src/output/text.rs
//! Plain text export: one unstyled display line per record

use anyhow::Result;
use std::io::Write;

use crate::record::{format_line, ScopeRecord};

pub fn write(records: &[ScopeRecord], monetary: bool, mut out: impl Write) -> Result<()> {
    for record in records {
        writeln!(out, "{}", format_line(record, monetary, false))?;
    }
    out.flush()?;
    Ok(())
}
