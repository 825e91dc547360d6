// src/output/json.rs
//! JSON export: the full record list, pretty-printed with 2-space indent

use anyhow::Result;
use std::io::Write;

use crate::record::ScopeRecord;

pub fn write(records: &[ScopeRecord], mut out: impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, records)?;
    out.flush()?;
    Ok(())
}
