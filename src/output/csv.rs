// src/output/csv.rs
//! CSV export: header row plus one row per record

use anyhow::Result;
use std::io::Write;

use crate::record::ScopeRecord;

const HEADER: [&str; 5] = ["Program", "Asset", "Type", "Bounty", "Severity"];

pub fn write(records: &[ScopeRecord], out: impl Write) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);

    // Header is written even for an empty record list
    writer.write_record(HEADER)?;

    for record in records {
        let bounty = match record.bounty {
            Some(true) => "true",
            Some(false) => "false",
            None => "",
        };
        let severity = record
            .severity
            .as_ref()
            .map(|s| s.to_string())
            .unwrap_or_default();

        writer.write_record([
            record.program.as_str(),
            record.asset.as_str(),
            record.asset_type.as_str(),
            bounty,
            severity.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Severity;

    fn render(records: &[ScopeRecord]) -> String {
        let mut buf = Vec::new();
        write(records, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_plus_one_row_per_record() {
        let records = vec![
            ScopeRecord {
                program: "Acme".to_string(),
                asset: "acme.com".to_string(),
                asset_type: "URL".to_string(),
                bounty: Some(true),
                severity: Some(Severity::label("critical")),
            },
            ScopeRecord {
                program: "Beta".to_string(),
                asset: "beta.com".to_string(),
                asset_type: "API".to_string(),
                bounty: None,
                severity: None,
            },
        ];

        let text = render(&records);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Program,Asset,Type,Bounty,Severity");
        assert_eq!(lines[1], "Acme,acme.com,URL,true,critical");
        assert_eq!(lines[2], "Beta,beta.com,API,,");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let records = vec![ScopeRecord {
            program: "Acme, Inc".to_string(),
            asset: "acme.com".to_string(),
            asset_type: "URL".to_string(),
            bounty: Some(false),
            severity: Some(Severity::Payout(500.0)),
        }];

        let text = render(&records);
        assert!(text.contains("\"Acme, Inc\""));
        assert!(text.contains("500"));
    }
}
