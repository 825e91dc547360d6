// src/platforms/hackerone.rs
//! HackerOne feed schema adapter

use serde_json::Value;

use super::{field_str, Platform, SchemaAdapter, ScopeSide};
use crate::record::Severity;

/// HackerOne is the only schema with explicit bounty flags at both levels:
/// `offers_bounties` on the program and `eligible_for_bounty` on the target.
/// Asset types come from a dedicated `asset_type` field and keep their
/// original casing; severity is the qualitative `max_severity` string.
pub struct HackerOne;

impl SchemaAdapter for HackerOne {
    fn platform(&self) -> Platform {
        Platform::Hackerone
    }

    fn program_is_bounty(&self, program: &Value) -> Option<bool> {
        Some(
            program
                .get("offers_bounties")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        )
    }

    fn asset_identifier(&self, target: &Value) -> String {
        field_str(target, "asset_identifier").unwrap_or_else(|| "N/A".to_string())
    }

    fn display_type(&self, target: &Value) -> String {
        field_str(target, "asset_type").unwrap_or_else(|| "N/A".to_string())
    }

    fn target_bounty(&self, _program: &Value, target: &Value, _side: ScopeSide) -> Option<bool> {
        target.get("eligible_for_bounty").and_then(Value::as_bool)
    }

    fn severity(&self, _program: &Value, target: &Value) -> Option<Severity> {
        field_str(target, "max_severity").map(Severity::Label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_program_bounty_flag() {
        let adapter = HackerOne;
        assert_eq!(
            adapter.program_is_bounty(&json!({"offers_bounties": true})),
            Some(true)
        );
        assert_eq!(
            adapter.program_is_bounty(&json!({"offers_bounties": false})),
            Some(false)
        );
        // Absent flag reads as VDP, not as "no concept"
        assert_eq!(adapter.program_is_bounty(&json!({})), Some(false));
    }

    #[test]
    fn test_target_bounty_flag() {
        let adapter = HackerOne;
        let target = json!({"eligible_for_bounty": true});
        assert_eq!(adapter.target_bounty(&json!({}), &target, ScopeSide::In), Some(true));

        // Missing flag is an unknown signal, not false
        assert_eq!(adapter.target_bounty(&json!({}), &json!({}), ScopeSide::In), None);
    }

    #[test]
    fn test_asset_type_keeps_original_casing() {
        let adapter = HackerOne;
        assert_eq!(adapter.display_type(&json!({"asset_type": "Url"})), "Url");
        assert_eq!(adapter.display_type(&json!({})), "N/A");
    }

    #[test]
    fn test_severity_is_max_severity_label() {
        let adapter = HackerOne;
        let target = json!({"max_severity": "critical"});
        assert_eq!(
            adapter.severity(&json!({}), &target),
            Some(Severity::label("critical"))
        );
        assert_eq!(adapter.severity(&json!({}), &json!({})), None);
    }

    #[test]
    fn test_asset_identifier_default() {
        let adapter = HackerOne;
        assert_eq!(
            adapter.asset_identifier(&json!({"asset_identifier": "acme.com"})),
            "acme.com"
        );
        assert_eq!(adapter.asset_identifier(&json!({})), "N/A");
    }
}
