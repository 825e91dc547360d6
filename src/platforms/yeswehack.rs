// src/platforms/yeswehack.rs
//! YesWeHack feed schema adapter

use serde_json::Value;

use super::{field_f64, field_str, upper_type, Platform, SchemaAdapter, ScopeSide};
use crate::record::Severity;

/// YesWeHack marks a program as bug bounty when either bounty bound is
/// numeric; VDP entries carry no bounty fields at all. Targets are
/// bounty-eligible when the program is bug bounty with `max_bounty` > 0.
pub struct YesWeHack;

impl YesWeHack {
    fn is_bug_bounty(program: &Value) -> bool {
        program.get("min_bounty").is_some_and(Value::is_number)
            || program.get("max_bounty").is_some_and(Value::is_number)
    }
}

impl SchemaAdapter for YesWeHack {
    fn platform(&self) -> Platform {
        Platform::Yeswehack
    }

    fn program_is_bounty(&self, program: &Value) -> Option<bool> {
        Some(Self::is_bug_bounty(program))
    }

    fn asset_identifier(&self, target: &Value) -> String {
        field_str(target, "target").unwrap_or_else(|| "N/A".to_string())
    }

    fn display_type(&self, target: &Value) -> String {
        upper_type(target)
    }

    fn target_bounty(&self, program: &Value, _target: &Value, _side: ScopeSide) -> Option<bool> {
        let max = field_f64(program, "max_bounty").unwrap_or(0.0);
        Some(Self::is_bug_bounty(program) && max > 0.0)
    }

    fn severity(&self, program: &Value, _target: &Value) -> Option<Severity> {
        field_f64(program, "max_bounty").map(Severity::Payout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_bounty_bound_marks_bug_bounty() {
        let adapter = YesWeHack;
        assert_eq!(
            adapter.program_is_bounty(&json!({"min_bounty": 50, "max_bounty": 2000})),
            Some(true)
        );
        // A single numeric bound is enough
        assert_eq!(adapter.program_is_bounty(&json!({"min_bounty": 0})), Some(true));
        // No bounds, or null bounds, is a VDP
        assert_eq!(adapter.program_is_bounty(&json!({})), Some(false));
        assert_eq!(
            adapter.program_is_bounty(&json!({"min_bounty": null, "max_bounty": null})),
            Some(false)
        );
    }

    #[test]
    fn test_bounty_needs_positive_max() {
        let adapter = YesWeHack;
        let paying = json!({"min_bounty": 50, "max_bounty": 2000});
        assert_eq!(adapter.target_bounty(&paying, &json!({}), ScopeSide::In), Some(true));

        // Bug bounty program with a zero cap pays nothing
        let capped = json!({"min_bounty": 0, "max_bounty": 0});
        assert_eq!(adapter.target_bounty(&capped, &json!({}), ScopeSide::In), Some(false));

        let vdp = json!({});
        assert_eq!(adapter.target_bounty(&vdp, &json!({}), ScopeSide::In), Some(false));
    }

    #[test]
    fn test_severity_is_max_bounty() {
        let adapter = YesWeHack;
        let program = json!({"max_bounty": 1500});
        assert_eq!(
            adapter.severity(&program, &json!({})),
            Some(Severity::Payout(1500.0))
        );
        assert_eq!(adapter.severity(&json!({}), &json!({})), None);
    }

    #[test]
    fn test_type_and_identifier() {
        let adapter = YesWeHack;
        let target = json!({"target": "api.example.com", "type": "api"});
        assert_eq!(adapter.asset_identifier(&target), "api.example.com");
        assert_eq!(adapter.display_type(&target), "API");
    }
}
