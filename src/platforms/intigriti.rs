// src/platforms/intigriti.rs
//! Intigriti feed schema adapter

use serde_json::Value;

use super::{field_str, upper_type, Platform, SchemaAdapter, ScopeSide};
use crate::record::Severity;

/// Impact labels that override bounty eligibility even inside a paying
/// program, compared case-insensitively.
const NON_BOUNTY_IMPACTS: [&str; 2] = ["no bounty", "out of scope"];

/// Intigriti nests its bounty bounds as `{min,max}_bounty.value` objects and
/// annotates each target with an `impact` label. A target only pays when the
/// program pays, the target is in scope, and the impact label does not say
/// otherwise. Out-of-scope targets never pay.
pub struct Intigriti;

impl Intigriti {
    fn bounty_value(program: &Value, key: &str) -> f64 {
        program
            .get(key)
            .and_then(|b| b.get("value"))
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }

    fn is_bug_bounty(program: &Value) -> bool {
        Self::bounty_value(program, "min_bounty") > 0.0
            || Self::bounty_value(program, "max_bounty") > 0.0
    }

    /// Absent `impact` is treated as the literal label "None".
    fn impact(target: &Value) -> String {
        field_str(target, "impact").unwrap_or_else(|| "None".to_string())
    }
}

impl SchemaAdapter for Intigriti {
    fn platform(&self) -> Platform {
        Platform::Intigriti
    }

    fn program_is_bounty(&self, program: &Value) -> Option<bool> {
        Some(Self::is_bug_bounty(program))
    }

    fn asset_identifier(&self, target: &Value) -> String {
        field_str(target, "endpoint").unwrap_or_else(|| "N/A".to_string())
    }

    fn display_type(&self, target: &Value) -> String {
        upper_type(target)
    }

    fn target_bounty(&self, program: &Value, target: &Value, side: ScopeSide) -> Option<bool> {
        let impact = Self::impact(target).to_lowercase();
        Some(
            Self::is_bug_bounty(program)
                && side == ScopeSide::In
                && Self::bounty_value(program, "max_bounty") > 0.0
                && !NON_BOUNTY_IMPACTS.contains(&impact.as_str()),
        )
    }

    fn severity(&self, _program: &Value, target: &Value) -> Option<Severity> {
        Some(Severity::Label(Self::impact(target)))
    }
}
