// src/platforms/bugcrowd.rs
//! Bugcrowd feed schema adapter

use serde_json::Value;

use super::{field_f64, field_str, upper_type, Platform, SchemaAdapter, ScopeSide};
use crate::record::Severity;

/// Bugcrowd has no program-level bounty/VDP distinction in its feed. A
/// target is bounty-eligible exactly when the program's `max_payout` is a
/// positive number, and that payout doubles as the severity slot.
pub struct Bugcrowd;

impl Bugcrowd {
    fn max_payout(program: &Value) -> Option<f64> {
        field_f64(program, "max_payout")
    }
}

impl SchemaAdapter for Bugcrowd {
    fn platform(&self) -> Platform {
        Platform::Bugcrowd
    }

    fn program_is_bounty(&self, _program: &Value) -> Option<bool> {
        None
    }

    fn asset_identifier(&self, target: &Value) -> String {
        field_str(target, "target").unwrap_or_else(|| "N/A".to_string())
    }

    fn display_type(&self, target: &Value) -> String {
        upper_type(target)
    }

    fn target_bounty(&self, program: &Value, _target: &Value, _side: ScopeSide) -> Option<bool> {
        Some(Self::max_payout(program).is_some_and(|p| p > 0.0))
    }

    fn severity(&self, program: &Value, _target: &Value) -> Option<Severity> {
        Self::max_payout(program).map(Severity::Payout)
    }
}
