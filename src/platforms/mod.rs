// src/platforms/mod.rs
//! Schema adapters: one per bug bounty platform feed format
//!
//! Each platform encodes "does this pay", "asset type" and "scope"
//! differently. The adapters normalize all four schemas into [`ScopeRecord`]s
//! through one shared iteration loop.

use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;

use crate::filter::{FilterOptions, ScopeFilter};
use crate::record::{ScopeRecord, Severity};

pub mod bugcrowd;
pub mod hackerone;
pub mod intigriti;
pub mod yeswehack;

pub use bugcrowd::Bugcrowd;
pub use hackerone::HackerOne;
pub use intigriti::Intigriti;
pub use yeswehack::YesWeHack;

/// The four supported feed schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Platform {
    Hackerone,
    Bugcrowd,
    Yeswehack,
    Intigriti,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Hackerone,
        Platform::Bugcrowd,
        Platform::Yeswehack,
        Platform::Intigriti,
    ];

    /// Public feed URL (arkadiyt/bounty-targets-data mirror).
    pub fn feed_url(&self) -> &'static str {
        match self {
            Platform::Hackerone => {
                "https://raw.githubusercontent.com/arkadiyt/bounty-targets-data/refs/heads/main/data/hackerone_data.json"
            }
            Platform::Bugcrowd => {
                "https://raw.githubusercontent.com/arkadiyt/bounty-targets-data/refs/heads/main/data/bugcrowd_data.json"
            }
            Platform::Yeswehack => {
                "https://raw.githubusercontent.com/arkadiyt/bounty-targets-data/refs/heads/main/data/yeswehack_data.json"
            }
            Platform::Intigriti => {
                "https://raw.githubusercontent.com/arkadiyt/bounty-targets-data/refs/heads/main/data/intigriti_data.json"
            }
        }
    }

    /// Whether the severity slot carries a monetary payout rather than a
    /// qualitative label.
    pub fn monetary(&self) -> bool {
        matches!(self, Platform::Bugcrowd | Platform::Yeswehack)
    }

    /// Whether the platform distinguishes bounty programs from VDPs at the
    /// program level. Bugcrowd feeds carry no such concept.
    pub fn has_program_type(&self) -> bool {
        !matches!(self, Platform::Bugcrowd)
    }

    pub fn adapter(&self) -> Box<dyn SchemaAdapter> {
        match self {
            Platform::Hackerone => Box::new(HackerOne),
            Platform::Bugcrowd => Box::new(Bugcrowd),
            Platform::Yeswehack => Box::new(YesWeHack),
            Platform::Intigriti => Box::new(Intigriti),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Hackerone => "HackerOne",
            Platform::Bugcrowd => "Bugcrowd",
            Platform::Yeswehack => "YesWeHack",
            Platform::Intigriti => "Intigriti",
        };
        write!(f, "{}", name)
    }
}

/// Which list a target was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeSide {
    In,
    Out,
}

/// Per-platform normalization rules. One implementation per feed schema;
/// the shared [`normalize`] loop drives them all identically.
pub trait SchemaAdapter {
    fn platform(&self) -> Platform;

    /// Program-level bounty status. `None` when the platform has no
    /// program-level concept (Bugcrowd).
    fn program_is_bounty(&self, program: &Value) -> Option<bool>;

    /// Free-form asset identifier (domain, endpoint, app id). "N/A" when
    /// the feed omits it.
    fn asset_identifier(&self, target: &Value) -> String;

    /// Asset type in display form: original casing where the schema has a
    /// dedicated field (HackerOne), upper-cased `type` otherwise. Filter
    /// comparison upper-cases this again, so matching stays
    /// case-insensitive either way.
    fn display_type(&self, target: &Value) -> String;

    /// Per-target bounty eligibility. `None` when the feed carries no
    /// signal for this target.
    fn target_bounty(&self, program: &Value, target: &Value, side: ScopeSide) -> Option<bool>;

    /// Severity tier or payout amount for this target.
    fn severity(&self, program: &Value, target: &Value) -> Option<Severity>;
}

/// Program name, "N/A" when absent.
pub(crate) fn program_name(program: &Value) -> String {
    field_str(program, "name").unwrap_or_else(|| "N/A".to_string())
}

/// Optional string field lookup.
pub(crate) fn field_str(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Optional numeric field lookup.
pub(crate) fn field_f64(value: &Value, key: &str) -> Option<f64> {
    value.get(key).and_then(Value::as_f64)
}

/// Upper-cased `type` field, "UNKNOWN" when absent. Shared by every schema
/// except HackerOne's dedicated `asset_type`.
pub(crate) fn upper_type(target: &Value) -> String {
    field_str(target, "type")
        .unwrap_or_else(|| "unknown".to_string())
        .to_uppercase()
}

/// One of a program's scope lists. A missing or malformed `targets` /
/// `in_scope` / `out_of_scope` structure degrades to an empty list, never
/// an error.
fn scope_list<'a>(program: &'a Value, side: ScopeSide) -> &'a [Value] {
    let key = match side {
        ScopeSide::In => "in_scope",
        ScopeSide::Out => "out_of_scope",
    };
    program
        .get("targets")
        .and_then(|t| t.get(key))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Targets selected by the scope filter, each tagged with the side it came
/// from. "All" concatenates in-scope first, preserving feed order.
pub(crate) fn scope_targets<'a>(
    program: &'a Value,
    scope: ScopeFilter,
) -> Vec<(&'a Value, ScopeSide)> {
    let mut targets = Vec::new();
    if matches!(scope, ScopeFilter::In | ScopeFilter::All) {
        targets.extend(
            scope_list(program, ScopeSide::In)
                .iter()
                .map(|t| (t, ScopeSide::In)),
        );
    }
    if matches!(scope, ScopeFilter::Out | ScopeFilter::All) {
        targets.extend(
            scope_list(program, ScopeSide::Out)
                .iter()
                .map(|t| (t, ScopeSide::Out)),
        );
    }
    targets
}

/// Run the full conjunctive filter pipeline over a feed.
///
/// Program-level checks run before target iteration; per-target checks are
/// asset-type membership and bounty eligibility. Output order follows feed
/// order, so identical inputs produce identical sequences.
pub fn normalize(
    adapter: &dyn SchemaAdapter,
    programs: &[Value],
    filters: &FilterOptions,
) -> Vec<ScopeRecord> {
    let mut records = Vec::new();

    for program in programs {
        if !filters.accepts_program(adapter.program_is_bounty(program)) {
            continue;
        }

        let name = program_name(program);

        for (target, side) in scope_targets(program, filters.scope) {
            let display_type = adapter.display_type(target);
            if !filters.accepts_type(&display_type) {
                continue;
            }

            let bounty = adapter.target_bounty(program, target, side);
            if !filters.accepts_bounty(bounty) {
                continue;
            }

            records.push(ScopeRecord {
                program: name.clone(),
                asset: adapter.asset_identifier(target),
                asset_type: display_type,
                bounty,
                severity: adapter.severity(program, target),
            });
        }
    }

    records
}

/// Collect the asset types actually present in a feed (both scope sides),
/// in display form, sorted. This drives the operator's asset-type menu so
/// the options always match real data.
pub fn discover_asset_types(adapter: &dyn SchemaAdapter, programs: &[Value]) -> Vec<String> {
    let mut types = BTreeSet::new();
    for program in programs {
        for (target, _) in scope_targets(program, ScopeFilter::All) {
            types.insert(adapter.display_type(target));
        }
    }
    types.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scope_list_missing_targets_is_empty() {
        let program = json!({"name": "NoTargets"});
        assert!(scope_list(&program, ScopeSide::In).is_empty());
        assert!(scope_list(&program, ScopeSide::Out).is_empty());
    }

    #[test]
    fn test_scope_list_malformed_targets_is_empty() {
        let program = json!({"name": "Bad", "targets": "oops"});
        assert!(scope_list(&program, ScopeSide::In).is_empty());

        let program = json!({"name": "Bad", "targets": {"in_scope": 42}});
        assert!(scope_list(&program, ScopeSide::In).is_empty());
    }

    #[test]
    fn test_scope_targets_all_concatenates_in_then_out() {
        let program = json!({
            "targets": {
                "in_scope": [{"target": "a"}, {"target": "b"}],
                "out_of_scope": [{"target": "c"}]
            }
        });

        let all = scope_targets(&program, ScopeFilter::All);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].1, ScopeSide::In);
        assert_eq!(all[1].1, ScopeSide::In);
        assert_eq!(all[2].1, ScopeSide::Out);

        assert_eq!(scope_targets(&program, ScopeFilter::In).len(), 2);
        assert_eq!(scope_targets(&program, ScopeFilter::Out).len(), 1);
    }

    #[test]
    fn test_upper_type_defaults_to_unknown() {
        assert_eq!(upper_type(&json!({"type": "api"})), "API");
        assert_eq!(upper_type(&json!({})), "UNKNOWN");
        assert_eq!(upper_type(&json!({"type": 7})), "UNKNOWN");
    }

    #[test]
    fn test_platform_display_names() {
        assert_eq!(Platform::Hackerone.to_string(), "HackerOne");
        assert_eq!(Platform::Yeswehack.to_string(), "YesWeHack");
    }

    #[test]
    fn test_platform_traits() {
        assert!(Platform::Bugcrowd.monetary());
        assert!(Platform::Yeswehack.monetary());
        assert!(!Platform::Hackerone.monetary());
        assert!(!Platform::Intigriti.monetary());

        assert!(!Platform::Bugcrowd.has_program_type());
        assert!(Platform::Hackerone.has_program_type());
    }

    #[test]
    fn test_discover_asset_types_covers_both_sides() {
        let programs = vec![json!({
            "name": "P",
            "targets": {
                "in_scope": [{"type": "web"}, {"type": "api"}],
                "out_of_scope": [{"type": "mobile"}]
            }
        })];

        let adapter = Platform::Bugcrowd.adapter();
        let types = discover_asset_types(adapter.as_ref(), &programs);
        assert_eq!(types, vec!["API", "MOBILE", "WEB"]);
    }
}
