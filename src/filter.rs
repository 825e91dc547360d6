// src/filter.rs
//! Operator-selected filter predicates applied during normalization

use clap::ValueEnum;
use std::collections::HashSet;

/// Bug bounty vs vulnerability disclosure program filter.
///
/// Only meaningful on platforms that carry a program-level bounty concept
/// (HackerOne, YesWeHack, Intigriti); Bugcrowd feeds always pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProgramTypeFilter {
    /// Only programs that pay bounties
    Bounty,
    /// Only vulnerability disclosure programs
    Vdp,
    /// Both
    All,
}

/// Which scope list(s) of a program to iterate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeFilter {
    /// Only `in_scope` targets
    In,
    /// Only `out_of_scope` targets
    Out,
    /// Both lists, in-scope first
    All,
}

/// Per-target bounty eligibility filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BountyFilter {
    /// Only targets eligible for a bounty
    Eligible,
    /// Only targets not eligible (includes targets with no signal)
    NotEligible,
    /// Both
    All,
}

/// The full set of active predicates. All predicates are conjunctive: a
/// target is accepted only when every one of them passes.
#[derive(Debug, Clone)]
pub struct FilterOptions {
    pub program_type: ProgramTypeFilter,
    /// Upper-cased asset type names; membership is tested on the
    /// upper-cased form so operator selections are case-insensitive.
    pub asset_types: HashSet<String>,
    pub scope: ScopeFilter,
    pub bounty: BountyFilter,
}

impl FilterOptions {
    /// Build filter options, normalizing the asset-type set to upper case.
    pub fn new(
        program_type: ProgramTypeFilter,
        asset_types: impl IntoIterator<Item = String>,
        scope: ScopeFilter,
        bounty: BountyFilter,
    ) -> Self {
        Self {
            program_type,
            asset_types: asset_types.into_iter().map(|t| t.to_uppercase()).collect(),
            scope,
            bounty,
        }
    }

    /// Program-level check: does a program with the given bounty status pass
    /// the program-type filter? `None` means the platform has no
    /// program-level bounty concept and always passes.
    pub fn accepts_program(&self, is_bounty: Option<bool>) -> bool {
        match (self.program_type, is_bounty) {
            (_, None) => true,
            (ProgramTypeFilter::All, _) => true,
            (ProgramTypeFilter::Bounty, Some(b)) => b,
            (ProgramTypeFilter::Vdp, Some(b)) => !b,
        }
    }

    /// Asset-type membership, tested case-insensitively.
    pub fn accepts_type(&self, display_type: &str) -> bool {
        self.asset_types.contains(&display_type.to_uppercase())
    }

    /// Per-target bounty check. A missing signal (`None`) counts as not
    /// eligible, matching how the feeds omit the flag for VDP targets.
    pub fn accepts_bounty(&self, bounty: Option<bool>) -> bool {
        match self.bounty {
            BountyFilter::All => true,
            BountyFilter::Eligible => bounty == Some(true),
            BountyFilter::NotEligible => bounty != Some(true),
        }
    }
}
