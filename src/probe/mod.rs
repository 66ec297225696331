//! The probe sequence: league access, draft detection, roster inspection,
//! and the final verdict.
//!
//! Only [`league::probe_league`] touches the network. The later probes are
//! total functions over the snapshot it returns; an absent snapshot degrades
//! each of them to a short message (or a no-op) instead of an error.

pub mod draft;
pub mod league;
pub mod roster;
pub mod summary;

use crate::{LeagueId, DEFAULT_LEAGUE_ID, LEAGUE_ID_ENV_VAR};

/// Picks scanned from the front of the draft order.
pub const PICK_SCAN_LIMIT: usize = 10;
/// Picks actually printed before the loop bails out.
pub const PICK_DISPLAY_LIMIT: usize = 6;
/// Teams inspected by the roster probe.
pub const TEAM_DISPLAY_LIMIT: usize = 3;
/// Players printed per roster.
pub const ROSTER_DISPLAY_LIMIT: usize = 3;

const RULE_WIDTH: usize = 50;

pub(crate) fn section(title: &str) {
    println!("\n{}", title);
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Resolve the league to probe: explicit flag, then env var, then the
/// compiled-in default. An unparseable env value falls through to the
/// default.
pub fn resolve_league_id(flag: Option<LeagueId>) -> LeagueId {
    flag.or_else(|| {
        std::env::var(LEAGUE_ID_ENV_VAR)
            .ok()
            .and_then(|raw| raw.parse().ok())
    })
    .unwrap_or(LeagueId::new(DEFAULT_LEAGUE_ID))
}
