//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use types::{LeagueId, Season};

#[derive(Debug, Parser)]
#[clap(
    name = "espn-draft-probe",
    about = "Probe an ESPN Fantasy Football league for draft, team, and roster access"
)]
pub struct DraftProbe {
    /// League ID (or set `ESPN_PROBE_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Season year (e.g. 2025).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,
}
