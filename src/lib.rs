//! ESPN Fantasy Football Draft Probe
//!
//! A diagnostic CLI that checks whether ESPN's Fantasy Football read API
//! exposes draft, team, and roster data for a league. It fetches one league
//! payload, inspects which capabilities are actually present, and prints a
//! human-readable report plus a verdict on whether live draft monitoring is
//! feasible from this data.
//!
//! ## What it checks
//!
//! - **League access**: can the league be reached without authentication,
//!   and does it report a name, team count, and current week?
//! - **Draft access**: does the payload carry a draft object with an
//!   enumerable list of picks?
//! - **Rosters**: do teams expose owners and roster entries with player
//!   names and positions?
//!
//! Every probed field is optional in the data model; missing data renders
//! as a placeholder instead of an error. Only a failure to construct the
//! HTTP client aborts the run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use espn_draft_probe::{espn::http::EspnClient, probe, LeagueId, Season};
//!
//! # async fn example() -> espn_draft_probe::Result<()> {
//! let client = EspnClient::new()?;
//! let league =
//!     probe::league::probe_league(&client, LeagueId::new(449753582), Season::default()).await;
//! probe::draft::probe_draft(league.as_ref());
//! probe::roster::probe_rosters(league.as_ref());
//! probe::summary::print_summary(league.is_some());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the probe at a different league without passing a flag:
//! ```bash
//! export ESPN_PROBE_LEAGUE_ID=123456
//! ```

pub mod cli;
pub mod error;
pub mod espn;
pub mod probe;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, Position, Season, Week};
pub use error::{ProbeError, Result};
pub use espn::types::LeagueSnapshot;

pub const LEAGUE_ID_ENV_VAR: &str = "ESPN_PROBE_LEAGUE_ID";

/// League probed when neither the flag nor the env var is set.
pub const DEFAULT_LEAGUE_ID: u32 = 449_753_582;
