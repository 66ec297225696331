//! League-access probe: the one step that talks to the network.

use crate::{espn::http::EspnClient, LeagueId, LeagueSnapshot, Season};

use super::section;

/// Try to fetch the league and print its basic shape.
///
/// Any failure of the fetch or the body parse is reported and converted
/// into `None`; callers keep going with whatever is available.
pub async fn probe_league(
    client: &EspnClient,
    league_id: LeagueId,
    season: Season,
) -> Option<LeagueSnapshot> {
    section("TESTING LEAGUE ACCESS");
    println!("Connecting to league {} (season {})...", league_id, season);

    match client.get_league_snapshot(league_id, season).await {
        Ok(league) => {
            println!(
                "✓ League connected: {}",
                league.name().unwrap_or("Unknown Name")
            );
            println!("  Teams: {}", league.team_count());
            println!(
                "  Current week: {}",
                league
                    .current_week()
                    .map(|w| w.to_string())
                    .unwrap_or_else(|| "Unknown".to_string())
            );
            Some(league)
        }
        Err(e) => {
            println!("✗ Public access failed: {}", e);
            None
        }
    }
}
