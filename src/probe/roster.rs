//! Team and roster probe.

use crate::espn::types::LeagueSnapshot;

use super::{section, ROSTER_DISPLAY_LIMIT, TEAM_DISPLAY_LIMIT};

/// Print team and roster info for the first few teams. No league -> no-op.
pub fn probe_rosters(league: Option<&LeagueSnapshot>) {
    let Some(league) = league else {
        return;
    };

    section("TESTING TEAMS AND ROSTERS");

    for line in roster_lines(league) {
        println!("{}", line);
    }
}

/// Render the team/roster report: at most [`TEAM_DISPLAY_LIMIT`] teams, and
/// at most [`ROSTER_DISPLAY_LIMIT`] players per roster.
pub fn roster_lines(league: &LeagueSnapshot) -> Vec<String> {
    let teams = league.teams();
    let mut lines = vec![format!("Found {} teams", teams.len())];

    for team in teams.iter().take(TEAM_DISPLAY_LIMIT) {
        lines.push(String::new());
        lines.push(format!(
            "Team {}: {} (owner: {})",
            team.id_display(),
            team.name_display(),
            league.owner_display(team)
        ));

        match &team.roster {
            Some(roster) => {
                lines.push(format!("  Roster size: {}", roster.entries.len()));
                for entry in roster.entries.iter().take(ROSTER_DISPLAY_LIMIT) {
                    lines.push(format!(
                        "    - {} ({})",
                        entry.player_name(),
                        entry.position_display()
                    ));
                }
            }
            None => lines.push("  ✗ No roster attribute found".to_string()),
        }
    }

    lines
}
