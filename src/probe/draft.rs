//! Draft-access probe: does the league expose a draft with enumerable picks?

use crate::espn::types::{DraftPick, LeagueSnapshot};

use super::{section, PICK_DISPLAY_LIMIT, PICK_SCAN_LIMIT};

pub fn probe_draft(league: Option<&LeagueSnapshot>) {
    let Some(league) = league else {
        println!("\n✗ No league to test draft access");
        return;
    };

    section("TESTING DRAFT ACCESS");

    let Some(draft) = league.draft() else {
        println!("✗ League has no 'draft' attribute");
        println!(
            "  Available league attributes: {}",
            league.league_fields().join(", ")
        );
        return;
    };

    println!("✓ League exposes a draft object");
    println!(
        "  Drafted: {}, in progress: {}",
        flag(draft.drafted),
        flag(draft.in_progress)
    );

    match draft.picks.as_deref() {
        None => {
            println!("✗ Draft object has no 'picks' attribute");
            println!(
                "  Available draft attributes: {}",
                league.draft_fields().join(", ")
            );
        }
        Some([]) => println!("✗ No draft picks found in picks array"),
        Some(picks) => {
            println!("Total draft picks found: {}", picks.len());
            println!("\nDRAFT PICKS DETECTED:");
            for line in pick_lines(picks) {
                println!("{}", line);
            }
        }
    }
}

fn flag(value: Option<bool>) -> String {
    value
        .map(|b| b.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Render the leading picks: scans at most [`PICK_SCAN_LIMIT`] entries and
/// stops after [`PICK_DISPLAY_LIMIT`] have been printed.
pub fn pick_lines(picks: &[DraftPick]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, pick) in picks.iter().take(PICK_SCAN_LIMIT).enumerate() {
        lines.push(format!(
            "  Pick {}: Round {}, Pick {}",
            i + 1,
            pick.round_display(),
            pick.slot_display()
        ));
        lines.push(format!(
            "           Team {} -> {}",
            pick.team_display(),
            pick.player_display()
        ));
        if i + 1 >= PICK_DISPLAY_LIMIT {
            break;
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn picks(n: usize) -> Vec<DraftPick> {
        (1..=n)
            .map(|i| {
                serde_json::from_value(json!({
                    "playerId": i,
                    "teamId": (i % 10) + 1,
                    "roundId": (i - 1) / 10 + 1,
                    "roundPickNumber": (i - 1) % 10 + 1
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_pick_lines_caps_at_display_limit() {
        let lines = pick_lines(&picks(25));
        // Two lines per printed pick
        assert_eq!(lines.len(), PICK_DISPLAY_LIMIT * 2);
        assert!(lines[0].contains("Pick 1:"));
        assert!(lines[lines.len() - 2].contains("Pick 6:"));
    }

    #[test]
    fn test_pick_lines_short_draft_prints_everything() {
        let lines = pick_lines(&picks(3));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_pick_lines_empty() {
        let lines = pick_lines(&[]);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_pick_lines_placeholders_for_missing_fields() {
        let bare: DraftPick = serde_json::from_value(json!({})).unwrap();
        let lines = pick_lines(&[bare]);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Round Unknown Round"));
        assert!(lines[1].contains("Unknown Player"));
        assert!(lines[1].contains("Team Unknown Team"));
    }
}
