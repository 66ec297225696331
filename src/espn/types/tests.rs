//! Unit tests for league payload types

use super::*;
use serde_json::json;

fn full_league_json() -> Value {
    json!({
        "id": 449753582,
        "scoringPeriodId": 1,
        "settings": { "name": "The Gridiron Gang" },
        "status": { "currentMatchupPeriod": 3 },
        "members": [
            { "id": "{ABC-123}", "displayName": "coach_carter" }
        ],
        "teams": [
            {
                "id": 1,
                "name": "Team Alpha",
                "owners": ["{ABC-123}"],
                "roster": {
                    "entries": [
                        {
                            "playerPoolEntry": {
                                "player": {
                                    "fullName": "Josh Allen",
                                    "defaultPositionId": 1
                                }
                            }
                        }
                    ]
                }
            },
            {
                "id": 2,
                "location": "Bye Week",
                "nickname": "Believers",
                "owners": ["{DEF-456}"]
            }
        ],
        "draftDetail": {
            "drafted": true,
            "inProgress": false,
            "picks": [
                {
                    "playerId": 4262921,
                    "teamId": 1,
                    "roundId": 1,
                    "roundPickNumber": 1,
                    "overallPickNumber": 1
                }
            ]
        }
    })
}

#[test]
fn test_league_view_deserialization_full() {
    let snapshot = LeagueSnapshot::from_value(full_league_json()).unwrap();

    assert_eq!(snapshot.name(), Some("The Gridiron Gang"));
    assert_eq!(snapshot.team_count(), 2);
    assert_eq!(snapshot.current_week(), Some(Week::new(3)));

    let draft = snapshot.draft().expect("draftDetail should parse");
    assert_eq!(draft.drafted, Some(true));
    assert_eq!(draft.in_progress, Some(false));
    assert_eq!(draft.picks.as_ref().map(Vec::len), Some(1));
}

#[test]
fn test_league_view_deserialization_empty_payload() {
    let snapshot = LeagueSnapshot::from_value(json!({})).unwrap();

    assert_eq!(snapshot.name(), None);
    assert_eq!(snapshot.team_count(), 0);
    assert!(snapshot.teams().is_empty());
    assert_eq!(snapshot.current_week(), None);
    assert!(snapshot.draft().is_none());
    assert!(snapshot.league_fields().is_empty());
    assert!(snapshot.draft_fields().is_empty());
}

#[test]
fn test_current_week_falls_back_to_scoring_period() {
    let snapshot = LeagueSnapshot::from_value(json!({ "scoringPeriodId": 7 })).unwrap();
    assert_eq!(snapshot.current_week(), Some(Week::new(7)));

    // status without a matchup period still falls through
    let snapshot =
        LeagueSnapshot::from_value(json!({ "status": {}, "scoringPeriodId": 4 })).unwrap();
    assert_eq!(snapshot.current_week(), Some(Week::new(4)));
}

#[test]
fn test_draft_pick_display_with_all_fields() {
    let pick: DraftPick = serde_json::from_value(json!({
        "playerId": 4262921,
        "teamId": 5,
        "roundId": 2,
        "roundPickNumber": 3
    }))
    .unwrap();

    assert_eq!(pick.player_display(), "Player 4262921");
    assert_eq!(pick.team_display(), "5");
    assert_eq!(pick.round_display(), "2");
    assert_eq!(pick.slot_display(), "3");
}

#[test]
fn test_draft_pick_display_placeholders() {
    let pick: DraftPick = serde_json::from_value(json!({})).unwrap();

    assert_eq!(pick.player_display(), "Unknown Player");
    assert_eq!(pick.team_display(), "Unknown Team");
    assert_eq!(pick.round_display(), "Unknown Round");
    assert_eq!(pick.slot_display(), "Unknown Pick");
}

#[test]
fn test_draft_pick_prefers_player_name_over_id() {
    let pick: DraftPick = serde_json::from_value(json!({
        "playerName": "Christian McCaffrey",
        "playerId": 3117251
    }))
    .unwrap();

    assert_eq!(pick.player_display(), "Christian McCaffrey");
}

#[test]
fn test_team_name_fallback_to_location_nickname() {
    let snapshot = LeagueSnapshot::from_value(full_league_json()).unwrap();
    let teams = snapshot.teams();

    assert_eq!(teams[0].name_display(), "Team Alpha");
    assert_eq!(teams[1].name_display(), "Bye Week Believers");
}

#[test]
fn test_team_name_placeholder_when_absent() {
    let team: Team = serde_json::from_value(json!({ "id": 9 })).unwrap();
    assert_eq!(team.name_display(), "Unknown");
    assert_eq!(team.id_display(), "9");
}

#[test]
fn test_owner_display_resolves_member_name() {
    let snapshot = LeagueSnapshot::from_value(full_league_json()).unwrap();
    let teams = snapshot.teams();

    // Owner guid present in members -> display name
    assert_eq!(snapshot.owner_display(&teams[0]), "coach_carter");
    // Owner guid unknown to members -> raw guid
    assert_eq!(snapshot.owner_display(&teams[1]), "{DEF-456}");
}

#[test]
fn test_owner_display_placeholder_without_owners() {
    let snapshot = LeagueSnapshot::from_value(json!({})).unwrap();
    let team: Team = serde_json::from_value(json!({ "id": 1 })).unwrap();

    assert_eq!(snapshot.owner_display(&team), "Unknown");
}

#[test]
fn test_roster_entry_name_and_position() {
    let entry: RosterEntry = serde_json::from_value(json!({
        "playerPoolEntry": {
            "player": { "fullName": "Tyreek Hill", "defaultPositionId": 3 }
        }
    }))
    .unwrap();

    assert_eq!(entry.player_name(), "Tyreek Hill");
    assert_eq!(entry.position_display(), "WR");
}

#[test]
fn test_roster_entry_placeholders() {
    let entry: RosterEntry = serde_json::from_value(json!({})).unwrap();
    assert_eq!(entry.player_name(), "Unknown Player");
    assert_eq!(entry.position_display(), "Unknown Position");

    // Player present but with an unmapped position id
    let entry: RosterEntry = serde_json::from_value(json!({
        "playerPoolEntry": { "player": { "defaultPositionId": 42 } }
    }))
    .unwrap();
    assert_eq!(entry.player_name(), "Unknown Player");
    assert_eq!(entry.position_display(), "Unknown Position");
}

#[test]
fn test_league_fields_lists_sorted_top_level_keys() {
    let snapshot = LeagueSnapshot::from_value(json!({
        "teams": [],
        "id": 1,
        "settings": {}
    }))
    .unwrap();

    assert_eq!(snapshot.league_fields(), vec!["id", "settings", "teams"]);
}

#[test]
fn test_draft_fields_lists_draft_object_keys() {
    let snapshot = LeagueSnapshot::from_value(json!({
        "draftDetail": { "drafted": false, "inProgress": false }
    }))
    .unwrap();

    assert_eq!(snapshot.draft_fields(), vec!["drafted", "inProgress"]);
}

#[test]
fn test_draft_detail_without_picks() {
    let snapshot = LeagueSnapshot::from_value(json!({
        "draftDetail": { "drafted": false }
    }))
    .unwrap();

    let draft = snapshot.draft().unwrap();
    assert!(draft.picks.is_none());
}

#[test]
fn test_negative_player_id_for_dst() {
    let pick: DraftPick = serde_json::from_value(json!({ "playerId": -16002 })).unwrap();
    assert_eq!(pick.player_id, Some(PlayerId::new(-16002)));
    assert_eq!(pick.player_display(), "Player -16002");
}
