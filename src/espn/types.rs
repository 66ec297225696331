//! Wire-format views of the ESPN league payload.
//!
//! Every field the probes inspect is optional: the point of the probe is to
//! discover which of these the API actually returns, so an absent field must
//! deserialize cleanly and later render as a placeholder.

use serde::Deserialize;
use serde_json::Value;

use crate::{PlayerId, Position, Result, Week};

/// League `settings` object (subset).
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsView {
    pub name: Option<String>,
}

/// League `status` object (subset).
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueStatus {
    #[serde(rename = "currentMatchupPeriod")]
    pub current_matchup_period: Option<Week>,
}

/// League member (owner account).
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub id: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

/// Draft state and picks, from `view=mDraftDetail`.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftDetail {
    pub drafted: Option<bool>,
    #[serde(rename = "inProgress")]
    pub in_progress: Option<bool>,
    pub picks: Option<Vec<DraftPick>>,
}

/// One draft selection record.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftPick {
    /// Not sent by the current API; probed anyway in case a view adds it.
    #[serde(rename = "playerName")]
    pub player_name: Option<String>,
    #[serde(rename = "playerId")]
    pub player_id: Option<PlayerId>,
    #[serde(rename = "teamId")]
    pub team_id: Option<u32>,
    #[serde(rename = "roundId")]
    pub round_id: Option<u32>,
    #[serde(rename = "roundPickNumber")]
    pub round_pick_number: Option<u32>,
    #[serde(rename = "overallPickNumber")]
    pub overall_pick_number: Option<u32>,
}

impl DraftPick {
    /// Player label: the name if the API sent one, else the player ID, else
    /// a placeholder.
    pub fn player_display(&self) -> String {
        if let Some(name) = &self.player_name {
            return name.clone();
        }
        match self.player_id {
            Some(id) => format!("Player {}", id),
            None => "Unknown Player".to_string(),
        }
    }

    pub fn team_display(&self) -> String {
        display_or(self.team_id, "Unknown Team")
    }

    pub fn round_display(&self) -> String {
        display_or(self.round_id, "Unknown Round")
    }

    pub fn slot_display(&self) -> String {
        display_or(self.round_pick_number, "Unknown Pick")
    }
}

/// Fantasy team, from `view=mTeam` (roster attached by `view=mRoster`).
#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub nickname: Option<String>,
    #[serde(default)]
    pub owners: Vec<String>,
    pub roster: Option<Roster>,
}

impl Team {
    pub fn id_display(&self) -> String {
        display_or(self.id, "Unknown")
    }

    /// Newer payloads carry `name`; older ones split it into location and
    /// nickname.
    pub fn name_display(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        match (&self.location, &self.nickname) {
            (Some(location), Some(nickname)) => format!("{} {}", location, nickname),
            (Some(location), None) => location.clone(),
            (None, Some(nickname)) => nickname.clone(),
            (None, None) => "Unknown".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub entries: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "playerPoolEntry")]
    pub player_pool_entry: Option<PlayerPoolEntry>,
}

impl RosterEntry {
    pub fn player_name(&self) -> String {
        self.player()
            .and_then(|p| p.full_name.clone())
            .unwrap_or_else(|| "Unknown Player".to_string())
    }

    pub fn position_display(&self) -> String {
        self.player()
            .and_then(|p| p.default_position_id)
            .and_then(Position::from_position_id)
            .map(|p| p.to_string())
            .unwrap_or_else(|| "Unknown Position".to_string())
    }

    fn player(&self) -> Option<&RosterPlayer> {
        self.player_pool_entry.as_ref().and_then(|e| e.player.as_ref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerPoolEntry {
    pub player: Option<RosterPlayer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterPlayer {
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(rename = "defaultPositionId")]
    pub default_position_id: Option<i8>,
}

/// Typed view over the whole league payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LeagueView {
    pub settings: Option<SettingsView>,
    pub status: Option<LeagueStatus>,
    #[serde(rename = "scoringPeriodId")]
    pub scoring_period_id: Option<Week>,
    pub teams: Option<Vec<Team>>,
    pub members: Vec<Member>,
    #[serde(rename = "draftDetail")]
    pub draft_detail: Option<DraftDetail>,
}

/// A fetched league: the typed view plus the raw payload it was parsed from.
///
/// The raw value sticks around so that when a capability is missing, the
/// probe can report the field names the API *did* send.
#[derive(Debug, Clone)]
pub struct LeagueSnapshot {
    pub view: LeagueView,
    raw: Value,
}

impl LeagueSnapshot {
    pub fn from_value(raw: Value) -> Result<Self> {
        let view: LeagueView = serde_json::from_value(raw.clone())?;
        Ok(Self { view, raw })
    }

    pub fn name(&self) -> Option<&str> {
        self.view.settings.as_ref().and_then(|s| s.name.as_deref())
    }

    pub fn team_count(&self) -> usize {
        self.view.teams.as_ref().map_or(0, Vec::len)
    }

    pub fn teams(&self) -> &[Team] {
        self.view.teams.as_deref().unwrap_or(&[])
    }

    /// `status.currentMatchupPeriod`, falling back to the top-level scoring
    /// period.
    pub fn current_week(&self) -> Option<Week> {
        self.view
            .status
            .as_ref()
            .and_then(|s| s.current_matchup_period)
            .or(self.view.scoring_period_id)
    }

    pub fn draft(&self) -> Option<&DraftDetail> {
        self.view.draft_detail.as_ref()
    }

    /// Display name for a team owner guid, if the member list has it.
    pub fn member_name(&self, guid: &str) -> Option<&str> {
        self.view
            .members
            .iter()
            .find(|m| m.id.as_deref() == Some(guid))
            .and_then(|m| m.display_name.as_deref())
    }

    /// Owner label for a team: member display name, else the raw guid, else
    /// a placeholder.
    pub fn owner_display(&self, team: &Team) -> String {
        match team.owners.first() {
            Some(guid) => self.member_name(guid).unwrap_or(guid).to_string(),
            None => "Unknown".to_string(),
        }
    }

    /// Top-level field names of the raw payload, sorted.
    pub fn league_fields(&self) -> Vec<String> {
        object_keys(&self.raw)
    }

    /// Field names on the raw `draftDetail` object, sorted.
    pub fn draft_fields(&self) -> Vec<String> {
        self.raw.get("draftDetail").map_or_else(Vec::new, object_keys)
    }
}

fn display_or<T: std::fmt::Display>(value: Option<T>, placeholder: &str) -> String {
    match value {
        Some(v) => v.to_string(),
        None => placeholder.to_string(),
    }
}

fn object_keys(value: &Value) -> Vec<String> {
    match value.as_object() {
        Some(map) => {
            let mut keys: Vec<String> = map.keys().cloned().collect();
            keys.sort();
            keys
        }
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests;
