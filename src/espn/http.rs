//! HTTP access to the ESPN Fantasy Football read API.

use std::time::Duration;

use reqwest::{header::ACCEPT, Client};
use serde_json::Value;

use crate::{espn::types::LeagueSnapshot, LeagueId, Result, Season};

/// Base path for ESPN Fantasy Football v3 API.
pub const FFL_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";

/// Views that together cover everything the probes inspect: league settings,
/// teams and owners, rosters, the draft, and season status.
pub const LEAGUE_VIEWS: [&str; 5] = ["mSettings", "mTeam", "mRoster", "mDraftDetail", "mStatus"];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin wrapper around [`reqwest::Client`] pointed at the ESPN API.
///
/// The base URL is injectable so tests can stand up a local mock server.
#[derive(Debug, Clone)]
pub struct EspnClient {
    client: Client,
    base_url: String,
}

impl EspnClient {
    /// Build a client against the real ESPN API.
    pub fn new() -> Result<Self> {
        Self::with_base_url(FFL_BASE_URL)
    }

    /// Build a client against an arbitrary base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the raw league payload with all probe-relevant views attached.
    pub async fn get_league(&self, league_id: LeagueId, season: Season) -> Result<Value> {
        let url = format!(
            "{}/seasons/{}/segments/0/leagues/{}",
            self.base_url, season, league_id
        );
        let params: Vec<(&str, &str)> = LEAGUE_VIEWS.iter().map(|view| ("view", *view)).collect();

        let res = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(res)
    }

    /// Fetch the league and parse it into a [`LeagueSnapshot`].
    pub async fn get_league_snapshot(
        &self,
        league_id: LeagueId,
        season: Season,
    ) -> Result<LeagueSnapshot> {
        let raw = self.get_league(league_id, season).await?; // tarpaulin::skip - HTTP API call
        LeagueSnapshot::from_value(raw)
    }
}
