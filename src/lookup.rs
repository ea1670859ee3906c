//! External player-to-sport lookup.
//!
//! Network-bound and unreliable by contract: timeouts and rate limits are
//! expected. Callers treat every error as "no answer" and continue with
//! the next classification stage.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config;
use crate::error::Result;

/// Maps a player name to a sport label.
pub trait SportLookup {
    /// Returns `Ok(None)` when the service does not know the player.
    fn sport_for_player(&self, name: &str) -> Result<Option<String>>;
}

// ---------------------------------------------------------------------------
// HttpSportLookup
// ---------------------------------------------------------------------------

/// `SportLookup` over an HTTP search endpoint returning JSON of the shape
/// `{"player": [{"strPlayer": ..., "strSport": ...}, ...]}`.
pub struct HttpSportLookup {
    client: Client,
    endpoint: String,
}

impl HttpSportLookup {
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.unwrap_or_else(|| config::SPORT_LOOKUP_URL.to_string()),
        })
    }
}

impl SportLookup for HttpSportLookup {
    fn sport_for_player(&self, name: &str) -> Result<Option<String>> {
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[("p", name)])
            .send()?
            .error_for_status()?;

        let data: serde_json::Value = resp.json()?;
        let sport = data
            .get("player")
            .and_then(|p| p.as_array())
            .and_then(|players| players.first())
            .and_then(|p| p.get("strSport"))
            .and_then(|s| s.as_str())
            .map(normalize_sport_label);

        match &sport {
            Some(s) => debug!(player = name, sport = %s, "external lookup hit"),
            None => debug!(player = name, "external lookup miss"),
        }
        Ok(sport)
    }
}

/// The service reports e.g. "American Football" and "Ice Hockey"; fold
/// those onto the labels the rest of the pipeline uses.
fn normalize_sport_label(raw: &str) -> String {
    match raw.to_lowercase().as_str() {
        "american football" => "Football".to_string(),
        "ice hockey" => "Hockey".to_string(),
        "motorsport" => "Racing".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => "Unknown".to_string(),
            }
        }
    }
}
