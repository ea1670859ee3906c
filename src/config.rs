use std::path::PathBuf;
use std::time::Duration;

/// Default endpoint for the external player-to-sport lookup service.
/// The player name is appended as a query parameter.
pub const SPORT_LOOKUP_URL: &str = "https://www.thesportsdb.com/api/v1/json/3/searchplayers.php";

/// Default HTTP timeout for external lookup calls.
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Delay between external-service calls during batch maintenance jobs.
/// Rate-limit courtesy only; correctness does not depend on it.
pub const BATCH_THROTTLE: Duration = Duration::from_millis(500);

/// Oldest card year accepted by the year extractor.
pub const MIN_CARD_YEAR: i32 = 1900;

/// The current calendar year, used as the inferred-year fallback and as
/// the upper validation bound (next year is allowed for new releases).
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("cardtrack")
    } else {
        PathBuf::from(".cardtrack")
    }
}
