//! Shared test fixtures.
//!
//! Provides `setup_engine()`, which builds an in-memory engine with the
//! external lookup disabled and the `card_sets` reference table seeded from
//! an NDJSON temp file, mirroring how production seeds reference data.

use std::io::Write;

use cardtrack::models::CardRecord;
use cardtrack::Cardtrack;

/// Engine with sample reference data. Keep the `TempDir` alive for the
/// duration of the test so the NDJSON file outlives table registration.
pub fn setup_engine() -> (Cardtrack, tempfile::TempDir) {
    let ct = Cardtrack::builder()
        .in_memory()
        .no_lookup()
        .throttle(std::time::Duration::ZERO)
        .build()
        .unwrap();

    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("card_sets.ndjson");
    let mut file = std::fs::File::create(&path).unwrap();
    for row in sample_set_rows() {
        writeln!(file, "{}", row).unwrap();
    }
    drop(file);

    ct.load_reference_sets(path.to_str().unwrap()).unwrap();
    (ct, tmp)
}

fn sample_set_rows() -> Vec<serde_json::Value> {
    vec![
        serde_json::json!({
            "name": "topps-chrome-baseball",
            "displayName": "Topps Chrome Baseball",
            "searchText": "topps chrome",
            "sport": "Baseball"
        }),
        serde_json::json!({
            "name": "donruss-optic-football",
            "displayName": "Donruss Optic Football",
            "searchText": "donruss optic",
            "sport": "Football"
        }),
        serde_json::json!({
            "name": "upper-deck-young-guns",
            "displayName": "Upper Deck Young Guns",
            "searchText": "young guns",
            "sport": "Hockey"
        }),
        // Jargon-looking metadata: the player extractor discards a token
        // whose only reference hits look like this.
        serde_json::json!({
            "name": "topps-genesis",
            "displayName": "Genesis Collection",
            "searchText": "genesis collection edition",
            "sport": "Baseball"
        }),
    ]
}

/// A minimal record with the given identity fields, for store/dedupe tests.
pub fn record_with_identity(
    title: &str,
    player: &str,
    number: &str,
    year: i32,
) -> CardRecord {
    CardRecord {
        id: None,
        title: title.to_string(),
        summary_title: title.to_string(),
        player_name: Some(player.to_string()),
        year: Some(year),
        year_inferred: false,
        card_set: None,
        card_type: "Base".to_string(),
        card_number: Some(number.to_string()),
        print_run: None,
        is_rookie: false,
        is_autograph: false,
        sport: "Unknown".to_string(),
        raw_price: None,
        psa9_price: None,
        psa10_price: None,
        created_at: None,
    }
}
