//! End-to-end pipeline tests over the spec'd example listings, plus the
//! batch refresh and repair passes.

mod common;

use cardtrack::config;
use cardtrack::error::CardtrackError;
use cardtrack::models::RawListing;
use cardtrack::store::CardStore;

// ---------------------------------------------------------------------------
// Extraction scenarios
// ---------------------------------------------------------------------------

#[test]
fn full_extraction_of_rich_title() {
    let (ct, _tmp) = common::setup_engine();
    let listing = RawListing::from_title(
        "2023 Panini Prizm CJ Stroud Orange Lazer PSA 10 Gem Mint #339 RC Rookie Texans",
    );
    let record = ct.extract(&listing).unwrap();

    assert_eq!(record.year, Some(2023));
    assert!(!record.year_inferred);
    assert_eq!(record.card_set.as_deref(), Some("Panini Prizm"));
    assert_ne!(record.card_type, "Base");
    assert!(record.card_type.contains("Orange"));
    assert!(record.card_type.contains("Lazer"));
    assert_eq!(record.card_number.as_deref(), Some("#339"));
    assert!(record.is_rookie);
    assert!(!record.is_autograph);
    assert_eq!(record.player_name.as_deref(), Some("CJ Stroud"));
    assert_eq!(record.sport, "Football");
}

#[test]
fn missing_year_is_inferred_and_flagged() {
    let (ct, _tmp) = common::setup_engine();
    let record = ct
        .extract(&RawListing::from_title("Panini Prizm CJ Stroud Texans"))
        .unwrap();
    assert_eq!(record.year, Some(config::current_year()));
    assert!(record.year_inferred);
}

#[test]
fn chrome_not_duplicated_between_set_and_type() {
    let (ct, _tmp) = common::setup_engine();
    let record = ct
        .extract(&RawListing::from_title(
            "2023 Bowman Chrome Jackson Holliday Chrome Refractor #BDC100",
        ))
        .unwrap();
    assert_eq!(record.card_set.as_deref(), Some("Bowman Chrome"));
    assert_eq!(record.card_type, "Refractor");
}

#[test]
fn card_number_and_print_run_both_extracted_when_adjacent() {
    let (ct, _tmp) = common::setup_engine();
    let record = ct
        .extract(&RawListing::from_title(
            "2022 Topps Chrome Julio Rodriguez #17/99 Blue Refractor",
        ))
        .unwrap();
    assert_eq!(record.card_number.as_deref(), Some("#17"));
    assert_eq!(record.print_run.as_deref(), Some("/99"));
}

#[test]
fn population_count_never_becomes_the_card_number() {
    let (ct, _tmp) = common::setup_engine();
    let record = ct
        .extract(&RawListing::from_title("2023 Panini Prizm CJ Stroud POP 22"))
        .unwrap();
    assert_eq!(record.card_number, None);
}

#[test]
fn bare_graded_title_degrades_to_sentinels() {
    let (ct, _tmp) = common::setup_engine();
    let record = ct
        .extract(&RawListing::from_title("Unbranded oddity PSA 10"))
        .unwrap();
    assert_eq!(record.card_set, None);
    assert_eq!(record.card_type, "Base");
    assert_eq!(record.sport, "Unknown");
}

#[test]
fn empty_title_is_the_only_hard_error() {
    let (ct, _tmp) = common::setup_engine();
    let err = ct.extract(&RawListing::from_title("   ")).unwrap_err();
    assert!(matches!(err, CardtrackError::InvalidArgument(_)));
}

// ---------------------------------------------------------------------------
// Invariants
// ---------------------------------------------------------------------------

#[test]
fn pipeline_is_idempotent() {
    let (ct, _tmp) = common::setup_engine();
    let listing = RawListing::from_title(
        "2023 Panini Prizm CJ Stroud Orange Lazer PSA 10 Gem Mint #339 RC Rookie Texans",
    );
    let a = ct.extract(&listing).unwrap();
    let b = ct.extract(&listing).unwrap();
    assert_eq!(serde_json::to_value(&a).unwrap(), serde_json::to_value(&b).unwrap());
}

#[test]
fn format_invariants_hold_across_varied_titles() {
    let (ct, _tmp) = common::setup_engine();
    let titles = [
        "2023 Panini Prizm CJ Stroud #339 RC",
        "2022 Topps Chrome Julio Rodriguez #17/99",
        "2019 Bowman Wander Franco BDC100",
        "Unbranded oddity PSA 10",
        "1994-95 Fleer Ultra Michael Jordan Bulls",
    ];
    for title in titles {
        let record = ct.extract(&RawListing::from_title(title)).unwrap();
        assert!(!record.card_type.is_empty(), "cardType null-ish for {}", title);
        assert!(!record.sport.is_empty(), "sport null-ish for {}", title);
        if let Some(number) = &record.card_number {
            assert!(number.starts_with('#'), "bad number {} for {}", number, title);
        }
        if let Some(run) = &record.print_run {
            assert!(run.starts_with('/'), "bad print run {} for {}", run, title);
        }
    }
}

// ---------------------------------------------------------------------------
// Batch maintenance
// ---------------------------------------------------------------------------

#[test]
fn refresh_overwrites_derived_fields_and_preserves_prices() {
    let (ct, _tmp) = common::setup_engine();
    let store = ct.store();

    let mut record = ct
        .extract(&RawListing::from_title(
            "2023 Panini Prizm CJ Stroud #339 RC Texans",
        ))
        .unwrap();
    record.psa10_price = Some(450.0);
    let inserted = store.insert(&record).unwrap();
    let id = inserted.id.unwrap();

    // Sabotage a derived field, as a bad historical extraction would.
    let mut broken = inserted.clone();
    broken.player_name = Some("Wrong Name".to_string());
    broken.sport = "Unknown".to_string();
    store.update(id, &broken).unwrap();

    let stats = ct.refresh_records().unwrap();
    assert_eq!(stats.processed, 1);
    assert_eq!(stats.updated, 1);
    assert_eq!(stats.failed, 0);

    let fixed = store.get_by_id(id).unwrap().unwrap();
    assert_eq!(fixed.player_name.as_deref(), Some("CJ Stroud"));
    assert_eq!(fixed.sport, "Football");
    // Title and price points are never touched by refresh.
    assert_eq!(fixed.title, inserted.title);
    assert_eq!(fixed.psa10_price, Some(450.0));
}

#[test]
fn refresh_is_idempotent_over_the_store() {
    let (ct, _tmp) = common::setup_engine();
    ct.ingest(&RawListing::from_title(
        "2023 Panini Prizm CJ Stroud #339 RC Texans",
    ))
    .unwrap();

    ct.refresh_records().unwrap();
    let first: Vec<_> = ct.store().list_all().unwrap();
    ct.refresh_records().unwrap();
    let second: Vec<_> = ct.store().list_all().unwrap();

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn repair_pass_clears_denylisted_truncations() {
    let (ct, _tmp) = common::setup_engine();
    let store = ct.store();

    let inserted = ct
        .ingest(&RawListing::from_title("2023 Prizm Anthony Colts"))
        .unwrap();
    assert_eq!(inserted.player_name.as_deref(), Some("Anthony"));

    let stats = ct.repair_player_names().unwrap();
    assert_eq!(stats.updated, 1);

    let repaired = store.get_by_id(inserted.id.unwrap()).unwrap().unwrap();
    assert_eq!(repaired.player_name, None);
}
