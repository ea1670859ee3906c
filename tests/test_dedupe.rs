//! Identity-based deduplication over the persisted record set.

mod common;

use cardtrack::store::CardStore;

#[test]
fn survivor_has_the_most_price_data() {
    let (ct, _tmp) = common::setup_engine();
    let store = ct.store();

    let bare = common::record_with_identity(
        "2023 Panini Prizm CJ Stroud #339",
        "CJ Stroud",
        "#339",
        2023,
    );
    let mut priced = bare.clone();
    priced.psa10_price = Some(450.0);

    store.insert(&bare).unwrap();
    let kept = store.insert(&priced).unwrap();

    let stats = ct.dedupe().unwrap();
    assert_eq!(stats.groups, 1);
    assert_eq!(stats.deleted, 1);

    let remaining = store.list_all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
    assert_eq!(remaining[0].psa10_price, Some(450.0));
}

#[test]
fn equal_completeness_keeps_the_oldest_record() {
    let (ct, _tmp) = common::setup_engine();
    let store = ct.store();

    let record = common::record_with_identity(
        "2022 Topps Chrome Julio Rodriguez #17",
        "Julio Rodriguez",
        "#17",
        2022,
    );
    let first = store.insert(&record).unwrap();
    store.insert(&record).unwrap();
    store.insert(&record).unwrap();

    let stats = ct.dedupe().unwrap();
    assert_eq!(stats.deleted, 2);

    let remaining = store.list_all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, first.id);
}

#[test]
fn identity_requires_all_three_components() {
    let (ct, _tmp) = common::setup_engine();
    let store = ct.store();

    // Same player and year, but no card number: never grouped.
    let mut incomplete = common::record_with_identity(
        "2023 Panini Prizm CJ Stroud",
        "CJ Stroud",
        "#339",
        2023,
    );
    incomplete.card_number = None;
    store.insert(&incomplete).unwrap();
    store.insert(&incomplete).unwrap();

    let stats = ct.dedupe().unwrap();
    assert_eq!(stats.groups, 0);
    assert_eq!(stats.deleted, 0);
    assert_eq!(store.list_all().unwrap().len(), 2);
}

#[test]
fn identity_comparison_is_case_insensitive() {
    let (ct, _tmp) = common::setup_engine();
    let store = ct.store();

    let lower = common::record_with_identity(
        "2023 panini prizm cj stroud #bdc100",
        "cj stroud",
        "#bdc100",
        2023,
    );
    let upper = common::record_with_identity(
        "2023 Panini Prizm CJ Stroud #BDC100",
        "CJ Stroud",
        "#BDC100",
        2023,
    );
    store.insert(&lower).unwrap();
    store.insert(&upper).unwrap();

    let stats = ct.dedupe().unwrap();
    assert_eq!(stats.groups, 1);
    assert_eq!(stats.deleted, 1);
}

#[test]
fn distinct_identities_are_untouched() {
    let (ct, _tmp) = common::setup_engine();
    let store = ct.store();

    for (title, player, number) in [
        ("2023 Prizm CJ Stroud #339", "CJ Stroud", "#339"),
        ("2023 Prizm CJ Stroud #340", "CJ Stroud", "#340"),
        ("2023 Prizm Bryce Young #339", "Bryce Young", "#339"),
    ] {
        store
            .insert(&common::record_with_identity(title, player, number, 2023))
            .unwrap();
    }

    let stats = ct.dedupe().unwrap();
    assert_eq!(stats.groups, 0);
    assert_eq!(stats.deleted, 0);
    assert_eq!(store.list_all().unwrap().len(), 3);
}

#[test]
fn dedupe_is_idempotent() {
    let (ct, _tmp) = common::setup_engine();
    let store = ct.store();

    let record = common::record_with_identity(
        "2023 Panini Prizm CJ Stroud #339",
        "CJ Stroud",
        "#339",
        2023,
    );
    store.insert(&record).unwrap();
    store.insert(&record).unwrap();

    assert_eq!(ct.dedupe().unwrap().deleted, 1);
    let second = ct.dedupe().unwrap();
    assert_eq!(second.groups, 0);
    assert_eq!(second.deleted, 0);
}
