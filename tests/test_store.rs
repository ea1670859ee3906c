//! CRUD behavior of the DuckDB-backed record store.

mod common;

use cardtrack::error::CardtrackError;
use cardtrack::store::CardStore;

#[test]
fn insert_assigns_id_and_creation_timestamp() {
    let (ct, _tmp) = common::setup_engine();
    let store = ct.store();

    let record = common::record_with_identity(
        "2023 Panini Prizm CJ Stroud #339",
        "CJ Stroud",
        "#339",
        2023,
    );
    assert_eq!(record.id, None);
    assert_eq!(record.created_at, None);

    let inserted = store.insert(&record).unwrap();
    assert!(inserted.id.is_some());
    assert!(inserted.created_at.is_some());

    let second = store.insert(&record).unwrap();
    assert!(second.id.unwrap() > inserted.id.unwrap());
}

#[test]
fn roundtrip_preserves_every_field() {
    let (ct, _tmp) = common::setup_engine();
    let store = ct.store();

    let mut record = common::record_with_identity(
        "2022 Topps Chrome Julio Rodriguez Blue Refractor #17/99 Auto RC",
        "Julio Rodriguez",
        "#17",
        2022,
    );
    record.card_set = Some("Topps Chrome".to_string());
    record.card_type = "Blue Refractor".to_string();
    record.print_run = Some("/99".to_string());
    record.is_rookie = true;
    record.is_autograph = true;
    record.sport = "Baseball".to_string();
    record.raw_price = Some(120.5);
    record.psa9_price = Some(200.0);
    record.psa10_price = Some(450.0);

    let inserted = store.insert(&record).unwrap();
    let loaded = store.get_by_id(inserted.id.unwrap()).unwrap().unwrap();

    assert_eq!(loaded.title, record.title);
    assert_eq!(loaded.player_name, record.player_name);
    assert_eq!(loaded.year, Some(2022));
    assert_eq!(loaded.card_set.as_deref(), Some("Topps Chrome"));
    assert_eq!(loaded.card_type, "Blue Refractor");
    assert_eq!(loaded.card_number.as_deref(), Some("#17"));
    assert_eq!(loaded.print_run.as_deref(), Some("/99"));
    assert!(loaded.is_rookie);
    assert!(loaded.is_autograph);
    assert_eq!(loaded.sport, "Baseball");
    assert_eq!(loaded.raw_price, Some(120.5));
    assert_eq!(loaded.psa9_price, Some(200.0));
    assert_eq!(loaded.psa10_price, Some(450.0));
    assert_eq!(loaded.created_at, inserted.created_at);
}

#[test]
fn optional_fields_roundtrip_as_none() {
    let (ct, _tmp) = common::setup_engine();
    let store = ct.store();

    let mut record = common::record_with_identity("Mystery lot", "x", "#1", 2023);
    record.player_name = None;
    record.year = None;
    record.card_number = None;

    let inserted = store.insert(&record).unwrap();
    let loaded = store.get_by_id(inserted.id.unwrap()).unwrap().unwrap();

    assert_eq!(loaded.player_name, None);
    assert_eq!(loaded.year, None);
    assert_eq!(loaded.card_number, None);
    assert_eq!(loaded.raw_price, None);
}

#[test]
fn list_all_returns_records_in_insertion_order() {
    let (ct, _tmp) = common::setup_engine();
    let store = ct.store();

    for (title, number) in [("a", "#1"), ("b", "#2"), ("c", "#3")] {
        store
            .insert(&common::record_with_identity(title, "Player", number, 2023))
            .unwrap();
    }

    let all = store.list_all().unwrap();
    let titles: Vec<&str> = all.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "b", "c"]);
}

#[test]
fn update_overwrites_derived_fields_only() {
    let (ct, _tmp) = common::setup_engine();
    let store = ct.store();

    let mut record = common::record_with_identity(
        "2023 Prizm CJ Stroud #339",
        "CJ Stroud",
        "#339",
        2023,
    );
    record.raw_price = Some(99.0);
    let inserted = store.insert(&record).unwrap();
    let id = inserted.id.unwrap();

    let mut changed = inserted.clone();
    changed.title = "should not stick".to_string();
    changed.player_name = Some("C.J. Stroud".to_string());
    changed.sport = "Football".to_string();
    changed.raw_price = Some(1.0);
    store.update(id, &changed).unwrap();

    let loaded = store.get_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.title, "2023 Prizm CJ Stroud #339");
    assert_eq!(loaded.player_name.as_deref(), Some("C.J. Stroud"));
    assert_eq!(loaded.sport, "Football");
    assert_eq!(loaded.raw_price, Some(99.0));
    assert_eq!(loaded.created_at, inserted.created_at);
}

#[test]
fn delete_removes_the_record() {
    let (ct, _tmp) = common::setup_engine();
    let store = ct.store();

    let inserted = store
        .insert(&common::record_with_identity("x", "Player", "#1", 2023))
        .unwrap();
    let id = inserted.id.unwrap();

    store.delete(id).unwrap();
    assert!(store.get_by_id(id).unwrap().is_none());
}

#[test]
fn missing_ids_surface_as_not_found() {
    let (ct, _tmp) = common::setup_engine();
    let store = ct.store();

    assert!(store.get_by_id(9999).unwrap().is_none());

    let err = store.delete(9999).unwrap_err();
    assert!(matches!(err, CardtrackError::NotFound(_)));

    let record = common::record_with_identity("x", "Player", "#1", 2023);
    let err = store.update(9999, &record).unwrap_err();
    assert!(matches!(err, CardtrackError::NotFound(_)));
}
