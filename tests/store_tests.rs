use fieldvisits::core::{Scope, Store, StoreSettings, VisitFilter};
use fieldvisits::db::persistence::{TEAM_KEY, VISITS_KEY};
use fieldvisits::db::{MemoryPersistence, Persistence};
use fieldvisits::errors::AppError;
use fieldvisits::models::{CheckIn, Field, GeoPoint, NoteField, Status, VisitPatch, YesNo};
use fieldvisits::utils::date::today_iso;

fn fresh_store() -> Store<MemoryPersistence> {
    Store::open(MemoryPersistence::new(), StoreSettings::default())
}

fn visit_patch(chain: &str, venue: &str, date: &str) -> VisitPatch {
    VisitPatch::new()
        .set(Field::Chain, chain)
        .set(Field::VenueName, venue)
        .set(Field::VisitDate, date)
}

fn add(store: &mut Store<MemoryPersistence>, chain: &str, venue: &str, date: &str) -> String {
    store
        .create(visit_patch(chain, venue, date))
        .expect("create visit")
        .id
        .clone()
}

#[test]
fn test_open_seeds_default_team_and_persists_it() {
    let store = fresh_store();
    let ids: Vec<&str> = store.team().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["eleni", "member2", "member3"]);
    assert!(store.visits().is_empty());

    let raw = store.persistence().raw(TEAM_KEY).expect("team written");
    assert!(raw.contains("\"eleni\""));
    assert_eq!(store.persistence().raw(VISITS_KEY), Some("[]"));
}

#[test]
fn test_open_with_corrupt_visits_starts_empty_with_warning() {
    let p = MemoryPersistence::new().with_entry(VISITS_KEY, "{not json");
    let store = Store::open(p, StoreSettings::default());
    assert!(store.visits().is_empty());
    assert!(store.persistence_warning().is_some());
}

#[test]
fn test_open_keeps_stored_team() {
    let p = MemoryPersistence::new().with_entry(TEAM_KEY, r#"[{"id":"nikos","name":"Nikos"}]"#);
    let store = Store::open(p, StoreSettings::default());
    assert_eq!(store.team().len(), 1);
    assert_eq!(store.member_name("nikos"), "Nikos");
    assert_eq!(store.member_name("ghost"), "unknown");
}

#[test]
fn test_create_fills_defaults_and_prepends() {
    let mut store = fresh_store();
    let first = add(&mut store, "AB", "First", "2025-01-01");
    let second = add(&mut store, "AB", "Second", "2025-01-02");
    assert_ne!(first, second);
    assert_eq!(store.visits()[0].id, second);

    let v = store.get(&first).expect("first visit");
    assert_eq!(v.status, Status::Planned);
    assert_eq!(v.assigned_to, "eleni");
    assert_eq!(v.staffs_engagement.value(), 3);
    assert_eq!(v.needs_follow_up, YesNo::No);
    assert_eq!(v.created_at, today_iso());
    assert!(v.checkins.is_empty());

    let ops: Vec<&str> = store
        .persistence()
        .log_entries()
        .iter()
        .map(|e| e.operation.as_str())
        .collect();
    assert_eq!(ops, ["init", "add", "add"]);
}

#[test]
fn test_create_defaults_visit_date_to_today() {
    let mut store = fresh_store();
    let v = store
        .create(
            VisitPatch::new()
                .set(Field::Chain, "AB")
                .set(Field::VenueName, "Today"),
        )
        .expect("create");
    assert_eq!(v.visit_date, today_iso());
}

#[test]
fn test_create_rejects_missing_required_fields() {
    let mut store = fresh_store();
    let err = store
        .create(VisitPatch::new().set(Field::Chain, "AB").set(Field::VenueName, "  "))
        .unwrap_err();
    match err {
        AppError::Validation { field, .. } => assert_eq!(field, "venueName"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(store.visits().is_empty());
}

#[test]
fn test_create_rejects_bad_date_and_status() {
    let mut store = fresh_store();
    let bad_date = store.create(visit_patch("AB", "X", "01/02/2025"));
    assert!(matches!(bad_date, Err(AppError::Validation { .. })));

    let bad_status = store.create(visit_patch("AB", "X", "2025-01-02").set(Field::Status, "maybe"));
    assert!(matches!(bad_status, Err(AppError::Validation { .. })));
    assert!(store.visits().is_empty());
}

#[test]
fn test_update_changes_only_named_fields() {
    let mut store = fresh_store();
    let id = add(&mut store, "AB", "Venue", "2025-01-01");

    let patch = VisitPatch::new()
        .set(Field::StoreManager, "Maria")
        .set(Field::NeedsFollowUp, "yes");
    let v = store.update(&id, &patch).expect("update");
    assert_eq!(v.store_manager, "Maria");
    assert_eq!(v.needs_follow_up, YesNo::Yes);
    assert_eq!(v.venue_name, "Venue");
    assert_eq!(v.id, id);
}

#[test]
fn test_update_rejected_patch_changes_nothing() {
    let mut store = fresh_store();
    let id = add(&mut store, "AB", "Venue", "2025-01-01");

    let patch = VisitPatch::new()
        .set(Field::StoreManager, "Maria")
        .set(Field::VenueName, "");
    assert!(store.update(&id, &patch).is_err());
    assert_eq!(store.get(&id).expect("visit").store_manager, "");

    let id_patch = VisitPatch::new().set(Field::Id, "other");
    assert!(store.update(&id, &id_patch).is_err());
    assert!(store.get(&id).is_some());
}

#[test]
fn test_update_unknown_id() {
    let mut store = fresh_store();
    let err = store
        .update("nope", &VisitPatch::new().set(Field::Problems, "x"))
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(id) if id == "nope"));
}

#[test]
fn test_remove_is_noop_for_unknown_id() {
    let mut store = fresh_store();
    let id = add(&mut store, "AB", "Venue", "2025-01-01");
    assert!(!store.remove("missing"));
    assert_eq!(store.visits().len(), 1);
    assert!(store.remove(&id));
    assert!(store.visits().is_empty());
}

#[test]
fn test_checkins_are_appended_in_order() {
    let mut store = fresh_store();
    let id = add(&mut store, "AB", "Venue", "2025-01-01");

    store
        .append_checkin(&id, CheckIn::at("2025-01-01T09:00:00.000Z", None))
        .expect("first");
    let last = store
        .append_checkin(
            &id,
            CheckIn::at(
                "2025-01-01T10:00:00.000Z",
                Some(GeoPoint {
                    lat: 40.64,
                    lon: 22.94,
                }),
            ),
        )
        .expect("second")
        .clone();

    assert!(last.has_position());
    let v = store.get(&id).expect("visit");
    assert_eq!(v.checkins.len(), 2);
    assert!(!v.checkins[0].has_position());
    assert_eq!(store.last_checkin(&id), Some(&last));
}

#[test]
fn test_engagement_is_clamped() {
    let mut store = fresh_store();
    let id = add(&mut store, "AB", "Venue", "2025-01-01");

    for _ in 0..5 {
        store.adjust_engagement(&id, 1).expect("up");
    }
    assert_eq!(store.get(&id).expect("visit").staffs_engagement.value(), 5);

    for _ in 0..10 {
        store.adjust_engagement(&id, -1).expect("down");
    }
    assert_eq!(store.get(&id).expect("visit").staffs_engagement.value(), 1);
}

#[test]
fn test_complete_today() {
    let mut store = fresh_store();
    let id = add(&mut store, "AB", "Venue", "2024-12-01");
    let v = store.complete_today(&id).expect("complete");
    assert_eq!(v.status, Status::Completed);
    assert_eq!(v.visit_date, today_iso());
}

#[test]
fn test_append_note_joins_with_space() {
    let mut store = fresh_store();
    let id = add(&mut store, "AB", "Venue", "2025-01-01");

    store
        .append_note(&id, NoteField::Problems, "tablet broken")
        .expect("note");
    store.append_note(&id, NoteField::Problems, "   ").expect("blank");
    let v = store
        .append_note(&id, NoteField::Problems, "no wifi")
        .expect("note");
    assert_eq!(v.problems, "tablet broken no wifi");
    assert_eq!(v.follow_up, "");
}

#[test]
fn test_import_replaces_everything() {
    let mut store = fresh_store();
    add(&mut store, "AB", "Old", "2025-01-01");

    let count = store
        .import_csv("id,chain,venueName\n\"n1\",\"AB\",\"New\"")
        .expect("import");
    assert_eq!(count, 1);
    assert_eq!(store.visits().len(), 1);
    assert_eq!(store.visits()[0].id, "n1");
}

#[test]
fn test_import_without_header_leaves_store_untouched() {
    let mut store = fresh_store();
    let id = add(&mut store, "AB", "Old", "2025-01-01");
    assert!(store.import_csv("").is_err());
    assert_eq!(store.visits().len(), 1);
    assert_eq!(store.visits()[0].id, id);
}

#[test]
fn test_export_then_import_restores_collection() {
    let mut store = fresh_store();
    add(&mut store, "AB", "One", "2025-01-01");
    add(&mut store, "Κρητικός", "Two", "2025-01-03");
    let before = store.visits().to_vec();

    let csv = store.export_csv().expect("export");
    store.import_csv(&csv).expect("import");
    assert_eq!(store.visits(), before.as_slice());
}

#[test]
fn test_rename_member() {
    let mut store = fresh_store();
    store.rename_member("member2", "Giorgos").expect("rename");
    assert_eq!(store.member_name("member2"), "Giorgos");

    let err = store.rename_member("ghost", "X").unwrap_err();
    assert!(matches!(err, AppError::UnknownMember(_)));
}

#[test]
fn test_failed_write_keeps_memory_state_and_warns() {
    let mut store = fresh_store();
    let id = add(&mut store, "AB", "Saved", "2025-01-01");

    let mut p = store.into_persistence();
    p.set_fail_writes(true);
    let mut store = Store::open(p, StoreSettings::default());

    let unsaved = add(&mut store, "AB", "Unsaved", "2025-01-02");
    assert_eq!(store.visits().len(), 2);
    let warning = store.persistence_warning().expect("warning");
    assert!(warning.contains("not saved"));

    let stored = store.persistence().raw(VISITS_KEY).expect("old value");
    assert!(stored.contains(&id));
    assert!(!stored.contains(&unsaved));

    // The next successful write carries the whole collection.
    let mut p = store.into_persistence();
    p.set_fail_writes(false);
    let mut store = Store::open(p, StoreSettings::default());
    assert_eq!(store.visits().len(), 1);
    add(&mut store, "AB", "Later", "2025-01-03");
    assert!(store.persistence_warning().is_none());
}

#[test]
fn test_query_through_store() {
    let mut store = fresh_store();
    add(&mut store, "AB", "Old", "2024-05-01");
    add(&mut store, "AB", "New", "2025-05-01");
    add(&mut store, "Κρητικός", "Other", "2025-06-01");

    let filter = VisitFilter::default();
    let names: Vec<&str> = store
        .query(&filter, &Scope::chain("AB"))
        .iter()
        .map(|v| v.venue_name.as_str())
        .collect();
    assert_eq!(names, ["New", "Old"]);
}

#[test]
fn test_memory_persistence_round_trip() {
    let mut p = MemoryPersistence::new();
    assert_eq!(p.load("k").expect("load"), None);
    p.save("k", "v").expect("save");
    assert_eq!(p.load("k").expect("load").as_deref(), Some("v"));
}
