use fieldvisits::core::query::{chains, run, sub_chains};
use fieldvisits::core::{Scope, VisitFilter};
use fieldvisits::models::{VisitRecord, YesNo};

fn visit(id: &str, chain: &str, sub: &str, venue: &str, date: &str) -> VisitRecord {
    let mut v = VisitRecord::blank(date, "eleni");
    v.id = id.to_string();
    v.chain = chain.to_string();
    v.sub_chain = sub.to_string();
    v.venue_name = venue.to_string();
    v
}

fn dataset() -> Vec<VisitRecord> {
    let mut a = visit("a", "Μασούτης", "Attica", "Kifisias", "2025-03-02");
    a.venue_city = "Athens".to_string();
    a.needs_follow_up = YesNo::Yes;
    a.problems = "Printer OFFLINE".to_string();

    let mut b = visit("b", "Σκλαβενίτης", "North", "Kalamaria", "2025-03-10");
    b.assigned_to = "member2".to_string();
    b.store_manager = "Maria".to_string();

    let c = visit("c", "Μασούτης", "West", "Patras", "2025-02-20");
    let d = visit("d", "Μασούτης", "Attica", "Glyfada", "2025-03-02");
    vec![a, b, c, d]
}

fn ids(out: &[&VisitRecord]) -> Vec<String> {
    out.iter().map(|v| v.id.clone()).collect()
}

#[test]
fn test_empty_filter_sorts_by_date_desc_stably() {
    let data = dataset();
    let out = run(&data, &VisitFilter::default(), &Scope::all());
    // a and d share a date and keep their stored order.
    assert_eq!(ids(&out), ["b", "a", "d", "c"]);
}

#[test]
fn test_free_text_is_case_insensitive_over_searchable_fields() {
    let data = dataset();

    let filter = VisitFilter {
        q: Some("printer offline".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&run(&data, &filter, &Scope::all())), ["a"]);

    let filter = VisitFilter {
        q: Some("MARIA".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&run(&data, &filter, &Scope::all())), ["b"]);

    // chain is not a searchable field
    let filter = VisitFilter {
        q: Some("Σκλαβενίτης".to_string()),
        ..Default::default()
    };
    assert!(run(&data, &filter, &Scope::all()).is_empty());
}

#[test]
fn test_exact_filters_combine() {
    let data = dataset();
    let filter = VisitFilter {
        member: Some("eleni".to_string()),
        chain: Some("Μασούτης".to_string()),
        follow_up: Some(YesNo::No),
        status: Some("planned".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&run(&data, &filter, &Scope::all())), ["d", "c"]);
}

#[test]
fn test_date_bounds_are_inclusive() {
    let data = dataset();
    let filter = VisitFilter {
        from: Some("2025-03-02".to_string()),
        to: Some("2025-03-02".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&run(&data, &filter, &Scope::all())), ["a", "d"]);

    let filter = VisitFilter {
        to: Some("2025-02-28".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&run(&data, &filter, &Scope::all())), ["c"]);
}

#[test]
fn test_empty_strings_are_unset() {
    let data = dataset();
    let filter = VisitFilter {
        q: Some(String::new()),
        member: Some(String::new()),
        from: Some(String::new()),
        ..Default::default()
    };
    assert!(filter.is_empty());
    assert_eq!(run(&data, &filter, &Scope::all()).len(), 4);
}

#[test]
fn test_scope_restricts_before_filters() {
    let data = dataset();
    let scope = Scope::chain("Μασούτης").with_sub_chain("Attica");
    assert_eq!(ids(&run(&data, &VisitFilter::default(), &scope)), ["a", "d"]);
    assert_eq!(scope.label(), "Μασούτης / Attica");
    assert_eq!(Scope::all().label(), "All chains");
    assert_eq!(Scope::chain("AB").label(), "AB");
}

#[test]
fn test_query_does_not_touch_input() {
    let data = dataset();
    let before = data.clone();
    let filter = VisitFilter {
        q: Some("a".to_string()),
        ..Default::default()
    };
    let first = ids(&run(&data, &filter, &Scope::all()));
    let second = ids(&run(&data, &filter, &Scope::all()));
    assert_eq!(first, second);
    assert_eq!(data, before);
}

#[test]
fn test_chains_lists_configured_first_then_found() {
    let data = dataset();
    let suggested = vec!["ΑΒ Βασιλόπουλος".to_string(), "Μασούτης".to_string()];
    assert_eq!(
        chains(&data, &suggested),
        ["ΑΒ Βασιλόπουλος", "Μασούτης", "Σκλαβενίτης"]
    );
    assert_eq!(sub_chains(&data, "Μασούτης"), ["Attica", "West"]);
    assert!(sub_chains(&data, "Nowhere").is_empty());
}
