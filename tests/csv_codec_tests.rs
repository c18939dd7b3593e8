use fieldvisits::errors::AppError;
use fieldvisits::export::csv::{decode, encode, tokenize};
use fieldvisits::models::{CheckIn, Engagement, Field, Status, VisitRecord, YesNo};

fn sample() -> VisitRecord {
    let mut v = VisitRecord::blank("2025-04-01", "eleni");
    v.id = "abc".to_string();
    v.chain = "Μασούτης".to_string();
    v.venue_name = "Store \"One\", Central".to_string();
    v.problems = "line one\nline two".to_string();
    v.needs_follow_up = YesNo::Yes;
    v.staffs_engagement = Engagement::new(5);
    v.checkins = vec![CheckIn {
        ts: "2025-04-01T08:00:00.000Z".to_string(),
        lat: Some(37.98),
        lon: Some(23.72),
    }];
    v
}

#[test]
fn test_encode_empty_is_header_only() {
    let out = encode(&[]).expect("encode");
    assert_eq!(out, Field::header());
    assert!(out.starts_with("id,chain,subChain,venueName,"));
    assert!(out.ends_with(",status,assignedTo,createdAt,checkins"));
}

#[test]
fn test_encode_quotes_every_value_and_flattens_newlines() {
    let out = encode(&[sample()]).expect("encode");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(!out.ends_with('\n'));

    let row = lines[1];
    assert!(row.starts_with("\"abc\",\"Μασούτης\",\"\","));
    assert!(row.contains("\"Store \"\"One\"\", Central\""));
    assert!(row.contains("\"line one line two\""));
    assert!(row.contains("\"5\""));
}

#[test]
fn test_round_trip_keeps_everything_but_newlines() {
    let original = sample();
    let decoded = decode(&encode(&[original.clone()]).expect("encode")).expect("decode");
    assert_eq!(decoded.len(), 1);

    let mut expected = original;
    expected.problems = "line one line two".to_string();
    assert_eq!(decoded[0], expected);
}

#[test]
fn test_decode_without_header_fails() {
    let err = decode("").unwrap_err();
    assert!(matches!(err, AppError::MalformedCsv(_)));

    let err = decode("\n   \n").unwrap_err();
    assert!(matches!(err, AppError::MalformedCsv(_)));
}

#[test]
fn test_decode_header_only_gives_no_records() {
    let records = decode(&Field::header()).expect("decode");
    assert!(records.is_empty());
}

#[test]
fn test_decode_partial_header_and_unknown_columns() {
    let text = "chain,venueName,colour,staffsEngagement\n\"AB\",\"Store\",\"red\",\"9\"";
    let records = decode(text).expect("decode");
    assert_eq!(records.len(), 1);

    let v = &records[0];
    assert_eq!(v.chain, "AB");
    assert_eq!(v.venue_name, "Store");
    assert_eq!(v.staffs_engagement.value(), 5);
    assert_eq!(v.status, Status::Planned);
    assert!(v.checkins.is_empty());
    assert!(!v.id.is_empty());
}

#[test]
fn test_decode_missing_trailing_values_are_empty() {
    let text = "id,chain,venueName,problems\n\"x1\",\"AB\"";
    let records = decode(text).expect("decode");
    assert_eq!(records[0].id, "x1");
    assert_eq!(records[0].venue_name, "");
    assert_eq!(records[0].problems, "");
}

#[test]
fn test_decode_bad_engagement_and_checkins_fall_back() {
    let text = "id,staffsEngagement,checkins\n\"a\",\"lots\",\"not json\"";
    let records = decode(text).expect("decode");
    assert_eq!(records[0].staffs_engagement, Engagement::default());
    assert!(records[0].checkins.is_empty());
}

#[test]
fn test_decode_duplicate_ids_get_fresh_ones() {
    let text = "id,chain\n\"same\",\"A\"\n\"same\",\"B\"\n\"\",\"C\"";
    let records = decode(text).expect("decode");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].id, "same");
    assert_ne!(records[1].id, "same");
    assert!(!records[2].id.is_empty());
    assert_ne!(records[1].id, records[2].id);
}

#[test]
fn test_decode_skips_blank_lines_and_bom() {
    let text = "\u{feff}id,chain\r\n\r\n\"a\",\"A\"\r\n\r\n\"b\",\"B\"\r\n";
    let records = decode(text).expect("decode");
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn test_decode_accepts_unquoted_values() {
    let text = "id,chain,needsFollowUp\nplain,My Market,yes";
    let records = decode(text).expect("decode");
    assert_eq!(records[0].id, "plain");
    assert_eq!(records[0].chain, "My Market");
    assert_eq!(records[0].needs_follow_up, YesNo::Yes);
}

#[test]
fn test_tokenize_quoted_commas_and_escaped_quotes() {
    let tokens = tokenize(r#""a, b","say ""hi""",plain"#);
    assert_eq!(tokens, [r#""a, b""#, r#""say ""hi""""#, "plain"]);
}

#[test]
fn test_unknown_status_survives_round_trip() {
    let text = "id,status\n\"s\",\"on-hold\"";
    let records = decode(text).expect("decode");
    assert_eq!(records[0].status, Status::Other("on-hold".to_string()));
    let again = encode(&records).expect("encode");
    assert!(again.contains("\"on-hold\""));
}
