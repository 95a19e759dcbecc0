#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// BoundaryEnvelope decoding

#[test]
fn BoundaryEnvelope___from_bytes___empty_object_is_success() {
    let envelope = BoundaryEnvelope::from_bytes(b"{}").unwrap();

    assert!(envelope.is_success());
    assert!(envelope.query.is_none());
    assert!(envelope.column_titles.is_none());
}

#[test]
fn BoundaryEnvelope___from_bytes___reads_column_titles_wire_name() {
    let json = br#"{"query": "{}", "columnTitles": ["Name", "Email"]}"#;

    let envelope = BoundaryEnvelope::from_bytes(json).unwrap();

    assert_eq!(
        envelope.column_titles,
        Some(vec!["Name".to_string(), "Email".to_string()])
    );
}

#[test]
fn BoundaryEnvelope___from_bytes___native_query_object_rejected() {
    let json = br#"{"query": {"operation": "count", "collection": "orders"}}"#;

    let result = BoundaryEnvelope::from_bytes(json);

    assert!(result.is_err());
}

#[test]
fn BoundaryEnvelope___from_bytes___non_string_error_rejected() {
    let result = BoundaryEnvelope::from_bytes(br#"{"error": 42}"#);

    assert!(result.is_err());
}

#[test]
fn BoundaryEnvelope___from_bytes___ignores_unknown_fields() {
    let envelope = BoundaryEnvelope::from_bytes(br#"{"elapsedMs": 12}"#).unwrap();

    assert!(envelope.is_success());
}

// Error mapping

#[test_case(CallSite::Initialize ; "initialize")]
#[test_case(CallSite::GenerateQuery ; "generate query")]
fn BoundaryEnvelope___into_result___success_passes_through(site: CallSite) {
    let envelope = BoundaryEnvelope::query("{}", None);

    let result = envelope.clone().into_result(site).unwrap();

    assert_eq!(result, envelope);
}

#[test]
fn BoundaryEnvelope___into_result___initialize_error_maps_to_initialization_failed() {
    let envelope = BoundaryEnvelope::error("invalid api key");

    let err = envelope.into_result(CallSite::Initialize).unwrap_err();

    assert!(matches!(err, QueryError::InitializationFailed(ref m) if m == "invalid api key"));
}

#[test]
fn BoundaryEnvelope___into_result___generate_error_maps_to_query_generation_failed() {
    let envelope = BoundaryEnvelope::error("rate limited");

    let err = envelope.into_result(CallSite::GenerateQuery).unwrap_err();

    assert!(matches!(err, QueryError::QueryGenerationFailed(ref m) if m == "rate limited"));
}

#[test]
fn BoundaryEnvelope___into_result___error_wins_over_success_fields() {
    let envelope = BoundaryEnvelope {
        error: Some("partial failure".to_string()),
        query: Some(r#"{"operation":"count","collection":"orders"}"#.to_string()),
        column_titles: Some(vec!["Count".to_string()]),
    };

    let result = envelope.into_result(CallSite::GenerateQuery);

    assert!(result.is_err());
}

#[test]
fn BoundaryEnvelope___into_result___empty_error_counts_as_success() {
    let envelope = BoundaryEnvelope::error("");

    let result = envelope.into_result(CallSite::Initialize);

    assert!(result.is_ok());
}

#[test]
fn BoundaryEnvelope___to_bytes___omits_absent_fields() {
    let bytes = BoundaryEnvelope::default().to_bytes().unwrap();

    assert_eq!(bytes, b"{}");
}
