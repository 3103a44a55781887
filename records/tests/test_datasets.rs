mod common;

use common::*;
use ridedesk_records::{
    matches_search, search_hits, AccountStatus, Dataset, DriverTransaction, FareRule, Role,
    TxStatus, UserRecord, TRANSACTION_CSV_HEADERS,
};
use std::fs;
use tempfile::NamedTempFile;

#[test]
fn test_parse_users() {
    let dataset: Dataset<UserRecord> = Dataset::new_from_str(USER_CSV).unwrap();
    assert_eq!(dataset.len(), 4);

    let first = &dataset.records()[0];
    assert_eq!(first.user_id, "U001");
    assert_eq!(first.full_name, "Rajesh Kumar");
    assert_eq!(first.role, Role::Admin);
    assert_eq!(first.status, AccountStatus::Active);
    assert_eq!(first.joined, "2024-11-02");
}

#[test]
fn test_invalid_rows_are_skipped_not_fatal() {
    let dataset: Dataset<UserRecord> = Dataset::new_from_str(USER_CSV_WITH_INVALID).unwrap();
    assert_eq!(dataset.len(), 3);
    assert!(dataset.iter().all(|user| user.user_id != "U005"));
}

#[test]
fn test_parse_transactions() {
    let dataset: Dataset<DriverTransaction> = Dataset::new_from_str(TRANSACTION_CSV).unwrap();
    assert_eq!(dataset.len(), 4);

    let first = &dataset.records()[0];
    assert_eq!(first.amount, "₹45,000");
    assert_eq!(first.status, TxStatus::Completed);
    assert_eq!(first.time_slot, "05:00 AM - 07:00 AM");
}

#[test]
fn test_duplicate_ids_dropped_first_wins() {
    let dataset: Dataset<DriverTransaction> =
        Dataset::new_from_str(TRANSACTION_CSV_WITH_DUP).unwrap();
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.records()[0].tx_id, "TX1001");
}

#[test]
fn test_parse_fare_rules() {
    let dataset: Dataset<FareRule> = Dataset::new_from_str(FARE_RULE_CSV).unwrap();
    assert_eq!(dataset.len(), 3);

    let night = &dataset.records()[1];
    assert_eq!(night.rule_id, "FR02");
    assert_eq!(night.base_fare, 150.0);
    assert_eq!(night.surge_multiplier, 1.8);
    assert!(night.active);
    assert!(!dataset.records()[2].active);
}

#[test]
fn test_csv_round_trip_preserves_rows_and_headers() {
    let dataset: Dataset<DriverTransaction> = Dataset::new_from_str(TRANSACTION_CSV).unwrap();
    let exported = dataset.to_str().unwrap();

    let first_line = exported.lines().next().unwrap();
    assert_eq!(first_line, TRANSACTION_CSV_HEADERS.join(","));

    let reparsed: Dataset<DriverTransaction> = Dataset::new_from_str(&exported).unwrap();
    assert_eq!(reparsed.len(), dataset.len());
    for (a, b) in reparsed.iter().zip(dataset.iter()) {
        assert_eq!(a.tx_id, b.tx_id);
        assert_eq!(a.amount, b.amount);
        assert_eq!(a.time_slot, b.time_slot);
    }
}

#[test]
fn test_new_from_file() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(temp_file.path(), USER_CSV).unwrap();

    let dataset: Dataset<UserRecord> =
        Dataset::new_from_file(temp_file.path().to_str().unwrap()).unwrap();
    assert_eq!(dataset.len(), 4);
}

#[test]
fn test_missing_file_is_an_error() {
    let result: Result<Dataset<UserRecord>, _> = Dataset::new_from_file("nonexistent_file.csv");
    assert!(result.is_err());
}

#[test]
fn test_free_text_search_spans_all_fields() {
    let dataset: Dataset<UserRecord> = Dataset::new_from_str(USER_CSV).unwrap();
    let mumbai: Vec<_> = dataset
        .iter()
        .filter(|user| matches_search(*user, "mumbai"))
        .collect();
    assert_eq!(mumbai.len(), 2);

    // Matches fields other than the name, and is case-insensitive
    let by_email: Vec<_> = dataset
        .iter()
        .filter(|user| matches_search(*user, "ANITA@"))
        .collect();
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].user_id, "U002");

    let hits = search_hits(&dataset.records()[0], "rajesh");
    assert!(hits.iter().any(|hit| hit.starts_with("full_name:")));
    assert!(hits.iter().any(|hit| hit.starts_with("email:")));
}

#[test]
fn test_search_no_hits() {
    let dataset: Dataset<UserRecord> = Dataset::new_from_str(USER_CSV).unwrap();
    assert!(!matches_search(&dataset.records()[0], "zurich"));
}
