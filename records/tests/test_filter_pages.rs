mod common;

use chrono::NaiveDate;
use common::*;
use ridedesk_filter::{applied_tags, FilterValue, FilterValues};
use ridedesk_records::{
    fare_rules_page, transactions_page, users_page, write_csv, Dataset, DriverTransaction,
    FareRule, UserRecord,
};

fn transactions() -> Dataset<DriverTransaction> {
    Dataset::new_from_str(TRANSACTION_CSV).unwrap()
}

#[test]
fn test_no_filters_is_identity() {
    let dataset = transactions();
    let schema = transactions_page();
    let rows = schema.apply(&schema.default_values(), dataset.records());
    assert_eq!(rows.len(), dataset.len());
}

#[test]
fn test_amount_range_strips_currency_formatting() {
    let dataset = transactions();
    let schema = transactions_page();
    let mut values = FilterValues::new();
    values.set(
        "amount",
        FilterValue::Numeric {
            min: Some(10.0),
            max: Some(50.0),
        },
    );
    // "₹45,000" reads as 45000 and is excluded; the plain "30" stays
    let rows = schema.apply(&values, dataset.records());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tx_id, "TX1002");
}

#[test]
fn test_time_from_only_keeps_slots_containing_the_point() {
    let dataset = transactions();
    let schema = transactions_page();
    let mut values = FilterValues::new();
    // 06:00 AM sits inside the 05:00 AM - 07:00 AM slot only
    values.set(
        "time_slot",
        FilterValue::TimeWindow {
            from: Some(360),
            to: None,
        },
    );
    let rows = schema.apply(&values, dataset.records());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tx_id, "TX1001");
}

#[test]
fn test_time_window_overlaps_midnight_crossing_slot() {
    let dataset = transactions();
    let schema = transactions_page();
    let mut values = FilterValues::new();
    // 12:00 AM - 03:00 AM overlaps the 10:00 PM - 02:00 AM slot
    values.set(
        "time_slot",
        FilterValue::TimeWindow {
            from: Some(0),
            to: Some(180),
        },
    );
    let rows = schema.apply(&values, dataset.records());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tx_id, "TX1004");
}

#[test]
fn test_vehicle_class_multi_select_is_case_insensitive() {
    let dataset = transactions();
    let schema = transactions_page();
    let mut values = FilterValues::new();
    values.add_selection("vehicle_class", "Sedan");
    values.add_selection("vehicle_class", "SUV");
    let rows = schema.apply(&values, dataset.records());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].tx_id, "TX1001");
    assert_eq!(rows[1].tx_id, "TX1003");
}

#[test]
fn test_date_range_lower_bound() {
    let dataset = transactions();
    let schema = transactions_page();
    let mut values = FilterValues::new();
    values.set(
        "date",
        FilterValue::Dates {
            from: Some(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()),
            to: None,
        },
    );
    let rows = schema.apply(&values, dataset.records());
    let ids: Vec<_> = rows.iter().map(|tx| tx.tx_id.as_str()).collect();
    assert_eq!(ids, vec!["TX1003", "TX1004"]);
}

#[test]
fn test_removing_a_tag_refilters() {
    let dataset = transactions();
    let schema = transactions_page();
    let mut values = FilterValues::new();
    values.add_selection("payment_method", "UPI");
    values.add_selection("payment_method", "Card");
    assert_eq!(schema.apply(&values, dataset.records()).len(), 2);

    let tags = applied_tags(&schema, &values);
    assert_eq!(tags.len(), 2);
    let upi_tag = tags
        .iter()
        .find(|tag| tag.selection.as_deref() == Some("UPI"))
        .unwrap();
    values.remove_tag(upi_tag);

    let rows = schema.apply(&values, dataset.records());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tx_id, "TX1003");
}

#[test]
fn test_users_page_filters() {
    let dataset: Dataset<UserRecord> = Dataset::new_from_str(USER_CSV).unwrap();
    let schema = users_page();

    let mut values = FilterValues::new();
    values.add_selection("role", "Admin");
    values.add_selection("role", "Manager");
    let rows = schema.apply(&values, dataset.records());
    assert_eq!(rows.len(), 2);

    values.add_selection("status", "Active");
    values.set("city", FilterValue::Text("pun".to_string()));
    let rows = schema.apply(&values, dataset.records());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_id, "U002");

    let mut values = FilterValues::new();
    values.set(
        "joined",
        FilterValue::Dates {
            from: Some(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
            to: Some(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()),
        },
    );
    let rows = schema.apply(&values, dataset.records());
    let ids: Vec<_> = rows.iter().map(|user| user.user_id.as_str()).collect();
    assert_eq!(ids, vec!["U002", "U003"]);
}

#[test]
fn test_fare_rules_page_filters() {
    let dataset: Dataset<FareRule> = Dataset::new_from_str(FARE_RULE_CSV).unwrap();
    let schema = fare_rules_page();

    let mut values = FilterValues::new();
    values.add_selection("active", "true");
    let rows = schema.apply(&values, dataset.records());
    assert_eq!(rows.len(), 2);

    let mut values = FilterValues::new();
    values.set(
        "base_fare",
        FilterValue::Numeric {
            min: Some(100.0),
            max: None,
        },
    );
    let rows = schema.apply(&values, dataset.records());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].rule_id, "FR02");

    // An 11:00 PM - 02:00 AM window overlaps only the night surcharge slot
    let mut values = FilterValues::new();
    values.set(
        "time_slot",
        FilterValue::TimeWindow {
            from: Some(23 * 60),
            to: Some(2 * 60),
        },
    );
    let rows = schema.apply(&values, dataset.records());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].rule_id, "FR02");
}

#[test]
fn test_export_writes_exactly_the_filtered_set() {
    let dataset = transactions();
    let schema = transactions_page();
    let mut values = FilterValues::new();
    values.add_selection("tx_type", "Credit");
    let rows = schema.apply(&values, dataset.records());
    assert_eq!(rows.len(), 3);

    let mut buffer = Vec::new();
    let written = write_csv(rows.iter().copied(), &mut buffer).unwrap();
    assert_eq!(written, 3);

    let exported = String::from_utf8(buffer).unwrap();
    let reparsed: Dataset<DriverTransaction> = Dataset::new_from_str(&exported).unwrap();
    let ids: Vec<_> = reparsed.iter().map(|tx| tx.tx_id.as_str()).collect();
    assert_eq!(ids, vec!["TX1001", "TX1003", "TX1004"]);
}

#[test]
fn test_export_deduplicates_by_id() {
    let dataset = transactions();
    let first = &dataset.records()[0];
    let selection = vec![first, first, &dataset.records()[1]];

    let mut buffer = Vec::new();
    let written = write_csv(selection, &mut buffer).unwrap();
    assert_eq!(written, 2);
}
