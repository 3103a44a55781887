//! Canned filter schemas for each console page. The page owns its
//! descriptors; the keys name the serialized record fields.

use ridedesk_filter::{FieldDescriptor, FilterSchema, NumericBounds, SelectOption};

fn options(values: &[&str]) -> Vec<SelectOption> {
    values
        .iter()
        .map(|v| SelectOption::new(*v, *v))
        .collect()
}

fn vehicle_class_options() -> Vec<SelectOption> {
    options(&["Auto", "Mini", "Sedan", "SUV"])
}

/// User management page: name, role, status, city, joined date
pub fn users_page() -> FilterSchema {
    FilterSchema::new(vec![
        FieldDescriptor::text("full_name", "Name"),
        FieldDescriptor::multi_select(
            "role",
            "Role",
            options(&["Admin", "Manager", "Dispatcher", "Support"]),
        ),
        FieldDescriptor::categorical("status", "Status", options(&["Active", "Suspended", "Invited"])),
        FieldDescriptor::text("city", "City"),
        FieldDescriptor::date_range("joined", "Joined"),
    ])
    .expect("users page keys are unique")
}

/// Driver transaction page: driver, vehicle class, type, payment method,
/// amount, date, time slot
pub fn transactions_page() -> FilterSchema {
    FilterSchema::new(vec![
        FieldDescriptor::text("driver_name", "Driver"),
        FieldDescriptor::multi_select("vehicle_class", "Vehicle class", vehicle_class_options()),
        FieldDescriptor::categorical("tx_type", "Type", options(&["Credit", "Debit"])),
        FieldDescriptor::multi_select(
            "payment_method",
            "Payment method",
            options(&["Cash", "Card", "Wallet", "UPI"]),
        ),
        FieldDescriptor::numeric_range(
            "amount",
            "Amount",
            Some(NumericBounds {
                min: 0.0,
                max: 100_000.0,
                step: 100.0,
            }),
        ),
        FieldDescriptor::date_range("date", "Date"),
        FieldDescriptor::time_of_day("time_slot", "Time slot"),
    ])
    .expect("transactions page keys are unique")
}

/// Fare rule page: label, vehicle class, day, time slot, base fare, active
pub fn fare_rules_page() -> FilterSchema {
    FilterSchema::new(vec![
        FieldDescriptor::text("label", "Label"),
        FieldDescriptor::multi_select("vehicle_class", "Vehicle class", vehicle_class_options()),
        FieldDescriptor::categorical(
            "day",
            "Day",
            options(&[
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ]),
        ),
        FieldDescriptor::time_of_day("time_slot", "Time slot"),
        FieldDescriptor::numeric_range(
            "base_fare",
            "Base fare",
            Some(NumericBounds {
                min: 0.0,
                max: 1_000.0,
                step: 10.0,
            }),
        ),
        FieldDescriptor::categorical("active", "Active", options(&["true", "false"])),
    ])
    .expect("fare rules page keys are unique")
}
