//! Fixed CSV header orders for each record type. Import and export both use
//! these, so a round trip preserves column order.

pub const USER_CSV_HEADERS: &[&str] = &[
    "User ID",
    "Full Name",
    "Email",
    "Phone",
    "Role",
    "Status",
    "City",
    "Joined",
];

pub const TRANSACTION_CSV_HEADERS: &[&str] = &[
    "Transaction ID",
    "Driver Name",
    "Vehicle Class",
    "Type",
    "Payment Method",
    "Amount",
    "Status",
    "Date",
    "Time Slot",
];

pub const FARE_RULE_CSV_HEADERS: &[&str] = &[
    "Rule ID",
    "Label",
    "Vehicle Class",
    "Day",
    "Time Slot",
    "Base Fare",
    "Per Km",
    "Per Minute",
    "Surge Multiplier",
    "Active",
];
