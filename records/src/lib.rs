mod csv_constants;
mod dataset;
mod enums;
mod errors;
mod fare_rule;
mod pages;
mod search;
mod transaction;
mod user;

pub use csv_constants::{FARE_RULE_CSV_HEADERS, TRANSACTION_CSV_HEADERS, USER_CSV_HEADERS};
pub use dataset::{write_csv, Dataset, TabularRecord};
pub use enums::{AccountStatus, PaymentMethod, Role, TxStatus, TxType, VehicleClass};
pub use errors::RecordError;
pub use fare_rule::FareRule;
pub use pages::{fare_rules_page, transactions_page, users_page};
pub use search::{matches_search, search_hits};
pub use transaction::DriverTransaction;
pub use user::UserRecord;
