use crate::csv_constants::USER_CSV_HEADERS;
use crate::dataset::TabularRecord;
use crate::enums::{AccountStatus, Role};
use crate::errors::RecordError;
use ridedesk_filter::Filterable;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// One row of the console's user management page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub status: AccountStatus,
    pub city: String,
    pub joined: String,

    // Cached JSON rendering of the fields above, for filtering and search
    #[serde(skip)]
    json_value: Value,
}

impl TabularRecord for UserRecord {
    const HEADERS: &'static [&'static str] = USER_CSV_HEADERS;

    fn from_csv_record(record: &csv::StringRecord) -> Result<Self, RecordError> {
        let get_field =
            |index: usize| -> String { record.get(index).unwrap_or("").trim().to_string() };

        let user = UserRecord {
            user_id: get_field(0),
            full_name: get_field(1),
            email: get_field(2),
            phone: get_field(3),
            role: Role::from_str(&get_field(4)).map_err(|_| {
                RecordError::ParseError(format!("Invalid role: {}", get_field(4)))
            })?,
            status: AccountStatus::from_str(&get_field(5)).map_err(|_| {
                RecordError::ParseError(format!("Invalid status: {}", get_field(5)))
            })?,
            city: get_field(6),
            joined: get_field(7),
            json_value: Value::Null,
        };

        if user.user_id.is_empty() {
            return Err(RecordError::ParseError("Missing user id".to_string()));
        }

        Ok(user.finalize())
    }

    fn to_csv_record(&self) -> Vec<String> {
        vec![
            self.user_id.clone(),
            self.full_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.role.to_string(),
            self.status.to_string(),
            self.city.clone(),
            self.joined.clone(),
        ]
    }

    fn record_id(&self) -> &str {
        &self.user_id
    }

    fn finalize(mut self) -> Self {
        self.json_value = serde_json::to_value(&self).unwrap_or(Value::Null);
        self
    }
}

impl Filterable for UserRecord {
    fn as_json_value(&self) -> &Value {
        &self.json_value
    }
}

impl std::fmt::Display for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(json_str) => write!(f, "{}", json_str),
            Err(e) => {
                write!(f, "Failed to format UserRecord: {}", e)?;
                Err(std::fmt::Error)
            }
        }
    }
}
