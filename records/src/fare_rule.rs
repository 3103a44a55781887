use crate::csv_constants::FARE_RULE_CSV_HEADERS;
use crate::dataset::TabularRecord;
use crate::enums::VehicleClass;
use crate::errors::RecordError;
use ridedesk_filter::Filterable;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// One pricing configuration row: fares for a vehicle class on a given day
/// and time slot. An inactive rule stays listed but is not applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareRule {
    pub rule_id: String,
    pub label: String,
    pub vehicle_class: VehicleClass,
    pub day: String,
    pub time_slot: String,
    pub base_fare: f64,
    pub per_km: f64,
    pub per_minute: f64,
    pub surge_multiplier: f64,
    pub active: bool,

    #[serde(skip)]
    json_value: Value,
}

fn parse_flag(value: &str) -> Result<bool, RecordError> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(RecordError::ParseError(format!(
            "Invalid active flag: {}",
            other
        ))),
    }
}

impl TabularRecord for FareRule {
    const HEADERS: &'static [&'static str] = FARE_RULE_CSV_HEADERS;

    fn from_csv_record(record: &csv::StringRecord) -> Result<Self, RecordError> {
        let get_field =
            |index: usize| -> String { record.get(index).unwrap_or("").trim().to_string() };

        let parse_f64 = |index: usize, name: &str| -> Result<f64, RecordError> {
            get_field(index).parse().map_err(|_| {
                RecordError::ParseError(format!("Invalid {}: {}", name, get_field(index)))
            })
        };

        let rule = FareRule {
            rule_id: get_field(0),
            label: get_field(1),
            vehicle_class: VehicleClass::from_str(&get_field(2)).map_err(|_| {
                RecordError::ParseError(format!("Invalid vehicle class: {}", get_field(2)))
            })?,
            day: get_field(3),
            time_slot: get_field(4),
            base_fare: parse_f64(5, "base fare")?,
            per_km: parse_f64(6, "per-km rate")?,
            per_minute: parse_f64(7, "per-minute rate")?,
            surge_multiplier: parse_f64(8, "surge multiplier")?,
            active: parse_flag(&get_field(9))?,
            json_value: Value::Null,
        };

        if rule.rule_id.is_empty() {
            return Err(RecordError::ParseError("Missing rule id".to_string()));
        }

        Ok(rule.finalize())
    }

    fn to_csv_record(&self) -> Vec<String> {
        vec![
            self.rule_id.clone(),
            self.label.clone(),
            self.vehicle_class.to_string(),
            self.day.clone(),
            self.time_slot.clone(),
            self.base_fare.to_string(),
            self.per_km.to_string(),
            self.per_minute.to_string(),
            self.surge_multiplier.to_string(),
            self.active.to_string(),
        ]
    }

    fn record_id(&self) -> &str {
        &self.rule_id
    }

    fn finalize(mut self) -> Self {
        self.json_value = serde_json::to_value(&self).unwrap_or(Value::Null);
        self
    }
}

impl Filterable for FareRule {
    fn as_json_value(&self) -> &Value {
        &self.json_value
    }
}

impl std::fmt::Display for FareRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(json_str) => write!(f, "{}", json_str),
            Err(e) => {
                write!(f, "Failed to format FareRule: {}", e)?;
                Err(std::fmt::Error)
            }
        }
    }
}
