use crate::csv_constants::TRANSACTION_CSV_HEADERS;
use crate::dataset::TabularRecord;
use crate::enums::{PaymentMethod, TxStatus, TxType, VehicleClass};
use crate::errors::RecordError;
use ridedesk_filter::Filterable;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// One row of the console's driver transaction page. The amount keeps its
/// display formatting ("₹45,000"); the filter engine strips it when needed.
/// The time slot is the stored "HH:MM AM/PM - HH:MM AM/PM" range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverTransaction {
    pub tx_id: String,
    pub driver_name: String,
    pub vehicle_class: VehicleClass,
    pub tx_type: TxType,
    pub payment_method: PaymentMethod,
    pub amount: String,
    pub status: TxStatus,
    pub date: String,
    pub time_slot: String,

    #[serde(skip)]
    json_value: Value,
}

impl TabularRecord for DriverTransaction {
    const HEADERS: &'static [&'static str] = TRANSACTION_CSV_HEADERS;

    fn from_csv_record(record: &csv::StringRecord) -> Result<Self, RecordError> {
        let get_field =
            |index: usize| -> String { record.get(index).unwrap_or("").trim().to_string() };

        let transaction = DriverTransaction {
            tx_id: get_field(0),
            driver_name: get_field(1),
            vehicle_class: VehicleClass::from_str(&get_field(2)).map_err(|_| {
                RecordError::ParseError(format!("Invalid vehicle class: {}", get_field(2)))
            })?,
            tx_type: TxType::from_str(&get_field(3)).map_err(|_| {
                RecordError::ParseError(format!("Invalid transaction type: {}", get_field(3)))
            })?,
            payment_method: PaymentMethod::from_str(&get_field(4)).map_err(|_| {
                RecordError::ParseError(format!("Invalid payment method: {}", get_field(4)))
            })?,
            amount: get_field(5),
            status: TxStatus::from_str(&get_field(6)).map_err(|_| {
                RecordError::ParseError(format!("Invalid transaction status: {}", get_field(6)))
            })?,
            date: get_field(7),
            time_slot: get_field(8),
            json_value: Value::Null,
        };

        if transaction.tx_id.is_empty() {
            return Err(RecordError::ParseError("Missing transaction id".to_string()));
        }

        Ok(transaction.finalize())
    }

    fn to_csv_record(&self) -> Vec<String> {
        vec![
            self.tx_id.clone(),
            self.driver_name.clone(),
            self.vehicle_class.to_string(),
            self.tx_type.to_string(),
            self.payment_method.to_string(),
            self.amount.clone(),
            self.status.to_string(),
            self.date.clone(),
            self.time_slot.clone(),
        ]
    }

    fn record_id(&self) -> &str {
        &self.tx_id
    }

    fn finalize(mut self) -> Self {
        self.json_value = serde_json::to_value(&self).unwrap_or(Value::Null);
        self
    }
}

impl Filterable for DriverTransaction {
    fn as_json_value(&self) -> &Value {
        &self.json_value
    }
}

impl std::fmt::Display for DriverTransaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(json_str) => write!(f, "{}", json_str),
            Err(e) => {
                write!(f, "Failed to format DriverTransaction: {}", e)?;
                Err(std::fmt::Error)
            }
        }
    }
}
