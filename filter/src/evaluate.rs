use crate::descriptor::{FieldKind, FilterSchema};
use crate::timeslot::{self, TimeSlot};
use crate::values::{FilterValue, FilterValues};
use chrono::NaiveDate;
use serde_json::Value;

/// A record the evaluator can look into. Implementors keep a cached JSON
/// rendering of their fields, keyed the same way the schema keys are.
pub trait Filterable {
    fn as_json_value(&self) -> &Value;
}

impl Filterable for Value {
    fn as_json_value(&self) -> &Value {
        self
    }
}

impl FilterSchema {
    /// Return the records satisfying every non-empty filter criterion.
    ///
    /// Stable: the result preserves the input order and borrows from it.
    /// Entirely empty values return every record. Fields that are missing or
    /// unparsable for a given predicate make that record non-matching for
    /// that predicate only, never an error.
    pub fn apply<'a, R: Filterable>(&self, values: &FilterValues, records: &'a [R]) -> Vec<&'a R> {
        records
            .iter()
            .filter(|record| self.matches(values, *record))
            .collect()
    }

    /// Evaluate a single record against every non-empty criterion
    pub fn matches<R: Filterable>(&self, values: &FilterValues, record: &R) -> bool {
        let fields = record.as_json_value();
        values.iter().all(|(key, value)| {
            if value.is_empty() {
                return true;
            }
            let descriptor = match self.descriptor(key) {
                Some(descriptor) => descriptor,
                // Keys without a descriptor place no constraint
                None => return true,
            };
            let field = match fields.get(key) {
                Some(field) => field,
                None => return false,
            };
            match (&descriptor.kind, value) {
                (FieldKind::Text, FilterValue::Text(needle)) => text_matches(field, needle),
                (FieldKind::Categorical { .. }, FilterValue::Selection(selected)) => {
                    selection_matches(field, selected)
                }
                (FieldKind::NumericRange { .. }, FilterValue::Numeric { min, max }) => {
                    numeric_in_range(field, *min, *max)
                }
                (FieldKind::DateRange, FilterValue::Dates { from, to }) => {
                    date_in_range(field, *from, *to)
                }
                (FieldKind::TimeOfDay, FilterValue::TimeWindow { from, to }) => {
                    time_window_matches(field, *from, *to)
                }
                // A value whose tag disagrees with the descriptor kind is a
                // configuration error surfaced by validate(); here it places
                // no constraint.
                _ => true,
            }
        })
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.to_lowercase()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Case-insensitive substring containment; arrays match on any element
fn text_matches(field: &Value, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    match field {
        Value::Array(items) => items.iter().any(|item| text_matches(item, &needle)),
        _ => as_text(field).map_or(false, |haystack| haystack.contains(&needle)),
    }
}

/// Set membership on the canonical option value, case-insensitive
fn selection_matches(field: &Value, selected: &[String]) -> bool {
    match field {
        Value::Array(items) => items.iter().any(|item| selection_matches(item, selected)),
        _ => as_text(field).map_or(false, |actual| {
            selected
                .iter()
                .any(|candidate| candidate.to_lowercase() == actual)
        }),
    }
}

/// Parse a record field as a number, stripping currency symbols and
/// thousands separators from strings ("₹45,000" reads as 45000).
fn parse_numeric(field: &Value) -> Option<f64> {
    match field {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            if cleaned.is_empty() {
                None
            } else {
                cleaned.parse().ok()
            }
        }
        _ => None,
    }
}

fn numeric_in_range(field: &Value, min: Option<f64>, max: Option<f64>) -> bool {
    let n = match parse_numeric(field) {
        Some(n) => n,
        None => return false,
    };
    min.map_or(true, |min| n >= min) && max.map_or(true, |max| n <= max)
}

/// Normalize a stored date to a calendar day. Accepts "YYYY-MM-DD",
/// "DD/MM/YYYY", and RFC 3339 timestamps (date part only, offset dropped).
fn parse_day(field: &Value) -> Option<NaiveDate> {
    let s = match field {
        Value::String(s) => s.trim(),
        _ => return None,
    };
    let date_part = s.split('T').next().unwrap_or(s);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%d/%m/%Y"))
        .ok()
}

fn date_in_range(field: &Value, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    let day = match parse_day(field) {
        Some(day) => day,
        None => return false,
    };
    from.map_or(true, |from| day >= from) && to.map_or(true, |to| day <= to)
}

/// A single bound keeps records whose stored slot contains the bound as a
/// point; two bounds keep records whose slot overlaps `[from, to)`.
fn time_window_matches(field: &Value, from: Option<u16>, to: Option<u16>) -> bool {
    let slot = match field {
        Value::String(s) => match timeslot::parse_slot(s) {
            Some(slot) => slot,
            None => return false,
        },
        _ => return false,
    };
    match (from, to) {
        (Some(from), None) => slot.contains(from),
        (None, Some(to)) => slot.contains(to),
        (Some(from), Some(to)) => slot.overlaps(&TimeSlot::new(from, to)),
        (None, None) => true,
    }
}
