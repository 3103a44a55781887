use ridedesk_filter::Filterable;
use serde_json::Value;

/// Search every field of a record for the term, case-insensitively.
/// Returns one "field: value" line per hit.
pub fn search_hits(record: &impl Filterable, term: &str) -> Vec<String> {
    let fields = match record.as_json_value() {
        Value::Object(map) => map,
        _ => return vec![],
    };

    let term_lower = term.to_lowercase();
    fields
        .iter()
        .flat_map(|(field_name, value)| search_value(field_name, value, &term_lower))
        .collect()
}

pub fn matches_search(record: &impl Filterable, term: &str) -> bool {
    !search_hits(record, term).is_empty()
}

/// Recursively search through a JSON value for the search term
fn search_value(field_name: &str, value: &Value, search_term: &str) -> Vec<String> {
    match value {
        Value::String(s) => {
            if s.to_lowercase().contains(search_term) {
                vec![format!("{}: {}", field_name, s)]
            } else {
                vec![]
            }
        }
        Value::Number(n) => {
            let s = n.to_string();
            if s.contains(search_term) {
                vec![format!("{}: {}", field_name, s)]
            } else {
                vec![]
            }
        }
        Value::Bool(b) => {
            let s = b.to_string();
            if s.contains(search_term) {
                vec![format!("{}: {}", field_name, s)]
            } else {
                vec![]
            }
        }
        Value::Array(arr) => arr
            .iter()
            .flat_map(|item| search_value(field_name, item, search_term))
            .collect(),
        Value::Object(obj) => obj
            .iter()
            .flat_map(|(key, val)| {
                let nested_field = format!("{}_{}", field_name, key);
                search_value(&nested_field, val, search_term)
            })
            .collect(),
        Value::Null => vec![],
    }
}
