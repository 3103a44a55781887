use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Current value of one filter field, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
    Text(String),
    Selection(Vec<String>),
    Numeric {
        min: Option<f64>,
        max: Option<f64>,
    },
    Dates {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
    TimeWindow {
        from: Option<u16>,
        to: Option<u16>,
    },
}

impl FilterValue {
    /// An empty value places no constraint on any record
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Text(s) => s.trim().is_empty(),
            FilterValue::Selection(items) => items.is_empty(),
            FilterValue::Numeric { min, max } => min.is_none() && max.is_none(),
            FilterValue::Dates { from, to } => from.is_none() && to.is_none(),
            FilterValue::TimeWindow { from, to } => from.is_none() && to.is_none(),
        }
    }
}

/// The live set of active constraints, keyed by field. Insertion order is
/// preserved so tags and controls render in schema order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterValues {
    values: IndexMap<String, FilterValue>,
}

impl FilterValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: FilterValue) {
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.values.get(key)
    }

    /// Reset a single field to no constraint
    pub fn clear(&mut self, key: &str) {
        self.values.shift_remove(key);
    }

    /// Wholesale reset, as a "clear all" action does
    pub fn clear_all(&mut self) {
        self.values = IndexMap::new();
    }

    /// Add one element to a multi-select, keeping order and dropping duplicates
    pub fn add_selection(&mut self, key: impl Into<String>, item: impl Into<String>) {
        let item = item.into();
        match self.values.entry(key.into()).or_insert_with(|| {
            FilterValue::Selection(Vec::new())
        }) {
            FilterValue::Selection(items) => {
                if !items.contains(&item) {
                    items.push(item);
                }
            }
            other => {
                *other = FilterValue::Selection(vec![item]);
            }
        }
    }

    /// Remove one element from a multi-select; the field drops out entirely
    /// once its last element is removed.
    pub fn remove_selection(&mut self, key: &str, item: &str) {
        let emptied = match self.values.get_mut(key) {
            Some(FilterValue::Selection(items)) => {
                items.retain(|existing| existing != item);
                items.is_empty()
            }
            _ => false,
        };
        if emptied {
            self.values.shift_remove(key);
        }
    }

    /// True when no field places any constraint
    pub fn is_empty(&self) -> bool {
        self.values.values().all(FilterValue::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        assert!(FilterValue::Text("  ".to_string()).is_empty());
        assert!(FilterValue::Selection(Vec::new()).is_empty());
        assert!(FilterValue::Numeric {
            min: None,
            max: None
        }
        .is_empty());
        assert!(!FilterValue::Text("x".to_string()).is_empty());
        assert!(!FilterValue::Numeric {
            min: Some(1.0),
            max: None
        }
        .is_empty());
    }

    #[test]
    fn test_add_selection_deduplicates() {
        let mut values = FilterValues::new();
        values.add_selection("role", "Admin");
        values.add_selection("role", "Manager");
        values.add_selection("role", "Admin");
        assert_eq!(
            values.get("role"),
            Some(&FilterValue::Selection(vec![
                "Admin".to_string(),
                "Manager".to_string()
            ]))
        );
    }

    #[test]
    fn test_remove_selection_drops_emptied_field() {
        let mut values = FilterValues::new();
        values.add_selection("role", "Admin");
        values.add_selection("role", "Manager");
        values.remove_selection("role", "Admin");
        assert_eq!(
            values.get("role"),
            Some(&FilterValue::Selection(vec!["Manager".to_string()]))
        );
        values.remove_selection("role", "Manager");
        assert!(values.get("role").is_none());
    }

    #[test]
    fn test_clear_all_resets_everything() {
        let mut values = FilterValues::new();
        values.set("name", FilterValue::Text("raj".to_string()));
        values.add_selection("role", "Admin");
        values.clear_all();
        assert!(values.is_empty());
        assert_eq!(values.iter().count(), 0);
    }
}
