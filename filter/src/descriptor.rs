use crate::errors::SchemaError;
use crate::values::{FilterValue, FilterValues};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One entry of a select control, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Advisory rendering bounds for a numeric range control
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Categorical {
        options: Vec<SelectOption>,
        multi: bool,
    },
    NumericRange {
        bounds: Option<NumericBounds>,
    },
    DateRange,
    TimeOfDay,
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "Text",
            FieldKind::Categorical { .. } => "Categorical",
            FieldKind::NumericRange { .. } => "NumericRange",
            FieldKind::DateRange => "DateRange",
            FieldKind::TimeOfDay => "TimeOfDay",
        }
    }
}

/// Static definition of one filterable field. Immutable once part of a schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
        }
    }

    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub fn categorical(
        key: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self::new(
            key,
            label,
            FieldKind::Categorical {
                options,
                multi: false,
            },
        )
    }

    pub fn multi_select(
        key: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self::new(
            key,
            label,
            FieldKind::Categorical {
                options,
                multi: true,
            },
        )
    }

    pub fn numeric_range(
        key: impl Into<String>,
        label: impl Into<String>,
        bounds: Option<NumericBounds>,
    ) -> Self {
        Self::new(key, label, FieldKind::NumericRange { bounds })
    }

    pub fn date_range(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::DateRange)
    }

    pub fn time_of_day(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::TimeOfDay)
    }
}

/// Editable control derived from a descriptor. A categorical descriptor with
/// no options still yields a select control with an empty option list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Control {
    TextBox {
        key: String,
        label: String,
    },
    Select {
        key: String,
        label: String,
        options: Vec<SelectOption>,
        multi: bool,
    },
    NumericPair {
        key: String,
        label: String,
        bounds: Option<NumericBounds>,
    },
    DatePair {
        key: String,
        label: String,
    },
    TimePair {
        key: String,
        label: String,
    },
}

/// Ordered set of field descriptors for one list view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSchema {
    descriptors: Vec<FieldDescriptor>,
}

impl FilterSchema {
    /// Build a schema from an ordered descriptor list. Keys must be unique.
    pub fn new(descriptors: Vec<FieldDescriptor>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for descriptor in &descriptors {
            if !seen.insert(descriptor.key.clone()) {
                return Err(SchemaError::DuplicateKey(descriptor.key.clone()));
            }
        }
        Ok(Self { descriptors })
    }

    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.descriptors
    }

    pub fn descriptor(&self, key: &str) -> Option<&FieldDescriptor> {
        self.descriptors.iter().find(|d| d.key == key)
    }

    /// Empty/unset values for every descriptor, in schema order
    pub fn default_values(&self) -> FilterValues {
        let mut values = FilterValues::new();
        for descriptor in &self.descriptors {
            values.set(descriptor.key.clone(), Self::empty_value(&descriptor.kind));
        }
        values
    }

    fn empty_value(kind: &FieldKind) -> FilterValue {
        match kind {
            FieldKind::Text => FilterValue::Text(String::new()),
            FieldKind::Categorical { .. } => FilterValue::Selection(Vec::new()),
            FieldKind::NumericRange { .. } => FilterValue::Numeric {
                min: None,
                max: None,
            },
            FieldKind::DateRange => FilterValue::Dates {
                from: None,
                to: None,
            },
            FieldKind::TimeOfDay => FilterValue::TimeWindow {
                from: None,
                to: None,
            },
        }
    }

    /// Map each descriptor to an editable control, in schema order
    pub fn render_plan(&self) -> Vec<Control> {
        self.descriptors
            .iter()
            .map(|descriptor| match &descriptor.kind {
                FieldKind::Text => Control::TextBox {
                    key: descriptor.key.clone(),
                    label: descriptor.label.clone(),
                },
                FieldKind::Categorical { options, multi } => Control::Select {
                    key: descriptor.key.clone(),
                    label: descriptor.label.clone(),
                    options: options.clone(),
                    multi: *multi,
                },
                FieldKind::NumericRange { bounds } => Control::NumericPair {
                    key: descriptor.key.clone(),
                    label: descriptor.label.clone(),
                    bounds: *bounds,
                },
                FieldKind::DateRange => Control::DatePair {
                    key: descriptor.key.clone(),
                    label: descriptor.label.clone(),
                },
                FieldKind::TimeOfDay => Control::TimePair {
                    key: descriptor.key.clone(),
                    label: descriptor.label.clone(),
                },
            })
            .collect()
    }

    /// Check that every value refers to a known field and matches its kind
    pub fn validate(&self, values: &FilterValues) -> Result<(), SchemaError> {
        for (key, value) in values.iter() {
            let descriptor = self
                .descriptor(key)
                .ok_or_else(|| SchemaError::UnknownField(key.to_string()))?;
            let matches_kind = matches!(
                (&descriptor.kind, value),
                (FieldKind::Text, FilterValue::Text(_))
                    | (FieldKind::Categorical { .. }, FilterValue::Selection(_))
                    | (FieldKind::NumericRange { .. }, FilterValue::Numeric { .. })
                    | (FieldKind::DateRange, FilterValue::Dates { .. })
                    | (FieldKind::TimeOfDay, FilterValue::TimeWindow { .. })
            );
            if !matches_kind {
                return Err(SchemaError::KindMismatch {
                    key: key.to_string(),
                    expected: descriptor.kind.name(),
                });
            }
        }
        Ok(())
    }
}
