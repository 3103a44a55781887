use crate::descriptor::FilterSchema;
use crate::timeslot::format_clock;
use crate::values::{FilterValue, FilterValues};

/// One removable chip in the applied-filter row. Multi-selects produce one
/// tag per selected element; scalar filters collapse to a single tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedTag {
    pub key: String,
    pub label: String,
    pub selection: Option<String>,
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

/// Produce the removable tags for the current values, in value order.
/// Keys without a descriptor yield no tag, matching the evaluator.
pub fn applied_tags(schema: &FilterSchema, values: &FilterValues) -> Vec<AppliedTag> {
    let mut tags = Vec::new();
    for (key, value) in values.iter() {
        if value.is_empty() {
            continue;
        }
        let descriptor = match schema.descriptor(key) {
            Some(descriptor) => descriptor,
            None => continue,
        };
        let label = &descriptor.label;
        match value {
            FilterValue::Text(text) => tags.push(AppliedTag {
                key: key.to_string(),
                label: format!("{}: {}", label, text.trim()),
                selection: None,
            }),
            FilterValue::Selection(items) => {
                for item in items {
                    tags.push(AppliedTag {
                        key: key.to_string(),
                        label: format!("{}: {}", label, item),
                        selection: Some(item.clone()),
                    });
                }
            }
            FilterValue::Numeric { min, max } => {
                let text = match (min, max) {
                    (Some(min), Some(max)) => {
                        format!("{} - {}", format_number(*min), format_number(*max))
                    }
                    (Some(min), None) => format!("at least {}", format_number(*min)),
                    (None, Some(max)) => format!("at most {}", format_number(*max)),
                    (None, None) => continue,
                };
                tags.push(AppliedTag {
                    key: key.to_string(),
                    label: format!("{}: {}", label, text),
                    selection: None,
                });
            }
            FilterValue::Dates { from, to } => {
                let text = match (from, to) {
                    (Some(from), Some(to)) if from == to => from.format("%Y-%m-%d").to_string(),
                    (Some(from), Some(to)) => {
                        format!("{} to {}", from.format("%Y-%m-%d"), to.format("%Y-%m-%d"))
                    }
                    (Some(from), None) => format!("from {}", from.format("%Y-%m-%d")),
                    (None, Some(to)) => format!("until {}", to.format("%Y-%m-%d")),
                    (None, None) => continue,
                };
                tags.push(AppliedTag {
                    key: key.to_string(),
                    label: format!("{}: {}", label, text),
                    selection: None,
                });
            }
            FilterValue::TimeWindow { from, to } => {
                let text = match (from, to) {
                    (Some(from), Some(to)) => {
                        format!("{} to {}", format_clock(*from), format_clock(*to))
                    }
                    (Some(from), None) => format!("from {}", format_clock(*from)),
                    (None, Some(to)) => format!("until {}", format_clock(*to)),
                    (None, None) => continue,
                };
                tags.push(AppliedTag {
                    key: key.to_string(),
                    label: format!("{}: {}", label, text),
                    selection: None,
                });
            }
        }
    }
    tags
}

impl FilterValues {
    /// Undo one tag: drop the element from its multi-select, or clear the
    /// scalar field. The caller re-runs apply afterwards.
    pub fn remove_tag(&mut self, tag: &AppliedTag) {
        match &tag.selection {
            Some(item) => self.remove_selection(&tag.key, item),
            None => self.clear(&tag.key),
        }
    }
}
