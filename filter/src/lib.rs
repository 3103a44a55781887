//! Declarative filter engine for record list views: field descriptors drive
//! both the editable controls and the evaluation of typed criteria against a
//! record set.

mod descriptor;
mod errors;
mod evaluate;
mod summary;
mod timeslot;
mod values;

pub use descriptor::{
    Control, FieldDescriptor, FieldKind, FilterSchema, NumericBounds, SelectOption,
};
pub use errors::SchemaError;
pub use evaluate::Filterable;
pub use summary::{applied_tags, AppliedTag};
pub use timeslot::{format_clock, parse_clock, parse_slot, TimeSlot, MINUTES_PER_DAY};
pub use values::{FilterValue, FilterValues};
