use serde::Serialize;

use crate::chart::ChartSlot;

const DATA_SUFFIX: &str = "_data";

/// One `name=value` segment of a DOS blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartField {
    /// Field name without slot digits and `_data` (e.g. `left`, `frzSpace`).
    pub base: String,
    /// Raw slot digits, empty for the default chart.
    pub slot: String,
    /// Raw value. `None` when the segment had no `=`.
    pub value: Option<String>,
}

impl ChartField {
    /// Parse a single segment (`left2_data=200,300`).
    ///
    /// Returns `None` for segments whose name is not `<base><digits>_data`
    /// with a non-empty base.
    pub fn parse_segment(segment: &str) -> Option<Self> {
        let (name, value) = match segment.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (segment, None),
        };
        let (base, slot) = split_field_name(name)?;
        Some(Self {
            base: base.to_string(),
            slot: slot.to_string(),
            value,
        })
    }

    pub fn in_slot(&self, slot: ChartSlot) -> bool {
        slot.matches_suffix(&self.slot)
    }

    /// Raw value, treating a missing `=` as no data.
    pub fn raw_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether this field carries any frame tokens.
    pub fn has_data(&self) -> bool {
        self.value.as_deref().is_some_and(|v| !v.is_empty())
    }

    pub fn name(&self) -> String {
        format!("{}{}{}", self.base, self.slot, DATA_SUFFIX)
    }
}

/// Split `left12_data` into (`left`, `12`).
pub fn split_field_name(name: &str) -> Option<(&str, &str)> {
    let stem = name.strip_suffix(DATA_SUFFIX)?;
    let base = stem.trim_end_matches(|c: char| c.is_ascii_digit());
    if base.is_empty() {
        return None;
    }
    Some((base, &stem[base.len()..]))
}
