use tracing::{debug, trace};

use crate::chart::{ChartField, ChartSlot};

/// Delimiter used between segments on output.
pub const FIELD_SEPARATOR: char = '|';
/// Alternate delimiter accepted on input.
pub const ALT_FIELD_SEPARATOR: char = '&';

/// Ordered collection of chart fields decoded from a DOS blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartDocument {
    fields: Vec<ChartField>,
}

impl ChartDocument {
    /// Decode every `*_data` segment of `text`, across all slots.
    pub fn parse(text: &str) -> Self {
        let normalized: String = text
            .chars()
            .filter(|c| !matches!(c, '\r' | '\n'))
            .map(|c| {
                if c == ALT_FIELD_SEPARATOR {
                    FIELD_SEPARATOR
                } else {
                    c
                }
            })
            .collect();
        let body = normalized.trim_matches(FIELD_SEPARATOR);

        let mut fields = Vec::new();
        if body.is_empty() {
            return Self { fields };
        }

        for segment in body.split(FIELD_SEPARATOR) {
            match ChartField::parse_segment(segment) {
                Some(field) => fields.push(field),
                None => trace!("Skipping non-data segment: {:?}", segment),
            }
        }

        Self { fields }
    }

    /// Keep only the fields belonging to `slot`.
    pub fn in_slot(self, slot: ChartSlot) -> Self {
        let total = self.fields.len();
        let fields: Vec<ChartField> = self
            .fields
            .into_iter()
            .filter(|field| field.in_slot(slot))
            .collect();
        debug!(
            "Slot {}: {} of {} fields selected",
            slot,
            fields.len(),
            total
        );
        Self { fields }
    }

    /// First field whose base name is exactly `base`.
    pub fn find(&self, base: &str) -> Option<&ChartField> {
        self.fields.iter().find(|field| field.base == base)
    }

    pub fn fields(&self) -> &[ChartField] {
        &self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartField> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Parse `text` and keep the fields of `input_slot`.
pub fn parse_chart(text: &str, input_slot: ChartSlot) -> ChartDocument {
    ChartDocument::parse(text).in_slot(input_slot)
}
