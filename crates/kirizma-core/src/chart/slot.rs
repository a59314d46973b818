use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Chart slot (score number) inside a DOS blob.
///
/// Slot 0 is the default chart and carries no suffix in field names
/// (`left_data`). Any other slot is written as its decimal number
/// (`left2_data`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartSlot(u32);

impl ChartSlot {
    pub const DEFAULT: Self = Self(0);

    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(&self) -> u32 {
        self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == 0
    }

    /// Suffix inserted between the base name and `_data`.
    pub fn suffix(&self) -> String {
        if self.is_default() {
            String::new()
        } else {
            self.0.to_string()
        }
    }

    /// Check whether a field's raw digit suffix belongs to this slot.
    pub fn matches_suffix(&self, suffix: &str) -> bool {
        suffix == self.suffix()
    }

    /// Build the full field name for `base` in this slot.
    pub fn field_name(&self, base: &str) -> String {
        format!("{}{}_data", base, self.suffix())
    }
}

impl FromStr for ChartSlot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::DEFAULT);
        }
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| Error::InvalidSlot(s.to_string()))
    }
}

impl std::fmt::Display for ChartSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slot_has_no_suffix() {
        assert_eq!(ChartSlot::DEFAULT.suffix(), "");
        assert_eq!(ChartSlot::DEFAULT.field_name("left"), "left_data");
        assert!(ChartSlot::DEFAULT.matches_suffix(""));
        assert!(!ChartSlot::DEFAULT.matches_suffix("0"));
    }

    #[test]
    fn test_numbered_slot() {
        let slot = ChartSlot::new(3);
        assert_eq!(slot.suffix(), "3");
        assert_eq!(slot.field_name("keyA"), "keyA3_data");
        assert!(slot.matches_suffix("3"));
        assert!(!slot.matches_suffix(""));
        assert!(!slot.matches_suffix("03"));
    }

    #[test]
    fn test_parse_slot() {
        assert_eq!("0".parse::<ChartSlot>().unwrap(), ChartSlot::DEFAULT);
        assert_eq!("".parse::<ChartSlot>().unwrap(), ChartSlot::DEFAULT);
        assert_eq!(" 2 ".parse::<ChartSlot>().unwrap(), ChartSlot::new(2));
        assert!("two".parse::<ChartSlot>().is_err());
        assert!("-1".parse::<ChartSlot>().is_err());
    }
}
