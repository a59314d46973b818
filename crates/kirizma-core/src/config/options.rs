use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::chart::ChartSlot;
use crate::config::{KirizmaMode, RomajiRules};
use crate::error::{Error, Result};

/// Settings for one conversion.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```toml
/// mode = "kana"
/// input_slot = 2
/// keep_onigiri = true
///
/// [rules]
/// use_j_for_zi = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub mode: KirizmaMode,
    pub rules: RomajiRules,
    pub input_slot: ChartSlot,
    pub output_slot: ChartSlot,
    /// Carry `space`/`frzSpace` over unchanged.
    pub keep_onigiri: bool,
    /// Carry the four directional lanes and their freezes over unchanged.
    pub keep_4key: bool,
    /// Read the kept directional lanes from `sleft`..`sright`.
    pub use_sleft: bool,
    /// Additional non-timing field base names.
    pub extra_ignored: Vec<String>,
}

impl ConvertOptions {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let options: Self = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject settings that would produce a garbled chart.
    pub fn validate(&self) -> Result<()> {
        if self.use_sleft && !self.keep_4key {
            warn!("use_sleft has no effect without keep_4key");
        }

        for name in &self.extra_ignored {
            if name.is_empty() {
                return Err(Error::InvalidConfiguration(
                    "ignored field name is empty".to_string(),
                ));
            }
            if name.contains(['|', '&', '=', ',', '\r', '\n']) {
                return Err(Error::InvalidConfiguration(format!(
                    "ignored field name contains a delimiter: {:?}",
                    name
                )));
            }
            if name.ends_with(|c: char| c.is_ascii_digit()) {
                return Err(Error::InvalidConfiguration(format!(
                    "ignored field name must not end in a slot digit: {:?}",
                    name
                )));
            }
        }

        Ok(())
    }
}
