use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::error::{Error, Result};

/// Lane layout produced by a conversion.
///
/// Names are matched case-insensitively, both from the config file and from
/// the command line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum KirizmaMode {
    /// One lane per consonant letter, `A`..`Z`.
    #[default]
    #[strum(serialize = "romaji")]
    Romaji,
    /// One lane per kana syllable (`KA`, `SI`, `NN`, ...).
    #[strum(serialize = "kana")]
    Kana,
}

impl KirizmaMode {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl FromStr for KirizmaMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownMode(s.to_string()))
    }
}

impl TryFrom<String> for KirizmaMode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl std::fmt::Display for KirizmaMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
