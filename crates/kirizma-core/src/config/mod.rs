//! Conversion settings.
//!
//! - `ConvertOptions` - everything a conversion needs, loadable from TOML
//! - `KirizmaMode` - romaji or kana lane layout
//! - `RomajiRules` - romanization overrides

mod mode;
mod options;
mod rules;

pub use mode::*;
pub use options::*;
pub use rules::*;
