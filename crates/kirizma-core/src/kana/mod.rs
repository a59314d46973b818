//! Phonetic input and lane mapping.
//!
//! - `PhoneticStream`, `PhoneticSymbol` - normalized lyric input
//! - `LaneSet` - ordered output lanes of a mode
//! - `map_symbol` - symbol to lane, under the romanization rules

mod lane;
mod symbol;
mod table;

pub use lane::*;
pub use symbol::*;
pub use table::*;
