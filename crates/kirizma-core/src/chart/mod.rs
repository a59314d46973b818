//! DOS chart text handling.
//!
//! This module contains the input side of a conversion:
//! - `ChartSlot` - chart number encoded in field names
//! - `ChartField`, `ChartDocument` - decoded `name=value` segments
//! - `Frame`, `Timeline` - pooled and sorted onset frames
//! - `KeepPlan`, `ExclusionSet`, `KeepData` - passthrough and ignored fields

mod document;
mod field;
mod frame;
mod keep;
mod slot;
mod timeline;

pub use document::*;
pub use field::*;
pub use frame::*;
pub use keep::*;
pub use slot::*;
pub use timeline::*;
