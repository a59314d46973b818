//! # kirizma-core
//!
//! Rewrites the note timings of a Dancing Onigiri (DOS) chart into a lane
//! layout chosen by a typed lyric.
//!
//! This crate provides:
//! - DOS chart parsing with slot selection (`chart`)
//! - Phonetic input normalization and kana → lane mapping (`kana`)
//! - Lane reassignment with freeze notes and re-encoding (`convert`)
//! - Conversion settings loadable from TOML (`config`)

pub mod chart;
pub mod config;
pub mod convert;
pub mod error;
pub mod kana;

// Re-export from chart module
pub use chart::{
    ChartDocument, ChartField, ChartSlot, ExclusionSet, Frame, KeepData, KeepPlan, Timeline,
    extract_timeline, parse_chart,
};

// Re-export from config module
pub use config::{ConvertOptions, KirizmaMode, RomajiRules};

// Re-export from convert module
pub use convert::{Conversion, LaneAssignment, LaneNotes, convert, reassign, serialize};

// Re-export from error module
pub use error::{Error, Result};

// Re-export from kana module
pub use kana::{LaneSet, PhoneticStream, PhoneticSymbol, map_symbol};
