//! Lane reassignment and output encoding.
//!
//! [`convert`] runs the whole pipeline:
//! parse → extract timeline → reassign lanes → serialize.

mod assign;
mod encode;

pub use assign::*;
pub use encode::*;

use serde::Serialize;
use tracing::info;

use crate::chart::{ExclusionSet, KeepData, KeepPlan, Timeline, extract_timeline, parse_chart};
use crate::config::ConvertOptions;
use crate::error::Result;
use crate::kana::PhoneticStream;

/// Outcome of one conversion.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    /// Chart text for the output slot.
    pub output: String,
    pub timeline: Timeline,
    pub phonetic: PhoneticStream,
    pub assignment: LaneAssignment,
    pub kept: KeepData,
}

impl Conversion {
    /// Pretty JSON dump of the intermediate structures.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Convert the input slot of `chart_text` into a lane chart driven by
/// `phonetic_text`.
pub fn convert(chart_text: &str, phonetic_text: &str, options: &ConvertOptions) -> Result<Conversion> {
    options.validate()?;

    let plan = KeepPlan::resolve(options);
    let exclusion = ExclusionSet::resolve(options, &plan);

    let doc = parse_chart(chart_text, options.input_slot);
    let kept = KeepData::capture(&doc, &plan);
    let timeline = extract_timeline(&doc, &exclusion);
    let phonetic = PhoneticStream::parse(phonetic_text);

    let assignment = reassign(&timeline, &phonetic, options.mode, &options.rules);
    let output = serialize(&assignment, &kept, options.output_slot);

    info!(
        "Converted slot {} -> {} ({} mode): {} frames, {} symbols, {} notes, {} dropped",
        options.input_slot,
        options.output_slot,
        options.mode,
        timeline.len(),
        phonetic.len(),
        assignment.note_count(),
        assignment.dropped()
    );

    Ok(Conversion {
        output,
        timeline,
        phonetic,
        assignment,
        kept,
    })
}
