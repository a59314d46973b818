use crate::chart::{ChartSlot, FIELD_SEPARATOR, Frame, KeepData};
use crate::convert::LaneAssignment;

const KEY_PREFIX: &str = "key";
const FREEZE_KEY_PREFIX: &str = "frzKey";

fn join_frames<'a>(frames: impl IntoIterator<Item = &'a Frame>) -> String {
    frames
        .into_iter()
        .map(|frame| frame.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn push_field(out: &mut String, slot: ChartSlot, base: &str, value: &str) {
    out.push_str(&slot.field_name(base));
    out.push('=');
    out.push_str(value);
    out.push(FIELD_SEPARATOR);
}

/// Encode `assignment` and the kept fields as a DOS blob for `output_slot`.
///
/// Layout: `|keyX..|` for every lane, `|frzKeyX..|` for every lane, then the
/// kept fields in plan order. Every field is terminated by `|` and the blob
/// starts with `|`.
pub fn serialize(assignment: &LaneAssignment, keep: &KeepData, output_slot: ChartSlot) -> String {
    let mut out = String::new();
    out.push(FIELD_SEPARATOR);

    for notes in assignment.lanes() {
        let base = format!("{}{}", KEY_PREFIX, notes.lane);
        push_field(&mut out, output_slot, &base, &join_frames(&notes.normal));
    }

    for notes in assignment.lanes() {
        let base = format!("{}{}", FREEZE_KEY_PREFIX, notes.lane);
        let flat = notes.freeze.iter().flat_map(|(start, end)| [start, end]);
        push_field(&mut out, output_slot, &base, &join_frames(flat));
    }

    for (name, raw) in keep.iter() {
        push_field(&mut out, output_slot, name, raw);
    }

    out
}
