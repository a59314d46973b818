use serde::Serialize;
use tracing::debug;

use crate::chart::{ChartDocument, ExclusionSet, Frame};

/// A frame together with the field it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimedNote {
    pub frame: Frame,
    pub source: String,
}

/// All onset frames of one slot, in ascending order.
///
/// Equal frames keep the order in which their fields appeared in the chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    notes: Vec<TimedNote>,
}

impl Timeline {
    pub fn from_notes(mut notes: Vec<TimedNote>) -> Self {
        // Vec::sort_by_key is stable.
        notes.sort_by_key(|note| note.frame);
        Self { notes }
    }

    pub fn get(&self, index: usize) -> Option<Frame> {
        self.notes.get(index).map(|note| note.frame)
    }

    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        self.notes.iter().map(|note| note.frame)
    }

    pub fn notes(&self) -> &[TimedNote] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl FromIterator<Frame> for Timeline {
    fn from_iter<T: IntoIterator<Item = Frame>>(iter: T) -> Self {
        Self::from_notes(
            iter.into_iter()
                .map(|frame| TimedNote {
                    frame,
                    source: String::new(),
                })
                .collect(),
        )
    }
}

/// Pool the frames of every timing field in `doc` into one sorted timeline.
pub fn extract_timeline(doc: &ChartDocument, exclusion: &ExclusionSet) -> Timeline {
    let mut notes = Vec::new();

    for field in doc.iter() {
        if !field.has_data() || exclusion.excludes(&field.base) {
            continue;
        }
        let Some(raw) = field.raw_value() else {
            continue;
        };

        let before = notes.len();
        notes.extend(raw.split(',').map(|token| TimedNote {
            frame: Frame::parse(token),
            source: field.base.clone(),
        }));
        debug!("{}: {} frames", field.name(), notes.len() - before);
    }

    let invalid = notes.iter().filter(|n| n.frame.is_invalid()).count();
    if invalid > 0 {
        debug!("{} non-numeric frame tokens sorted to the end", invalid);
    }

    Timeline::from_notes(notes)
}
