use serde::Serialize;
use tracing::{debug, warn};

use crate::chart::{Frame, Timeline};
use crate::config::{KirizmaMode, RomajiRules};
use crate::kana::{LaneSet, PhoneticStream, PhoneticSymbol, map_symbol};

/// Notes assigned to one output lane.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LaneNotes {
    pub lane: &'static str,
    pub normal: Vec<Frame>,
    /// Freeze notes as (start, end).
    pub freeze: Vec<(Frame, Frame)>,
}

impl LaneNotes {
    fn new(lane: &'static str) -> Self {
        Self {
            lane,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.normal.is_empty() && self.freeze.is_empty()
    }
}

/// Result of reassigning a timeline across a lane set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneAssignment {
    mode: KirizmaMode,
    lanes: Vec<LaneNotes>,
    /// Frames that ended up in no lane.
    dropped: usize,
}

impl LaneAssignment {
    /// Every lane of `mode`, all empty.
    pub fn empty(mode: KirizmaMode) -> Self {
        let lanes = LaneSet::for_mode(mode)
            .lanes()
            .iter()
            .copied()
            .map(LaneNotes::new)
            .collect();
        Self {
            mode,
            lanes,
            dropped: 0,
        }
    }

    fn lane_mut(&mut self, lane: &str) -> Option<&mut LaneNotes> {
        self.lanes.iter_mut().find(|notes| notes.lane == lane)
    }

    pub fn mode(&self) -> KirizmaMode {
        self.mode
    }

    /// Lanes in lane-set order.
    pub fn lanes(&self) -> &[LaneNotes] {
        &self.lanes
    }

    pub fn get(&self, lane: &str) -> Option<&LaneNotes> {
        self.lanes.iter().find(|notes| notes.lane == lane)
    }

    pub fn normal(&self, lane: &str) -> &[Frame] {
        self.get(lane).map(|n| n.normal.as_slice()).unwrap_or_default()
    }

    pub fn freeze(&self, lane: &str) -> &[(Frame, Frame)] {
        self.get(lane).map(|n| n.freeze.as_slice()).unwrap_or_default()
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Number of notes, counting a freeze as one.
    pub fn note_count(&self) -> usize {
        self.lanes
            .iter()
            .map(|n| n.normal.len() + n.freeze.len())
            .sum()
    }
}

/// Walk `timeline` in lock-step with `stream` and sort each frame into a lane.
///
/// A sound followed by `ー` becomes a freeze from its own frame to the next
/// frame, provided that next frame exists; otherwise it is a normal note.
/// Frames without a symbol, with an unmappable symbol, or with a stray `ー`
/// are dropped.
pub fn reassign(
    timeline: &Timeline,
    stream: &PhoneticStream,
    mode: KirizmaMode,
    rules: &RomajiRules,
) -> LaneAssignment {
    let mut assignment = LaneAssignment::empty(mode);

    if stream.len() < timeline.len() {
        warn!(
            "{} frames but only {} phonetic symbols; the last {} frames will be dropped",
            timeline.len(),
            stream.len(),
            timeline.len() - stream.len()
        );
    } else if stream.len() > timeline.len() {
        debug!(
            "{} phonetic symbols beyond the last frame are ignored",
            stream.len() - timeline.len()
        );
    }

    // Set when the previous frame opened a freeze, so the following `ー`
    // is its end rather than a stray mark.
    let mut freeze_open = false;

    for (i, frame) in timeline.frames().enumerate() {
        let symbol = match stream.get(i) {
            Some(PhoneticSymbol::Elongation) => {
                if !std::mem::take(&mut freeze_open) {
                    assignment.dropped += 1;
                }
                continue;
            }
            Some(symbol) => symbol,
            None => {
                assignment.dropped += 1;
                continue;
            }
        };

        let Some(lane) = map_symbol(symbol, mode, rules) else {
            debug!("No {} lane for {:?} at frame {}", mode, symbol, frame);
            assignment.dropped += 1;
            continue;
        };

        let end = if stream.is_elongation_at(i + 1) {
            timeline.get(i + 1)
        } else {
            None
        };

        let Some(notes) = assignment.lane_mut(lane) else {
            assignment.dropped += 1;
            continue;
        };
        match end {
            Some(end) => {
                notes.freeze.push((frame, end));
                freeze_open = true;
            }
            None => notes.normal.push(frame),
        }
    }

    debug!(
        "Assigned {} notes, dropped {} frames",
        assignment.note_count(),
        assignment.dropped
    );
    assignment
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline(frames: &[i64]) -> Timeline {
        frames.iter().copied().map(Frame::At).collect()
    }

    fn at(frames: &[i64]) -> Vec<Frame> {
        frames.iter().copied().map(Frame::At).collect()
    }

    #[test]
    fn test_empty_assignment_has_every_lane() {
        let assignment = LaneAssignment::empty(KirizmaMode::Kana);
        assert_eq!(assignment.lanes().len(), 46);
        assert!(assignment.lanes().iter().all(LaneNotes::is_empty));
    }

    #[test]
    fn test_freeze_pairing() {
        let assignment = reassign(
            &timeline(&[10, 20, 30]),
            &PhoneticStream::parse("かーた"),
            KirizmaMode::Kana,
            &RomajiRules::default(),
        );

        assert_eq!(
            assignment.freeze("KA"),
            &[(Frame::At(10), Frame::At(20))]
        );
        assert!(assignment.normal("KA").is_empty());
        assert_eq!(assignment.normal("TA"), at(&[30]).as_slice());
        assert_eq!(assignment.dropped(), 0);
        for notes in assignment.lanes() {
            assert!(!notes.normal.contains(&Frame::At(10)));
            assert!(!notes.normal.contains(&Frame::At(20)));
        }
    }

    #[test]
    fn test_drop_on_shortage() {
        let assignment = reassign(
            &timeline(&[5, 15, 25]),
            &PhoneticStream::parse("あ"),
            KirizmaMode::Romaji,
            &RomajiRules::default(),
        );

        assert_eq!(assignment.normal("A"), at(&[5]).as_slice());
        assert_eq!(assignment.note_count(), 1);
        assert_eq!(assignment.dropped(), 2);
    }

    #[test]
    fn test_trailing_elongation_without_frame_is_normal() {
        let assignment = reassign(
            &timeline(&[10, 20]),
            &PhoneticStream::parse("あかー"),
            KirizmaMode::Romaji,
            &RomajiRules::default(),
        );

        assert_eq!(assignment.normal("A"), at(&[10]).as_slice());
        assert_eq!(assignment.normal("K"), at(&[20]).as_slice());
        assert!(assignment.freeze("K").is_empty());
    }

    #[test]
    fn test_stray_elongation_drops_frame() {
        let assignment = reassign(
            &timeline(&[10, 20, 30, 40]),
            &PhoneticStream::parse("ーさーー"),
            KirizmaMode::Romaji,
            &RomajiRules::default(),
        );

        assert_eq!(
            assignment.freeze("S"),
            &[(Frame::At(20), Frame::At(30))]
        );
        assert_eq!(assignment.note_count(), 1);
        assert_eq!(assignment.dropped(), 2);
    }

    #[test]
    fn test_unmappable_symbol_drops_frame() {
        let assignment = reassign(
            &timeline(&[10, 20, 30]),
            &PhoneticStream::parse("AゎB"),
            KirizmaMode::Kana,
            &RomajiRules::default(),
        );

        assert_eq!(assignment.note_count(), 0);
        assert_eq!(assignment.dropped(), 3);
    }

    #[test]
    fn test_unmappable_freeze_start_drops_both_frames() {
        let assignment = reassign(
            &timeline(&[10, 20, 30]),
            &PhoneticStream::parse("ゎーあ"),
            KirizmaMode::Romaji,
            &RomajiRules::default(),
        );

        assert_eq!(assignment.normal("A"), at(&[30]).as_slice());
        assert_eq!(assignment.dropped(), 2);
    }

    #[test]
    fn test_romaji_rules_route_lanes() {
        let rules = RomajiRules {
            use_c_for_chi: true,
            use_x_for_n: true,
            ..Default::default()
        };
        let assignment = reassign(
            &timeline(&[1, 2, 3, 4]),
            &PhoneticStream::parse("ちんとな"),
            KirizmaMode::Romaji,
            &rules,
        );

        assert_eq!(assignment.normal("C"), at(&[1]).as_slice());
        assert_eq!(assignment.normal("X"), at(&[2]).as_slice());
        assert_eq!(assignment.normal("T"), at(&[3]).as_slice());
        assert_eq!(assignment.normal("N"), at(&[4]).as_slice());
    }

    #[test]
    fn test_latin_letters_in_romaji_mode() {
        let assignment = reassign(
            &timeline(&[100, 200, 300]),
            &PhoneticStream::parse("qーz"),
            KirizmaMode::Romaji,
            &RomajiRules::default(),
        );

        assert_eq!(
            assignment.freeze("Q"),
            &[(Frame::At(100), Frame::At(200))]
        );
        assert_eq!(assignment.normal("Z"), at(&[300]).as_slice());
    }
}
