use crate::config::{KirizmaMode, RomajiRules};
use crate::kana::{PhoneticSymbol, kana_lane, romaji_letter};

/// Lanes of romaji mode.
pub const ROMAJI_LANES: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z",
];

/// Lanes of kana mode.
pub const KANA_LANES: [&str; 46] = [
    "A", "I", "U", "E", "O", //
    "KA", "KI", "KU", "KE", "KO", //
    "SA", "SI", "SU", "SE", "SO", //
    "TA", "TI", "TU", "TE", "TO", //
    "NA", "NI", "NU", "NE", "NO", //
    "HA", "HI", "HU", "HE", "HO", //
    "MA", "MI", "MU", "ME", "MO", //
    "YA", "YU", "YO", //
    "RA", "RI", "RU", "RE", "RO", //
    "WA", "WO", "NN",
];

/// Ordered output lanes of a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneSet {
    lanes: &'static [&'static str],
}

impl LaneSet {
    pub fn for_mode(mode: KirizmaMode) -> Self {
        let lanes: &'static [&'static str] = match mode {
            KirizmaMode::Romaji => &ROMAJI_LANES,
            KirizmaMode::Kana => &KANA_LANES,
        };
        Self { lanes }
    }

    pub fn lanes(&self) -> &'static [&'static str] {
        self.lanes
    }

    pub fn position(&self, lane: &str) -> Option<usize> {
        self.lanes.iter().position(|l| *l == lane)
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}

fn letter_lane(letter: char) -> Option<&'static str> {
    if !letter.is_ascii_uppercase() {
        return None;
    }
    ROMAJI_LANES.get((letter as u8 - b'A') as usize).copied()
}

/// Lane of one phonetic symbol, or `None` when the frame must be dropped.
///
/// Romaji rules only apply in romaji mode. Latin letters map to themselves
/// in romaji mode and have no lane in kana mode.
pub fn map_symbol(
    symbol: PhoneticSymbol,
    mode: KirizmaMode,
    rules: &RomajiRules,
) -> Option<&'static str> {
    match (mode, symbol) {
        (_, PhoneticSymbol::Elongation) => None,
        (KirizmaMode::Romaji, PhoneticSymbol::Kana(c)) => {
            romaji_letter(c, rules).and_then(letter_lane)
        }
        (KirizmaMode::Romaji, PhoneticSymbol::Latin(c)) => letter_lane(c),
        (KirizmaMode::Kana, PhoneticSymbol::Kana(c)) => kana_lane(c),
        (KirizmaMode::Kana, PhoneticSymbol::Latin(_)) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_sets() {
        assert_eq!(LaneSet::for_mode(KirizmaMode::Romaji).len(), 26);
        assert_eq!(LaneSet::for_mode(KirizmaMode::Kana).len(), 46);
        assert_eq!(LaneSet::for_mode(KirizmaMode::Kana).position("NN"), Some(45));
        assert_eq!(LaneSet::for_mode(KirizmaMode::Romaji).position("KA"), None);
    }

    #[test]
    fn test_every_kana_lane_is_in_the_kana_set() {
        let set = LaneSet::for_mode(KirizmaMode::Kana);
        for c in 'あ'..='ん' {
            if let Some(lane) = kana_lane(c) {
                assert!(set.position(lane).is_some(), "{} -> {}", c, lane);
            }
        }
    }

    #[test]
    fn test_map_symbol_romaji() {
        let rules = RomajiRules::default();
        let mode = KirizmaMode::Romaji;
        assert_eq!(map_symbol(PhoneticSymbol::Kana('か'), mode, &rules), Some("K"));
        assert_eq!(map_symbol(PhoneticSymbol::Kana('じ'), mode, &rules), Some("Z"));
        assert_eq!(map_symbol(PhoneticSymbol::Latin('Q'), mode, &rules), Some("Q"));
        assert_eq!(map_symbol(PhoneticSymbol::Elongation, mode, &rules), None);
        assert_eq!(map_symbol(PhoneticSymbol::Kana('ゎ'), mode, &rules), None);

        let rules = RomajiRules {
            use_j_for_zi: true,
            ..Default::default()
        };
        assert_eq!(map_symbol(PhoneticSymbol::Kana('じ'), mode, &rules), Some("J"));
    }

    #[test]
    fn test_map_symbol_kana_ignores_rules() {
        let rules = RomajiRules {
            use_j_for_zi: true,
            use_x_for_n: true,
            ..Default::default()
        };
        let mode = KirizmaMode::Kana;
        assert_eq!(map_symbol(PhoneticSymbol::Kana('じ'), mode, &rules), Some("SI"));
        assert_eq!(map_symbol(PhoneticSymbol::Kana('ん'), mode, &rules), Some("NN"));
        assert_eq!(map_symbol(PhoneticSymbol::Latin('A'), mode, &rules), None);
    }
}
