//! Fixed kana lookup tables.

use crate::config::RomajiRules;

/// Consonant letter of a kana under the default romanization.
pub fn default_letter(kana: char) -> Option<char> {
    let letter = match kana {
        'あ' => 'A',
        'い' => 'I',
        'う' => 'U',
        'え' => 'E',
        'お' => 'O',
        'か' | 'き' | 'く' | 'け' | 'こ' => 'K',
        'さ' | 'し' | 'す' | 'せ' | 'そ' => 'S',
        'た' | 'ち' | 'つ' | 'て' | 'と' => 'T',
        'な' | 'に' | 'ぬ' | 'ね' | 'の' => 'N',
        'は' | 'ひ' | 'ふ' | 'へ' | 'ほ' => 'H',
        'ま' | 'み' | 'む' | 'め' | 'も' => 'M',
        'や' | 'ゆ' | 'よ' => 'Y',
        'ら' | 'り' | 'る' | 'れ' | 'ろ' => 'R',
        'わ' | 'を' => 'W',
        'ん' => 'N',
        'が' | 'ぎ' | 'ぐ' | 'げ' | 'ご' => 'G',
        'ざ' | 'じ' | 'ず' | 'ぜ' | 'ぞ' => 'Z',
        'だ' | 'ぢ' | 'づ' | 'で' | 'ど' => 'D',
        'ば' | 'び' | 'ぶ' | 'べ' | 'ぼ' => 'B',
        'ぱ' | 'ぴ' | 'ぷ' | 'ぺ' | 'ぽ' => 'P',
        _ => return None,
    };
    Some(letter)
}

/// Consonant letter of a kana with `rules` applied on top of the default.
pub fn romaji_letter(kana: char, rules: &RomajiRules) -> Option<char> {
    match kana {
        'じ' if rules.use_j_for_zi => Some('J'),
        'ち' if rules.use_c_for_chi => Some('C'),
        'ふ' if rules.use_f_for_fu => Some('F'),
        'ら' | 'り' | 'る' | 'れ' | 'ろ' if rules.use_l_for_ra_row => Some('L'),
        'ん' if rules.use_x_for_n => Some('X'),
        _ => default_letter(kana),
    }
}

/// Syllable lane of a kana. Voiced and semi-voiced kana share the lane of
/// their base consonant.
pub fn kana_lane(kana: char) -> Option<&'static str> {
    let lane = match kana {
        'あ' => "A",
        'い' => "I",
        'う' => "U",
        'え' => "E",
        'お' => "O",
        'か' | 'が' => "KA",
        'き' | 'ぎ' => "KI",
        'く' | 'ぐ' => "KU",
        'け' | 'げ' => "KE",
        'こ' | 'ご' => "KO",
        'さ' | 'ざ' => "SA",
        'し' | 'じ' => "SI",
        'す' | 'ず' => "SU",
        'せ' | 'ぜ' => "SE",
        'そ' | 'ぞ' => "SO",
        'た' | 'だ' => "TA",
        'ち' | 'ぢ' => "TI",
        'つ' | 'づ' => "TU",
        'て' | 'で' => "TE",
        'と' | 'ど' => "TO",
        'な' => "NA",
        'に' => "NI",
        'ぬ' => "NU",
        'ね' => "NE",
        'の' => "NO",
        'は' | 'ば' | 'ぱ' => "HA",
        'ひ' | 'び' | 'ぴ' => "HI",
        'ふ' | 'ぶ' | 'ぷ' => "HU",
        'へ' | 'べ' | 'ぺ' => "HE",
        'ほ' | 'ぼ' | 'ぽ' => "HO",
        'ま' => "MA",
        'み' => "MI",
        'む' => "MU",
        'め' => "ME",
        'も' => "MO",
        'や' => "YA",
        'ゆ' => "YU",
        'よ' => "YO",
        'ら' => "RA",
        'り' => "RI",
        'る' => "RU",
        'れ' => "RE",
        'ろ' => "RO",
        'わ' => "WA",
        'を' => "WO",
        'ん' => "NN",
        _ => return None,
    };
    Some(lane)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_letters() {
        assert_eq!(default_letter('あ'), Some('A'));
        assert_eq!(default_letter('き'), Some('K'));
        assert_eq!(default_letter('ん'), Some('N'));
        assert_eq!(default_letter('ぷ'), Some('P'));
        assert_eq!(default_letter('ゎ'), None);
        assert_eq!(default_letter('ー'), None);
    }

    #[test]
    fn test_rules_override_defaults() {
        let off = RomajiRules::default();
        let on = RomajiRules {
            use_j_for_zi: true,
            use_c_for_chi: true,
            use_f_for_fu: true,
            use_l_for_ra_row: true,
            use_x_for_n: true,
        };

        for (kana, default, alternate) in [
            ('じ', 'Z', 'J'),
            ('ち', 'T', 'C'),
            ('ふ', 'H', 'F'),
            ('ら', 'R', 'L'),
            ('ろ', 'R', 'L'),
            ('ん', 'N', 'X'),
        ] {
            assert_eq!(romaji_letter(kana, &off), Some(default), "{}", kana);
            assert_eq!(romaji_letter(kana, &on), Some(alternate), "{}", kana);
        }
    }

    #[test]
    fn test_rules_leave_other_sounds_alone() {
        let rules = RomajiRules {
            use_j_for_zi: true,
            ..Default::default()
        };
        assert_eq!(romaji_letter('ざ', &rules), Some('Z'));
        assert_eq!(romaji_letter('し', &rules), Some('S'));
    }

    #[test]
    fn test_kana_lanes_fold_voiced_sounds() {
        assert_eq!(kana_lane('か'), Some("KA"));
        assert_eq!(kana_lane('が'), Some("KA"));
        assert_eq!(kana_lane('じ'), Some("SI"));
        assert_eq!(kana_lane('ぱ'), Some("HA"));
        assert_eq!(kana_lane('ば'), Some("HA"));
        assert_eq!(kana_lane('ん'), Some("NN"));
        assert_eq!(kana_lane('ゎ'), None);
    }
}
