use serde::Serialize;

/// The long-vowel mark. Marks the previous sound as a freeze.
pub const ELONGATION_MARK: char = 'ー';

/// Small kana inside the あ..ん range that have no lane.
const SMALL_KANA: [char; 11] = ['ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ', 'ゃ', 'ゅ', 'ょ', 'っ', 'ゐ', 'ゑ'];

/// One unit of the typed lyric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PhoneticSymbol {
    /// A hiragana sound.
    Kana(char),
    /// An uppercase ASCII letter.
    Latin(char),
    /// `ー`; extends the previous sound.
    Elongation,
}

impl PhoneticSymbol {
    /// Classify an already normalized character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ELONGATION_MARK => Some(Self::Elongation),
            'A'..='Z' => Some(Self::Latin(c)),
            'あ'..='ん' if !SMALL_KANA.contains(&c) => Some(Self::Kana(c)),
            _ => None,
        }
    }

    pub fn is_elongation(&self) -> bool {
        matches!(self, Self::Elongation)
    }
}

impl std::fmt::Display for PhoneticSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kana(c) | Self::Latin(c) => write!(f, "{}", c),
            Self::Elongation => write!(f, "{}", ELONGATION_MARK),
        }
    }
}

/// Fold full-width Latin to ASCII and lowercase to uppercase.
fn fold_latin(c: char) -> char {
    let c = match c {
        'Ａ'..='Ｚ' | 'ａ'..='ｚ' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        _ => c,
    };
    c.to_ascii_uppercase()
}

/// Normalized symbol sequence, aligned index-by-index with a timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhoneticStream {
    symbols: Vec<PhoneticSymbol>,
}

impl PhoneticStream {
    /// Normalize free text; characters outside the alphabet are stripped.
    pub fn parse(input: &str) -> Self {
        let symbols = input
            .chars()
            .map(fold_latin)
            .filter_map(PhoneticSymbol::from_char)
            .collect();
        Self { symbols }
    }

    pub fn get(&self, index: usize) -> Option<PhoneticSymbol> {
        self.symbols.get(index).copied()
    }

    /// Whether the symbol at `index` exists and is an elongation mark.
    pub fn is_elongation_at(&self, index: usize) -> bool {
        self.get(index).is_some_and(|s| s.is_elongation())
    }

    pub fn symbols(&self) -> &[PhoneticSymbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl FromIterator<PhoneticSymbol> for PhoneticStream {
    fn from_iter<T: IntoIterator<Item = PhoneticSymbol>>(iter: T) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for PhoneticStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
