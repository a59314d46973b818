use serde::{Serialize, Serializer};

/// A frame token from a chart field.
///
/// Tokens without a leading integer become [`Frame::Invalid`], which orders
/// after every numeric frame and is written back as `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Frame {
    At(i64),
    Invalid,
}

impl Frame {
    /// Lenient integer parse: optional leading whitespace and sign, then the
    /// longest run of ASCII digits. Trailing garbage is ignored.
    pub fn parse(token: &str) -> Self {
        let s = token.trim_start();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        if end == 0 {
            return Self::Invalid;
        }
        match digits[..end].parse::<i64>() {
            Ok(n) if negative => Self::At(-n),
            Ok(n) => Self::At(n),
            Err(_) => Self::Invalid,
        }
    }

    pub fn value(&self) -> Option<i64> {
        match self {
            Self::At(n) => Some(*n),
            Self::Invalid => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::At(n) => write!(f, "{}", n),
            Self::Invalid => f.write_str("NaN"),
        }
    }
}

impl Serialize for Frame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::At(n) => serializer.serialize_i64(*n),
            Self::Invalid => serializer.serialize_none(),
        }
    }
}
