use serde::{Deserialize, Serialize};
use std::fmt;

/// Staff engagement rating, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawEngagement", into = "u8")]
pub struct Engagement(u8);

impl Engagement {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const DEFAULT: u8 = 3;

    /// Clamps out-of-range input instead of rejecting it.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Lenient parse used for imported and typed values: blank or
    /// non-numeric text falls back to the default rating.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Self::new(n);
        }
        match s.parse::<f64>() {
            Ok(f) if f.is_finite() => Self::new(f.round() as i64),
            _ => Self::default(),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn step(self, delta: i64) -> Self {
        Self::new(i64::from(self.0).saturating_add(delta))
    }
}

impl Default for Engagement {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for Engagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Engagement> for u8 {
    fn from(e: Engagement) -> Self {
        e.0
    }
}

/// Shapes the rating has been stored in: a number, a numeric string
/// (CSV re-import), or nothing at all.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEngagement {
    Int(i64),
    Float(f64),
    Text(String),
    Null,
}

impl From<RawEngagement> for Engagement {
    fn from(raw: RawEngagement) -> Self {
        match raw {
            RawEngagement::Int(n) => Engagement::new(n),
            RawEngagement::Float(f) if f.is_finite() => Engagement::new(f.round() as i64),
            RawEngagement::Text(s) => Engagement::parse(&s),
            _ => Engagement::default(),
        }
    }
}
