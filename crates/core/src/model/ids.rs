use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 1-based position of a slide within a deck.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlideIndex(u32);

impl SlideIndex {
    /// First slide of any deck.
    pub const FIRST: SlideIndex = SlideIndex(1);

    /// Creates a new `SlideIndex`. Positions are 1-based; zero is clamped up.
    #[must_use]
    pub fn new(position: u32) -> Self {
        Self(position.max(1))
    }

    /// Returns the underlying 1-based position.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The slide after this one.
    #[must_use]
    pub fn succ(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The slide before this one, saturating at the first slide.
    #[must_use]
    pub fn pred(&self) -> Self {
        Self(self.0.saturating_sub(1).max(1))
    }
}

impl fmt::Debug for SlideIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlideIndex({})", self.0)
    }
}

impl fmt::Display for SlideIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing a `SlideIndex` from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSlideIndexError;

impl fmt::Display for ParseSlideIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse slide index from string")
    }
}

impl std::error::Error for ParseSlideIndexError {}

impl FromStr for SlideIndex {
    type Err = ParseSlideIndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u32>() {
            Ok(raw) if raw >= 1 => Ok(SlideIndex::new(raw)),
            _ => Err(ParseSlideIndexError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_index_display() {
        assert_eq!(SlideIndex::new(4).to_string(), "4");
    }

    #[test]
    fn slide_index_from_str() {
        let index: SlideIndex = "7".parse().unwrap();
        assert_eq!(index, SlideIndex::new(7));
    }

    #[test]
    fn slide_index_from_str_rejects_zero_and_garbage() {
        assert!("0".parse::<SlideIndex>().is_err());
        assert!("x".parse::<SlideIndex>().is_err());
    }

    #[test]
    fn slide_index_neighbours() {
        let index = SlideIndex::new(3);
        assert_eq!(index.succ(), SlideIndex::new(4));
        assert_eq!(index.pred(), SlideIndex::new(2));
        assert_eq!(SlideIndex::FIRST.pred(), SlideIndex::FIRST);
    }
}
