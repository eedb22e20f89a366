//! Orientation of an asset derived from its declared dimensions.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::Dimensions;
use crate::config::CompareMode;

/// Orientation recorded on a size variant.
///
/// There is no square case: equal sides are `Portrait`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    #[default]
    Portrait,
}

impl Orientation {
    /// `Landscape` when width compares greater than height, else `Portrait`.
    pub fn of(dims: &Dimensions, mode: CompareMode) -> Self {
        if compare(&dims.width, &dims.height, mode) == Ordering::Greater {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compare two declared sizes.
///
/// `Auto` compares numerically when both sides are plain numbers and
/// falls back to byte order otherwise; `Lexical` always uses byte order.
fn compare(a: &str, b: &str, mode: CompareMode) -> Ordering {
    if mode == CompareMode::Auto
        && let (Some(a), Some(b)) = (parse_number(a), parse_number(b))
    {
        return a.partial_cmp(&b).unwrap_or(Ordering::Equal);
    }
    a.as_bytes().cmp(b.as_bytes())
}

/// Parse a numeric-looking string, allowing surrounding whitespace.
fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orient(w: &str, h: &str, mode: CompareMode) -> Orientation {
        Orientation::of(&Dimensions::new(w, h), mode)
    }

    #[test]
    fn test_wider_is_landscape() {
        assert_eq!(orient("300", "150", CompareMode::Auto), Orientation::Landscape);
        assert_eq!(orient("300", "150", CompareMode::Lexical), Orientation::Landscape);
    }

    #[test]
    fn test_tie_is_portrait() {
        assert_eq!(orient("100", "100", CompareMode::Auto), Orientation::Portrait);
        assert_eq!(orient("0", "0", CompareMode::Lexical), Orientation::Portrait);
    }

    #[test]
    fn test_taller_is_portrait() {
        assert_eq!(orient("10", "90", CompareMode::Auto), Orientation::Portrait);
    }

    #[test]
    fn test_auto_compares_numbers_numerically() {
        // "9" > "10" byte-wise, but not as numbers
        assert_eq!(orient("9", "10", CompareMode::Auto), Orientation::Portrait);
        assert_eq!(orient("9", "10", CompareMode::Lexical), Orientation::Landscape);
        assert_eq!(orient("64.5", "64", CompareMode::Auto), Orientation::Landscape);
    }

    #[test]
    fn test_auto_falls_back_for_units() {
        // Not both numeric: byte order, "9cm" > "10cm"
        assert_eq!(orient("9cm", "10cm", CompareMode::Auto), Orientation::Landscape);
        assert_eq!(orient("100%", "50", CompareMode::Auto), Orientation::Portrait);
    }

    #[test]
    fn test_serialized_lowercase() {
        let json = serde_json::to_string(&Orientation::Landscape).unwrap();
        assert_eq!(json, "\"landscape\"");
        assert_eq!(Orientation::Portrait.to_string(), "portrait");
    }
}
