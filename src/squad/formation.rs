//! Formations: how many defenders, midfielders and forwards start.
//!
//! One goalkeeper always starts. Unknown labels fall back to 4-4-2.

use serde::{Deserialize, Serialize};

use crate::catalog::Position;

/// A supported formation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formation {
    #[default]
    #[serde(rename = "4-4-2")]
    FourFourTwo,
    #[serde(rename = "4-3-3")]
    FourThreeThree,
    #[serde(rename = "3-5-2")]
    ThreeFiveTwo,
    #[serde(rename = "3-4-3")]
    ThreeFourThree,
    #[serde(rename = "5-3-2")]
    FiveThreeTwo,
    #[serde(rename = "5-4-1")]
    FiveFourOne,
}

impl Formation {
    /// Every formation, in the order they are offered to a manager.
    pub const ALL: [Formation; 6] = [
        Formation::FourFourTwo,
        Formation::FourThreeThree,
        Formation::ThreeFiveTwo,
        Formation::ThreeFourThree,
        Formation::FiveThreeTwo,
        Formation::FiveFourOne,
    ];

    /// Parse a label such as `"4-3-3"`.
    #[must_use]
    pub fn parse(label: &str) -> Option<Formation> {
        Self::ALL.into_iter().find(|f| f.label() == label.trim())
    }

    /// Parse a label, falling back to 4-4-2 for anything unknown.
    #[must_use]
    pub fn from_label(label: &str) -> Formation {
        Self::parse(label).unwrap_or_else(|| {
            tracing::warn!(label, "unknown formation, using 4-4-2");
            Formation::default()
        })
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Formation::FourFourTwo => "4-4-2",
            Formation::FourThreeThree => "4-3-3",
            Formation::ThreeFiveTwo => "3-5-2",
            Formation::ThreeFourThree => "3-4-3",
            Formation::FiveThreeTwo => "5-3-2",
            Formation::FiveFourOne => "5-4-1",
        }
    }

    /// `(defenders, midfielders, forwards)` in the starting XI.
    #[must_use]
    pub const fn shape(self) -> (usize, usize, usize) {
        match self {
            Formation::FourFourTwo => (4, 4, 2),
            Formation::FourThreeThree => (4, 3, 3),
            Formation::ThreeFiveTwo => (3, 5, 2),
            Formation::ThreeFourThree => (3, 4, 3),
            Formation::FiveThreeTwo => (5, 3, 2),
            Formation::FiveFourOne => (5, 4, 1),
        }
    }

    /// Number of starters at a position.
    #[must_use]
    pub const fn starters(self, position: Position) -> usize {
        let (def, mid, fwd) = self.shape();
        match position {
            Position::Goalkeeper => 1,
            Position::Defender => def,
            Position::Midfielder => mid,
            Position::Forward => fwd,
        }
    }
}

impl std::fmt::Display for Formation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_formation_starts_eleven() {
        for formation in Formation::ALL {
            let total: usize = Position::ALL.iter().map(|&p| formation.starters(p)).sum();
            assert_eq!(total, 11, "{formation}");
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        for formation in Formation::ALL {
            assert_eq!(Formation::parse(formation.label()), Some(formation));
        }
        assert_eq!(Formation::parse("4-2-4"), None);
    }

    #[test]
    fn test_unknown_label_falls_back() {
        assert_eq!(Formation::from_label("2-3-5"), Formation::FourFourTwo);
        assert_eq!(Formation::from_label(""), Formation::FourFourTwo);
        assert_eq!(Formation::from_label("5-4-1"), Formation::FiveFourOne);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Formation::ThreeFiveTwo).unwrap();
        assert_eq!(json, "\"3-5-2\"");
        let back: Formation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Formation::ThreeFiveTwo);
    }
}
