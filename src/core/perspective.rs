//! Media perspectives: the fixed lens each player reads the war through.
//!
//! A perspective determines which narrative a player is shown for each
//! event and the baseline reliability weight used by the scoring
//! algorithm. It is assigned at game creation and never changes.

use serde::{Deserialize, Serialize};

/// One of the four media lenses a player can be assigned.
///
/// The enumeration is closed: catalog data referring to an unknown
/// perspective fails to deserialize rather than defaulting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Perspective {
    Western,
    Russian,
    Osint,
    Neutral,
}

impl Perspective {
    /// All perspectives in assignment order.
    pub const ALL: [Perspective; 4] = [
        Perspective::Western,
        Perspective::Russian,
        Perspective::Osint,
        Perspective::Neutral,
    ];

    /// Perspective for the player at `index`, assigned round-robin.
    ///
    /// ```
    /// use warfog::core::Perspective;
    ///
    /// assert_eq!(Perspective::assign(0), Perspective::Western);
    /// assert_eq!(Perspective::assign(2), Perspective::Osint);
    /// assert_eq!(Perspective::assign(4), Perspective::Western);
    /// ```
    #[must_use]
    pub fn assign(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Baseline accuracy of this lens: how close its narratives track
    /// ground truth. OSINT is closest, Russian state media furthest.
    #[must_use]
    pub fn base_accuracy(self) -> f64 {
        match self {
            Perspective::Osint => 0.90,
            Perspective::Neutral => 0.70,
            Perspective::Western => 0.50,
            Perspective::Russian => 0.20,
        }
    }
}

impl std::fmt::Display for Perspective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Perspective::Western => "western",
            Perspective::Russian => "russian",
            Perspective::Osint => "osint",
            Perspective::Neutral => "neutral",
        };
        write!(f, "{name}")
    }
}
