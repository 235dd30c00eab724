//! Per-round player decisions.

use serde::{Deserialize, Serialize};

use super::tactic::TacticalChoice;

/// A committed decision: one per player per round.
///
/// A decision only exists once both halves of the input have been
/// supplied (the tactical choice, then the confidence rating). The
/// in-flight half lives in `GameState::pending_tactic` until then.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Round this decision was made in (1-based).
    pub round: u32,

    /// The tactical response chosen.
    pub tactic: TacticalChoice,

    /// Self-rated confidence in the player's read of events, 1-5.
    pub confidence: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_serde() {
        let decision = Decision {
            round: 2,
            tactic: TacticalChoice::Negotiate,
            confidence: 4,
        };

        let json = serde_json::to_string(&decision).unwrap();
        let parsed: Decision = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, decision);
    }
}
