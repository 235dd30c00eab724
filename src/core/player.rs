//! Player state: identity, assigned perspective, and scoring history.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::decision::Decision;
use super::perspective::Perspective;

/// Starting resource pool for every player.
///
/// Resources and tactical-option costs are carried through the data
/// model but no rule spends them yet; the economy is a deliberately
/// unfinished mechanic.
pub const STARTING_RESOURCES: u32 = 100;

/// One player's full state for the duration of a game.
///
/// Created at game start, mutated only by engine transitions, never
/// destroyed. Histories are append-only `im::Vector`s so that copying
/// a player during a state transition is cheap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Display name, collected by the shell.
    pub name: String,

    /// Media lens assigned at game start; fixed for the whole game.
    pub perspective: Perspective,

    /// Unspent resources (reserved; see `STARTING_RESOURCES`).
    pub resources: u32,

    /// Cumulative total score.
    pub score: i64,

    /// Cumulative accuracy sub-score.
    pub accuracy_score: i64,

    /// Cumulative tactical sub-score.
    pub tactical_score: i64,

    /// Cumulative adaptation sub-score.
    pub adaptation_score: i64,

    /// Committed decisions, one per completed round, in round order.
    pub decisions: Vector<Decision>,

    /// Confidence ratings in the order they were declared.
    pub confidence_history: Vector<u8>,

    /// Final escalation level this player was exposed to, recorded at
    /// game end; 0 until then.
    pub escalation_exposure: i32,
}

impl Player {
    /// Create a fresh player with zeroed scores and empty histories.
    #[must_use]
    pub fn new(name: impl Into<String>, perspective: Perspective) -> Self {
        Self {
            name: name.into(),
            perspective,
            resources: STARTING_RESOURCES,
            score: 0,
            accuracy_score: 0,
            tactical_score: 0,
            adaptation_score: 0,
            decisions: Vector::new(),
            confidence_history: Vector::new(),
            escalation_exposure: 0,
        }
    }

    /// The decision this player committed for `round`, if any.
    #[must_use]
    pub fn decision_for(&self, round: u32) -> Option<&Decision> {
        self.decisions.iter().find(|d| d.round == round)
    }

    /// Has this player already decided for `round`?
    #[must_use]
    pub fn has_decided(&self, round: u32) -> bool {
        self.decision_for(round).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tactic::TacticalChoice;

    #[test]
    fn test_new_player_is_zeroed() {
        let player = Player::new("Ana", Perspective::Osint);

        assert_eq!(player.name, "Ana");
        assert_eq!(player.perspective, Perspective::Osint);
        assert_eq!(player.resources, STARTING_RESOURCES);
        assert_eq!(player.score, 0);
        assert!(player.decisions.is_empty());
        assert!(player.confidence_history.is_empty());
    }

    #[test]
    fn test_decision_for_round() {
        let mut player = Player::new("Bo", Perspective::Western);
        player.decisions.push_back(Decision {
            round: 1,
            tactic: TacticalChoice::Defend,
            confidence: 3,
        });
        player.decisions.push_back(Decision {
            round: 2,
            tactic: TacticalChoice::Negotiate,
            confidence: 2,
        });

        assert_eq!(player.decision_for(1).unwrap().tactic, TacticalChoice::Defend);
        assert_eq!(player.decision_for(2).unwrap().confidence, 2);
        assert!(player.decision_for(3).is_none());
        assert!(player.has_decided(2));
        assert!(!player.has_decided(3));
    }
}
