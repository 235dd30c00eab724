//! Round scoring: pure computation, separable from application.
//!
//! `compute_round_outcome` derives everything the reveal and results
//! screens need (per-player sub-scores, the round's escalation change,
//! the nuclear-ending flag) without touching persistent state.
//! `apply_round_scores` (in the parent module) commits exactly one such
//! computation per round.
//!
//! ## Sub-scores
//!
//! - **Accuracy**: how reliable the player's assigned lens is, adjusted
//!   by how well their stated confidence matched that reliability.
//! - **Tactical**: the chosen option's summed effectiveness relative to
//!   the event's designated best response, scaled to 40.
//! - **Adaptation**: did the player move their confidence in the right
//!   direction given their lens, compared to last round?

use crate::catalog::GameEvent;
use crate::core::player::Player;
use crate::core::state::GameState;
use crate::core::tactic::TacticalChoice;

/// Reward for confidence within 0.3 of the lens's base accuracy.
const CALIBRATION_BONUS: f64 = 20.0;
/// Penalty for confidence out of step with the lens.
const CALIBRATION_PENALTY: f64 = -10.0;
/// Tolerance for the calibration comparison.
const CALIBRATION_TOLERANCE: f64 = 0.3;
/// Tactical score when the chosen option equals the best response.
const TACTICAL_SCALE: f64 = 40.0;

/// One player's score line for a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreLine {
    pub name: String,
    pub accuracy: i64,
    pub tactical: i64,
    pub adaptation: i64,
    pub total: i64,
}

impl ScoreLine {
    fn zero(name: &str) -> Self {
        Self {
            name: name.to_string(),
            accuracy: 0,
            tactical: 0,
            adaptation: 0,
            total: 0,
        }
    }
}

/// Everything a round's scoring produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Score lines in seating order, one per player. Players who never
    /// decided this round score all-zero.
    pub lines: Vec<ScoreLine>,

    /// Net escalation movement: per-tactic deltas over every committed
    /// decision this round, plus the event's own risk contribution.
    pub escalation_change: i32,

    /// Escalation after applying the change, clamped to [0, 100].
    pub new_escalation: i32,

    /// True when the clamped meter reached 100: immediate game over.
    pub nuclear_ending: bool,
}

impl GameState {
    /// Compute the current round's outcome without committing anything.
    ///
    /// Pure and repeatable: the shell calls this to render the reveal
    /// screen, then `apply_round_scores` commits the same numbers once.
    #[must_use]
    pub fn compute_round_outcome(&self) -> RoundOutcome {
        let event = self.current_event();
        let round = self.current_round;

        let lines = self
            .players
            .iter()
            .map(|player| score_player(player, event, round))
            .collect();

        let decision_deltas: i32 = self
            .players
            .iter()
            .filter_map(|p| p.decision_for(round))
            .map(|d| d.tactic.escalation_delta())
            .sum();

        let risk_contribution = (event.escalation_risk * 10.0).round() as i32;
        let escalation_change = decision_deltas + risk_contribution;
        let new_escalation = (self.escalation + escalation_change).clamp(0, 100);

        RoundOutcome {
            lines,
            escalation_change,
            new_escalation,
            nuclear_ending: new_escalation >= 100,
        }
    }
}

fn score_player(player: &Player, event: &GameEvent, round: u32) -> ScoreLine {
    // No decision recorded: spectator-style zero line, never an error.
    let Some(decision) = player.decision_for(round) else {
        return ScoreLine::zero(&player.name);
    };

    let accuracy = accuracy_score(player, decision.confidence);
    let tactical = tactical_score(event, decision.tactic);
    let adaptation = adaptation_score(player, decision.confidence);

    ScoreLine {
        name: player.name.clone(),
        accuracy,
        tactical,
        adaptation,
        total: accuracy + tactical + adaptation,
    }
}

/// Base accuracy of the lens scaled to 50, plus the calibration bonus
/// when stated confidence (mapped to [0.2, 1.0]) tracks that accuracy.
/// Floored at zero.
fn accuracy_score(player: &Player, confidence: u8) -> i64 {
    let base = player.perspective.base_accuracy();
    let stated = f64::from(confidence) / 5.0;
    let calibration = if (base - stated).abs() < CALIBRATION_TOLERANCE {
        CALIBRATION_BONUS
    } else {
        CALIBRATION_PENALTY
    };
    ((base * 50.0 + calibration).round() as i64).max(0)
}

/// Chosen option's effectiveness sum over all six matchups, relative to
/// the best response's sum, scaled to 40. Choosing the best response
/// yields exactly 40. A choice the event does not offer scores zero.
fn tactical_score(event: &GameEvent, choice: TacticalChoice) -> i64 {
    let (Some(chosen), Some(best)) = (event.option(choice), event.option(event.best_response))
    else {
        return 0;
    };

    let ratio = chosen.effectiveness_sum() / best.effectiveness_sum();
    (ratio * TACTICAL_SCALE).round() as i64
}

/// +15 for lowering confidence under an unreliable lens, +10 for
/// sustaining it under a reliable one. Needs a previous round to
/// compare against.
fn adaptation_score(player: &Player, confidence: u8) -> i64 {
    if player.confidence_history.len() < 2 {
        return 0;
    }
    let prev = player.confidence_history[player.confidence_history.len() - 2];

    let base = player.perspective.base_accuracy();
    if base < 0.5 && confidence < prev {
        15
    } else if base >= 0.5 && confidence >= prev {
        10
    } else {
        0
    }
}
