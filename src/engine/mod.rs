//! The turn/round/phase state machine.
//!
//! Every operation is a value transition: it takes `&GameState` and
//! returns the successor state, leaving the input untouched. The shell
//! drives the machine in strict sequence:
//!
//! ```text
//! setup --start--> briefing(player 0, round 1)
//! briefing --acknowledge--> tactical
//! tactical --choose--> confidence
//! confidence --submit-->
//!     next player's briefing, or reveal once all have decided
//! reveal --apply scores--> scores   [finished if escalation hit 100]
//! scores --advance-->
//!     next round's briefing, or finished after the last round
//! ```
//!
//! Preconditions (correct phase, pending choice present) are the
//! shell's contract and are debug-asserted rather than surfaced as a
//! runtime error type: nothing in this system recovers from calling
//! operations out of order.

pub mod scoring;

pub use scoring::{RoundOutcome, ScoreLine};

use crate::core::decision::Decision;
use crate::core::state::{GameState, Phase};
use crate::core::tactic::TacticalChoice;

impl GameState {
    /// Begin the game: setup -> first player's briefing of round 1.
    #[must_use]
    pub fn start(&self) -> Self {
        debug_assert_eq!(self.phase, Phase::Setup);

        let mut next = self.clone();
        next.phase = Phase::Briefing;
        next.current_round = 1;
        next.current_player = 0;

        log::debug!(
            "game started: {} players, {} rounds",
            next.player_count(),
            next.total_rounds
        );
        next
    }

    /// The acting player has read their briefing; move to the tactical
    /// decision.
    #[must_use]
    pub fn acknowledge_briefing(&self) -> Self {
        debug_assert_eq!(self.phase, Phase::Briefing);

        let mut next = self.clone();
        next.phase = Phase::Tactical;
        next
    }

    /// Stage the acting player's tactical choice and ask for their
    /// confidence. The choice is held in the pending slot only; it
    /// becomes a committed decision when confidence arrives.
    #[must_use]
    pub fn choose_tactic(&self, choice: TacticalChoice) -> Self {
        debug_assert_eq!(self.phase, Phase::Tactical);

        let mut next = self.clone();
        next.pending_tactic = Some(choice);
        next.phase = Phase::Confidence;
        next
    }

    /// Merge the staged tactical choice with the confidence rating into
    /// a committed decision for the acting player, then rotate to the
    /// next player's briefing, or to the reveal once every player has
    /// decided this round.
    ///
    /// A player can commit at most one decision per round; the pending
    /// slot plus the turn rotation make a second submission
    /// unreachable through the legal call sequence, and a duplicate is
    /// dropped rather than overwriting.
    #[must_use]
    pub fn submit_confidence(&self, confidence: u8) -> Self {
        debug_assert_eq!(self.phase, Phase::Confidence);
        debug_assert!(
            (1..=5).contains(&confidence),
            "confidence must be 1-5, got {confidence}"
        );

        let mut next = self.clone();
        let tactic = next
            .pending_tactic
            .take()
            .expect("confidence submitted without a staged tactical choice");

        let index = next.current_player;
        let mut player = next.players[index].clone();
        if !player.has_decided(next.current_round) {
            player.decisions.push_back(Decision {
                round: next.current_round,
                tactic,
                confidence,
            });
            player.confidence_history.push_back(confidence);
        }
        next.players = next.players.update(index, player);

        if index + 1 < next.players.len() {
            next.current_player = index + 1;
            next.phase = Phase::Briefing;
        } else {
            next.current_player = 0;
            next.phase = Phase::Reveal;
        }
        next
    }

    /// Commit the current round's scores and escalation movement.
    ///
    /// Runs the same pure computation the reveal screen previews, adds
    /// each score line into the cumulative player totals, and writes
    /// the new escalation level. If the meter reached 100 the game ends
    /// immediately at exactly 100, skipping the per-round score screen.
    #[must_use]
    pub fn apply_round_scores(&self) -> Self {
        debug_assert_eq!(self.phase, Phase::Reveal);

        let outcome = self.compute_round_outcome();
        let mut next = self.clone();

        for (index, line) in outcome.lines.iter().enumerate() {
            let mut player = next.players[index].clone();
            player.score += line.total;
            player.accuracy_score += line.accuracy;
            player.tactical_score += line.tactical;
            player.adaptation_score += line.adaptation;
            next.players = next.players.update(index, player);
        }

        if outcome.nuclear_ending {
            next.escalation = 100;
            next.phase = Phase::Finished;
            log::debug!(
                "round {}: escalation reached 100, game over",
                next.current_round
            );
        } else {
            next.escalation = outcome.new_escalation;
            next.phase = Phase::Scores;
            log::debug!(
                "round {}: escalation {:+} -> {}",
                next.current_round,
                outcome.escalation_change,
                next.escalation
            );
        }
        next
    }

    /// Leave the score screen: start the next round, or end the game
    /// after the last one.
    ///
    /// Ending applies the one-time escalation penalty (half the final
    /// meter, rounded) to every player's total, floored at zero, and
    /// records the escalation level each player was exposed to.
    #[must_use]
    pub fn advance_round(&self) -> Self {
        debug_assert_eq!(self.phase, Phase::Scores);

        let mut next = self.clone();

        if next.current_round >= next.total_rounds {
            let penalty = (f64::from(next.escalation) * 0.5).round() as i64;
            for index in 0..next.players.len() {
                let mut player = next.players[index].clone();
                player.score = (player.score - penalty).max(0);
                player.escalation_exposure = next.escalation;
                next.players = next.players.update(index, player);
            }
            next.phase = Phase::Finished;
            log::debug!(
                "game complete after round {}: escalation penalty {penalty}",
                next.current_round
            );
        } else {
            next.current_round += 1;
            next.current_player = 0;
            next.phase = Phase::Briefing;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn started() -> GameState {
        GameState::new(["Ana", "Bo"], catalog::builtin()).start()
    }

    /// Play one player's full turn.
    fn take_turn(state: &GameState, tactic: TacticalChoice, confidence: u8) -> GameState {
        state
            .acknowledge_briefing()
            .choose_tactic(tactic)
            .submit_confidence(confidence)
    }

    #[test]
    fn test_start_enters_round_one() {
        let state = started();
        assert_eq!(state.phase, Phase::Briefing);
        assert_eq!(state.current_round, 1);
        assert_eq!(state.current_player, 0);
    }

    #[test]
    fn test_transitions_do_not_mutate_input() {
        let state = started();
        let _ = state.acknowledge_briefing();
        assert_eq!(state.phase, Phase::Briefing);

        let tactical = state.acknowledge_briefing();
        let _ = tactical.choose_tactic(TacticalChoice::Defend);
        assert!(tactical.pending_tactic.is_none());
        assert_eq!(tactical.phase, Phase::Tactical);
    }

    #[test]
    fn test_choose_tactic_stages_without_committing() {
        let state = started().acknowledge_briefing().choose_tactic(TacticalChoice::Defend);

        assert_eq!(state.phase, Phase::Confidence);
        assert_eq!(state.pending_tactic, Some(TacticalChoice::Defend));
        assert!(state.players[0].decisions.is_empty());
    }

    #[test]
    fn test_submit_confidence_commits_and_rotates() {
        let state = take_turn(&started(), TacticalChoice::Defend, 3);

        assert_eq!(state.phase, Phase::Briefing);
        assert_eq!(state.current_player, 1);
        assert!(state.pending_tactic.is_none());

        let decision = state.players[0].decision_for(1).unwrap();
        assert_eq!(decision.tactic, TacticalChoice::Defend);
        assert_eq!(decision.confidence, 3);
        assert_eq!(state.players[0].confidence_history.last(), Some(&3));
    }

    #[test]
    fn test_last_player_moves_to_reveal() {
        let state = take_turn(&started(), TacticalChoice::Defend, 3);
        let state = take_turn(&state, TacticalChoice::Negotiate, 2);

        assert_eq!(state.phase, Phase::Reveal);
        assert_eq!(state.current_player, 0);
        assert!(state.players.iter().all(|p| p.has_decided(1)));
    }

    #[test]
    fn test_duplicate_decision_is_dropped() {
        let state = take_turn(&started(), TacticalChoice::Defend, 3);

        // Replay player 0's turn against the already-decided state.
        let mut replay = state.clone();
        replay.current_player = 0;
        replay.phase = Phase::Tactical;
        let replay = replay
            .choose_tactic(TacticalChoice::AiSwarm)
            .submit_confidence(5);

        let decisions = &replay.players[0].decisions;
        assert_eq!(decisions.len(), 1);
        assert_eq!(decisions[0].tactic, TacticalChoice::Defend);
        assert_eq!(replay.players[0].confidence_history.len(), 1);
    }

    #[test]
    fn test_apply_round_scores_accumulates() {
        let state = take_turn(&started(), TacticalChoice::DroneStrike, 3);
        let state = take_turn(&state, TacticalChoice::Defend, 2);

        let outcome = state.compute_round_outcome();
        let applied = state.apply_round_scores();

        assert_eq!(applied.phase, Phase::Scores);
        for (i, line) in outcome.lines.iter().enumerate() {
            assert_eq!(applied.players[i].score, line.total);
            assert_eq!(applied.players[i].accuracy_score, line.accuracy);
            assert_eq!(applied.players[i].tactical_score, line.tactical);
            assert_eq!(applied.players[i].adaptation_score, line.adaptation);
        }
        assert_eq!(applied.escalation, outcome.new_escalation);
    }

    #[test]
    fn test_nuclear_ending_skips_score_screen() {
        let mut state = take_turn(&started(), TacticalChoice::DroneStrike, 3);
        state = take_turn(&state, TacticalChoice::DroneStrike, 3);
        state.escalation = 99;

        let applied = state.apply_round_scores();
        assert_eq!(applied.phase, Phase::Finished);
        assert_eq!(applied.escalation, 100);
    }

    #[test]
    fn test_advance_round_increments() {
        let state = take_turn(&started(), TacticalChoice::Defend, 3);
        let state = take_turn(&state, TacticalChoice::Defend, 3);
        let state = state.apply_round_scores().advance_round();

        assert_eq!(state.phase, Phase::Briefing);
        assert_eq!(state.current_round, 2);
        assert_eq!(state.current_player, 0);
    }

    #[test]
    fn test_final_round_applies_escalation_penalty() {
        let mut state = take_turn(&started(), TacticalChoice::Defend, 3);
        state = take_turn(&state, TacticalChoice::Defend, 3);
        state = state.apply_round_scores();

        // Force last-round conditions with a known meter level.
        state.current_round = state.total_rounds;
        state.escalation = 40;
        let before: Vec<i64> = state.players.iter().map(|p| p.score).collect();

        let finished = state.advance_round();
        assert_eq!(finished.phase, Phase::Finished);
        for (i, player) in finished.players.iter().enumerate() {
            assert_eq!(player.score, (before[i] - 20).max(0));
            assert_eq!(player.escalation_exposure, 40);
        }
    }

    #[test]
    #[should_panic(expected = "staged tactical choice")]
    fn test_confidence_without_pending_choice_panics() {
        let mut state = started();
        state.phase = Phase::Confidence;
        let _ = state.submit_confidence(3);
    }
}
