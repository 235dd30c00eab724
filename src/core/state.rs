//! The root game state value.
//!
//! ## GameState
//!
//! Single source of truth, passed by value between engine calls:
//! - Phase, round counters, acting-player index
//! - The ordered player list
//! - The shared escalation meter
//! - The in-flight tactical choice awaiting its confidence rating
//!
//! Uses `im` persistent data structures so each transition can return a
//! fresh value cheaply. Transitions themselves live in [`crate::engine`];
//! this module holds the data and read accessors.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::perspective::Perspective;
use super::tactic::TacticalChoice;
use crate::catalog::{EventCatalog, GameEvent, Narrative};

/// The phase the game is currently in.
///
/// Drives which screen the shell renders; the engine enforces which
/// transitions are legal from each phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Collecting players; no round in progress.
    Setup,
    /// Acting player reads their perspective's narrative.
    Briefing,
    /// Acting player picks a tactical response.
    Tactical,
    /// Acting player rates their confidence, 1-5.
    Confidence,
    /// Ground truth shown; round scores previewable.
    Reveal,
    /// Round score breakdown shown.
    Scores,
    /// Terminal: last round completed or escalation hit 100.
    Finished,
}

/// Complete game state.
///
/// Engine transitions take `&GameState` and return a new `GameState`;
/// nothing mutates in place across calls, which is what makes the
/// compute-without-applying score preview safe. The shell owns the
/// latest value and must not replay stale ones.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Current phase.
    pub phase: Phase,

    /// Current round, 1-based. 0 while in setup.
    pub current_round: u32,

    /// Total rounds; always equals the catalog length.
    pub total_rounds: u32,

    /// Players in seating order.
    pub players: Vector<Player>,

    /// Index of the player currently acting. Reset to 0 in the
    /// reveal/scores/finished phases.
    pub current_player: usize,

    /// The authored event sequence driving the game.
    pub catalog: Arc<EventCatalog>,

    /// Shared escalation meter, clamped to [0, 100]. Written only by
    /// `apply_round_scores`; 100 ends the game for everyone.
    pub escalation: i32,

    /// Tactical choice awaiting its confidence rating. Set by
    /// `choose_tactic`, merged into a committed `Decision` by
    /// `submit_confidence`.
    pub pending_tactic: Option<TacticalChoice>,
}

impl GameState {
    /// Create the initial state for 2-4 named players.
    ///
    /// Perspectives are assigned round-robin by seating index. Name
    /// validation (non-empty, count in range) is the shell's job; the
    /// count bound is asserted here because the whole phase machine
    /// depends on it.
    #[must_use]
    pub fn new<I, S>(names: I, catalog: Arc<EventCatalog>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vector<Player> = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Player::new(name, Perspective::assign(i)))
            .collect();

        assert!(
            (2..=4).contains(&players.len()),
            "Game requires 2-4 players, got {}",
            players.len()
        );
        assert!(!catalog.is_empty(), "Event catalog must not be empty");

        let total_rounds = catalog.len() as u32;

        Self {
            phase: Phase::Setup,
            current_round: 0,
            total_rounds,
            players,
            current_player: 0,
            catalog,
            escalation: 0,
            pending_tactic: None,
        }
    }

    /// Number of players in the game.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Is the game over?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// The event for the current round.
    ///
    /// Only meaningful while a round is active (`current_round` >= 1).
    #[must_use]
    pub fn current_event(&self) -> &GameEvent {
        &self.catalog.events()[(self.current_round - 1) as usize]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn acting_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// The narrative the acting player should be shown for the current
    /// round: the current event filtered through their perspective.
    #[must_use]
    pub fn current_narrative(&self) -> &Narrative {
        self.current_event().narrative(self.acting_player().perspective)
    }

    /// Players ordered by cumulative score, highest first. Ties keep
    /// seating order.
    #[must_use]
    pub fn standings(&self) -> Vec<Player> {
        let mut ranked: Vec<Player> = self.players.iter().cloned().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(["Ana", "Bo", "Cy"], catalog::builtin());

        assert_eq!(state.phase, Phase::Setup);
        assert_eq!(state.current_round, 0);
        assert_eq!(state.total_rounds, 5);
        assert_eq!(state.player_count(), 3);
        assert_eq!(state.current_player, 0);
        assert_eq!(state.escalation, 0);
        assert!(state.pending_tactic.is_none());
        assert!(!state.is_finished());
    }

    #[test]
    fn test_perspectives_round_robin() {
        let state = GameState::new(["A", "B", "C", "D"], catalog::builtin());

        assert_eq!(state.players[0].perspective, Perspective::Western);
        assert_eq!(state.players[1].perspective, Perspective::Russian);
        assert_eq!(state.players[2].perspective, Perspective::Osint);
        assert_eq!(state.players[3].perspective, Perspective::Neutral);
    }

    #[test]
    #[should_panic(expected = "Game requires 2-4 players")]
    fn test_too_few_players() {
        let _ = GameState::new(["Solo"], catalog::builtin());
    }

    #[test]
    #[should_panic(expected = "Game requires 2-4 players")]
    fn test_too_many_players() {
        let _ = GameState::new(["A", "B", "C", "D", "E"], catalog::builtin());
    }

    #[test]
    fn test_standings_sorted_by_score_ties_stable() {
        let mut state = GameState::new(["Ana", "Bo", "Cy"], catalog::builtin());

        let mut bo = state.players[1].clone();
        bo.score = 50;
        state.players = state.players.update(1, bo);

        let ranked = state.standings();
        assert_eq!(ranked[0].name, "Bo");
        // Ana and Cy tie at 0; seating order preserved.
        assert_eq!(ranked[1].name, "Ana");
        assert_eq!(ranked[2].name, "Cy");
    }
}
