//! Core value types: perspectives, tactical choices, decisions, players,
//! phases, and the root game state.
//!
//! These are pure data; the state machine and scoring live in
//! [`crate::engine`], the authored event content in [`crate::catalog`].

pub mod decision;
pub mod perspective;
pub mod player;
pub mod state;
pub mod tactic;

pub use decision::Decision;
pub use perspective::Perspective;
pub use player::{Player, STARTING_RESOURCES};
pub use state::{GameState, Phase};
pub use tactic::TacticalChoice;
