//! # warfog
//!
//! Engine for a local pass-the-device narrative wargame. Two to four
//! players each read a biased media account of the same scripted
//! wartime event, pick a tactical response under incomplete
//! information, rate their confidence, then see the ground truth and
//! the round's scores. A shared escalation meter accumulates across
//! rounds; at 100 the game ends for everyone.
//!
//! ## Design Principles
//!
//! 1. **Value-semantics state machine**: every transition takes the
//!    current `GameState` and returns a new one. Persistent data
//!    structures (`im`) keep the copies cheap.
//!
//! 2. **Compute/apply separation**: round scoring is a pure function
//!    the shell can preview for its reveal screen; applying it commits
//!    the numbers exactly once.
//!
//! 3. **Closed enumerations**: perspectives and tactical choices are
//!    fixed-variant types, so an unrecognized identifier in authored
//!    data is a type error, never a silent lookup miss.
//!
//! 4. **Data below, logic above**: the event catalog is immutable
//!    authored JSON, validated at load; the engine consumes it
//!    read-only.
//!
//! ## Modules
//!
//! - `core`: perspectives, tactical choices, decisions, players,
//!   phases, and the root `GameState`
//! - `catalog`: event data types, JSON loading/validation, the
//!   built-in five-event campaign
//! - `engine`: the phase state machine and the round-scoring algorithm
//!
//! The presentation layer is out of scope: a shell owns the latest
//! `GameState`, renders whatever the current phase calls for, and
//! feeds validated input into the transitions.

pub mod catalog;
pub mod core;
pub mod engine;

pub use crate::catalog::{
    builtin, CatalogError, EventCatalog, GameEvent, Narrative, TacticalOption,
};
pub use crate::core::{Decision, GameState, Perspective, Phase, Player, TacticalChoice};
pub use crate::engine::{RoundOutcome, ScoreLine};
