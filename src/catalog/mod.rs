//! The authored event catalog.
//!
//! Events are data, not logic: an ordered, immutable sequence authored
//! as JSON, loaded once at startup, and consumed read-only by the
//! engine (round N plays the event at index N-1).
//!
//! Each event carries a single ground truth, one narrative per media
//! perspective, the tactical options offered that round with their
//! pairwise effectiveness tables, the designated best response, and an
//! escalation-risk weight.
//!
//! Loading validates the structural invariants that scoring depends on,
//! so the engine itself never has to handle malformed data.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::perspective::Perspective;
use crate::core::tactic::TacticalChoice;

/// The built-in five-event campaign.
const BUILTIN_CAMPAIGN: &str = include_str!("../../assets/events.json");

/// Errors from loading or validating catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse event catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("event catalog contains no events")]
    Empty,

    #[error("event `{event}`: missing narrative for perspective `{perspective}`")]
    MissingNarrative {
        event: String,
        perspective: Perspective,
    },

    #[error("event `{event}`, option `{option}`: no effectiveness entry versus `{versus}`")]
    MissingEffectiveness {
        event: String,
        option: TacticalChoice,
        versus: TacticalChoice,
    },

    #[error("event `{event}`: best response `{best}` is not among the offered options")]
    UnknownBestResponse {
        event: String,
        best: TacticalChoice,
    },

    #[error("event `{event}`: escalation risk {risk} outside [0, 1]")]
    RiskOutOfRange { event: String, risk: f64 },
}

/// How one media lens reports an event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    pub headline: String,
    pub description: String,
    pub casualties: String,
    /// Editorial spin: how the outlet wants the reader to feel about it.
    pub framing: String,
}

/// A tactical response offered for one event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TacticalOption {
    pub id: TacticalChoice,
    pub name: String,
    pub description: String,

    /// Effectiveness in [0, 1] versus each of the six possible choices.
    /// Validation guarantees an entry for every choice, including `id`
    /// itself.
    pub effectiveness: BTreeMap<TacticalChoice, f64>,

    /// Resource cost (authored but not yet spent by any rule).
    pub cost: u32,
}

impl TacticalOption {
    /// Sum of this option's effectiveness over all six matchups; the
    /// scoring algorithm compares this against the best response's sum.
    #[must_use]
    pub fn effectiveness_sum(&self) -> f64 {
        self.effectiveness.values().sum()
    }
}

/// One authored wartime event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: String,

    /// What actually happened, revealed after all players decide.
    pub ground_truth: String,

    /// One narrative per media perspective.
    pub narratives: BTreeMap<Perspective, Narrative>,

    /// The responses offered this round (a subset of the six choices).
    pub tactical_options: Vec<TacticalOption>,

    /// The objectively best response given the ground truth.
    pub best_response: TacticalChoice,

    /// How much this event inherently risks escalation, in [0, 1].
    pub escalation_risk: f64,
}

impl GameEvent {
    /// The offered option with the given id, if this event offers it.
    #[must_use]
    pub fn option(&self, choice: TacticalChoice) -> Option<&TacticalOption> {
        self.tactical_options.iter().find(|o| o.id == choice)
    }

    /// The narrative for a perspective.
    ///
    /// Validation guarantees all four perspectives are present.
    #[must_use]
    pub fn narrative(&self, perspective: Perspective) -> &Narrative {
        &self.narratives[&perspective]
    }
}

/// The ordered, immutable event sequence for one campaign.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventCatalog {
    events: Vec<GameEvent>,
}

impl EventCatalog {
    /// Parse and validate a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the JSON is malformed or any
    /// structural invariant fails (empty catalog, missing narrative,
    /// incomplete effectiveness table, best response not offered,
    /// out-of-range risk).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Build a catalog from pre-constructed events.
    ///
    /// # Errors
    ///
    /// Same validation as [`EventCatalog::from_json`].
    pub fn from_events(events: Vec<GameEvent>) -> Result<Self, CatalogError> {
        let catalog = Self { events };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.events.is_empty() {
            return Err(CatalogError::Empty);
        }

        for event in &self.events {
            for perspective in Perspective::ALL {
                if !event.narratives.contains_key(&perspective) {
                    return Err(CatalogError::MissingNarrative {
                        event: event.id.clone(),
                        perspective,
                    });
                }
            }

            for option in &event.tactical_options {
                for versus in TacticalChoice::ALL {
                    if !option.effectiveness.contains_key(&versus) {
                        return Err(CatalogError::MissingEffectiveness {
                            event: event.id.clone(),
                            option: option.id,
                            versus,
                        });
                    }
                }
            }

            if event.option(event.best_response).is_none() {
                return Err(CatalogError::UnknownBestResponse {
                    event: event.id.clone(),
                    best: event.best_response,
                });
            }

            if !(0.0..=1.0).contains(&event.escalation_risk) {
                return Err(CatalogError::RiskOutOfRange {
                    event: event.id.clone(),
                    risk: event.escalation_risk,
                });
            }
        }

        Ok(())
    }

    /// Number of events (== total rounds of a game).
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Is the catalog empty? (`from_json` never yields one.)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in round order.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// The event played in `round` (1-based).
    #[must_use]
    pub fn event_for_round(&self, round: u32) -> Option<&GameEvent> {
        round
            .checked_sub(1)
            .and_then(|i| self.events.get(i as usize))
    }
}

/// The built-in campaign, parsed once on first use.
#[must_use]
pub fn builtin() -> Arc<EventCatalog> {
    static CATALOG: OnceLock<Arc<EventCatalog>> = OnceLock::new();
    Arc::clone(CATALOG.get_or_init(|| {
        Arc::new(
            EventCatalog::from_json(BUILTIN_CAMPAIGN)
                .expect("built-in campaign data is valid"),
        )
    }))
}
