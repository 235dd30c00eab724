//! Tactical choices: the six military responses a player can pick.
//!
//! The same enumeration serves two roles: a player's per-round decision,
//! and the key into each option's effectiveness table (how well an
//! option performs against each possible opposing choice).

use serde::{Deserialize, Serialize};

/// One of the six tactical responses.
///
/// Closed enumeration: an unrecognized identifier in catalog data is a
/// deserialization error, not a silent miss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TacticalChoice {
    DroneStrike,
    ElectronicJam,
    WireGuided,
    AiSwarm,
    Defend,
    Negotiate,
}

impl TacticalChoice {
    /// All six choices, in declaration order.
    pub const ALL: [TacticalChoice; 6] = [
        TacticalChoice::DroneStrike,
        TacticalChoice::ElectronicJam,
        TacticalChoice::WireGuided,
        TacticalChoice::AiSwarm,
        TacticalChoice::Defend,
        TacticalChoice::Negotiate,
    ];

    /// How much this choice moves the global escalation meter when a
    /// player commits to it for a round.
    ///
    /// Autonomous weapons escalate hard; de-escalatory postures pull
    /// the meter back down.
    #[must_use]
    pub fn escalation_delta(self) -> i32 {
        match self {
            TacticalChoice::AiSwarm => 15,
            TacticalChoice::DroneStrike => 5,
            TacticalChoice::WireGuided => 3,
            TacticalChoice::ElectronicJam => 2,
            TacticalChoice::Defend => -3,
            TacticalChoice::Negotiate => -8,
        }
    }
}

impl std::fmt::Display for TacticalChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TacticalChoice::DroneStrike => "drone_strike",
            TacticalChoice::ElectronicJam => "electronic_jam",
            TacticalChoice::WireGuided => "wire_guided",
            TacticalChoice::AiSwarm => "ai_swarm",
            TacticalChoice::Defend => "defend",
            TacticalChoice::Negotiate => "negotiate",
        };
        write!(f, "{name}")
    }
}
