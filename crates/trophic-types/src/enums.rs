//! Enumeration types for the Trophic simulation.

use serde::{Deserialize, Serialize};

/// The species of an agent.
///
/// Species differ only in data (speed cap, which population they live in,
/// which thresholds apply); there is no per-species behaviour code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Species {
    /// Hunts prey; dies only of old age.
    Predator,
    /// Grazes plants; dies when eaten.
    Prey,
    /// Immobile food source; dies when eaten.
    Plant,
}

impl Species {
    /// All species in trophic order, top of the food chain first.
    pub const ALL: [Self; 3] = [Self::Predator, Self::Prey, Self::Plant];

    /// The species this one feeds on, if any.
    pub const fn food(self) -> Option<Self> {
        match self {
            Self::Predator => Some(Self::Prey),
            Self::Prey => Some(Self::Plant),
            Self::Plant => None,
        }
    }
}

impl core::fmt::Display for Species {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Predator => write!(f, "Predator"),
            Self::Prey => write!(f, "Prey"),
            Self::Plant => write!(f, "Plant"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_chain() {
        assert_eq!(Species::Predator.food(), Some(Species::Prey));
        assert_eq!(Species::Prey.food(), Some(Species::Plant));
        assert_eq!(Species::Plant.food(), None);
    }

    #[test]
    fn display_matches_trace_labels() {
        let labels: Vec<String> = Species::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["Predator", "Prey", "Plant"]);
    }

    #[test]
    fn serde_uses_variant_names() {
        let json = serde_json::to_string(&Species::Prey).unwrap_or_default();
        assert_eq!(json, "\"Prey\"");
    }
}
