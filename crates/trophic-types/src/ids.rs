//! Type-safe agent identifier.
//!
//! Agents refer to each other (a predator locking onto a prey) through an
//! [`AgentId`] rather than a reference. Identifiers are handed out by a
//! monotonic counter and are never reused within a run, so a handle to an
//! agent that has been swept simply stops resolving.

use serde::{Deserialize, Serialize};

/// Unique identifier for an agent in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u64);

impl AgentId {
    /// The first identifier handed out in a fresh run.
    pub const FIRST: Self = Self(0);

    /// Return the identifier following this one.
    ///
    /// Saturates at `u64::MAX`; a run would need 2^64 births to get there.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Return the inner counter value.
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for AgentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "agent-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_is_monotonic() {
        let a = AgentId::FIRST;
        let b = a.next();
        let c = b.next();
        assert!(a < b);
        assert!(b < c);
        assert_eq!(c.into_inner(), 2);
    }

    #[test]
    fn next_saturates() {
        let last = AgentId(u64::MAX);
        assert_eq!(last.next(), last);
    }

    #[test]
    fn display_format() {
        assert_eq!(AgentId(17).to_string(), "agent-17");
    }
}
