//! Per-species agent collection.
//!
//! A [`Population`] owns its agents in insertion order and keeps an
//! id-to-slot index so target handles resolve without scanning. Removal is
//! two-phase: agents are flagged during a tick and compacted out by
//! [`Population::sweep`] once all updates are done, so nothing is ever
//! spliced from the collection while another agent is looking at it.

use std::collections::BTreeMap;

use trophic_types::{AgentId, DVec2, Species};

use crate::agent::Agent;

/// All agents of one species.
#[derive(Debug, Clone)]
pub struct Population {
    species: Species,
    agents: Vec<Agent>,
    index: BTreeMap<AgentId, usize>,
}

impl Population {
    /// Create an empty population for `species`.
    pub const fn new(species: Species) -> Self {
        Self {
            species,
            agents: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// The species held by this population.
    pub const fn species(&self) -> Species {
        self.species
    }

    /// Number of agents, dead-but-unswept ones included.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the population holds no agents at all.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Number of agents whose `alive` flag is still set.
    pub fn alive_count(&self) -> usize {
        self.agents.iter().filter(|a| a.alive).count()
    }

    /// Agents in insertion order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Mutable access to the agents in insertion order.
    ///
    /// Callers may change anything but an agent's `id`.
    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    /// Iterate over the agents in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    /// Look up an agent by handle.
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.index.get(&id).and_then(|&slot| self.agents.get(slot))
    }

    /// Look up an agent by handle, mutably.
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        let slot = *self.index.get(&id)?;
        self.agents.get_mut(slot)
    }

    /// Append a newborn agent.
    ///
    /// An agent whose id is already present replaces nothing: the new
    /// agent is dropped and `false` is returned.
    pub fn push(&mut self, agent: Agent) -> bool {
        if self.index.contains_key(&agent.id) {
            tracing::warn!(id = %agent.id, species = %self.species, "Duplicate agent id ignored");
            return false;
        }
        self.index.insert(agent.id, self.agents.len());
        self.agents.push(agent);
        true
    }

    /// Flag an agent as dead.
    ///
    /// Returns `true` only for the call that actually flipped the flag, so
    /// two consumers racing for the same victim cannot both claim it.
    pub fn mark_dead(&mut self, id: AgentId) -> bool {
        match self.get_mut(id) {
            Some(agent) if agent.alive => {
                agent.alive = false;
                true
            }
            _ => false,
        }
    }

    /// Remove every agent matching `doomed` and return how many went.
    pub fn sweep(&mut self, mut doomed: impl FnMut(&Agent) -> bool) -> usize {
        let before = self.agents.len();
        self.agents.retain(|agent| !doomed(agent));
        let removed = before.saturating_sub(self.agents.len());
        if removed > 0 {
            self.rebuild_index();
        }
        removed
    }

    /// The closest alive agent to `point`, with its squared distance.
    ///
    /// Agents for which `skip` returns `true` are not considered. Ties go to
    /// the agent inserted first.
    pub fn nearest_alive(
        &self,
        point: DVec2,
        skip: impl Fn(&Agent) -> bool,
    ) -> Option<(&Agent, f64)> {
        let mut best: Option<(&Agent, f64)> = None;
        for candidate in self.agents.iter().filter(|a| a.alive && !skip(a)) {
            let dist_sq = point.distance_squared(candidate.position);
            if best.is_none_or(|(_, best_sq)| dist_sq < best_sq) {
                best = Some((candidate, dist_sq));
            }
        }
        best
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .agents
            .iter()
            .enumerate()
            .map(|(slot, agent)| (agent.id, slot))
            .collect();
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Agent;
    type IntoIter = core::slice::Iter<'a, Agent>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(id: u64, x: f64, y: f64) -> Agent {
        Agent::new(AgentId(id), Species::Plant, DVec2::new(x, y), 0.0)
    }

    fn field(n: u64) -> Population {
        let mut pop = Population::new(Species::Plant);
        for i in 0..n {
            let x = f64::from(u32::try_from(i).unwrap_or(0)) * 10.0;
            assert!(pop.push(plant(i, x, 0.0)));
        }
        pop
    }

    #[test]
    fn push_and_get() {
        let pop = field(3);
        assert_eq!(pop.len(), 3);
        assert_eq!(pop.species(), Species::Plant);
        assert_eq!(pop.get(AgentId(1)).map(|a| a.position.x), Some(10.0));
        assert!(pop.get(AgentId(7)).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut pop = field(2);
        assert!(!pop.push(plant(1, 500.0, 500.0)));
        assert_eq!(pop.len(), 2);
        assert_eq!(pop.get(AgentId(1)).map(|a| a.position.x), Some(10.0));
    }

    #[test]
    fn mark_dead_is_first_writer_wins() {
        let mut pop = field(2);
        assert!(pop.mark_dead(AgentId(0)));
        assert!(!pop.mark_dead(AgentId(0)));
        assert!(!pop.mark_dead(AgentId(42)));
        assert_eq!(pop.alive_count(), 1);
        // Still present until swept.
        assert_eq!(pop.len(), 2);
    }

    #[test]
    fn sweep_compacts_and_reindexes() {
        let mut pop = field(5);
        assert!(pop.mark_dead(AgentId(1)));
        assert!(pop.mark_dead(AgentId(3)));
        let removed = pop.sweep(|a| !a.alive);
        assert_eq!(removed, 2);
        assert_eq!(pop.len(), 3);
        assert!(pop.get(AgentId(1)).is_none());
        assert!(pop.get(AgentId(3)).is_none());
        // Survivors still resolve to the right agent after compaction.
        assert_eq!(pop.get(AgentId(4)).map(|a| a.position.x), Some(40.0));
        let ids: Vec<u64> = pop.iter().map(|a| a.id.0).collect();
        assert_eq!(ids, [0, 2, 4]);
    }

    #[test]
    fn sweep_nothing() {
        let mut pop = field(3);
        assert_eq!(pop.sweep(|_| false), 0);
        assert_eq!(pop.len(), 3);
    }

    #[test]
    fn nearest_alive_respects_flags_and_skip() {
        let mut pop = field(4);
        let origin = DVec2::new(12.0, 0.0);
        let nearest = pop.nearest_alive(origin, |_| false).map(|(a, d)| (a.id, d));
        assert_eq!(nearest, Some((AgentId(1), 4.0)));

        assert!(pop.mark_dead(AgentId(1)));
        let nearest = pop.nearest_alive(origin, |_| false).map(|(a, _)| a.id);
        assert_eq!(nearest, Some(AgentId(2)));

        let nearest = pop
            .nearest_alive(origin, |a| a.id == AgentId(2))
            .map(|(a, _)| a.id);
        assert_eq!(nearest, Some(AgentId(0)));
    }

    #[test]
    fn nearest_in_empty_population() {
        let pop = Population::new(Species::Prey);
        assert!(pop.nearest_alive(DVec2::ZERO, |_| false).is_none());
    }
}
