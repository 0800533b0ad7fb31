//! Trace sinks: append-only consumers of [`TraceRecord`]s.
//!
//! The engine writes one title record before the first tick and, when
//! enabled, one position record per agent per sampled tick. Where those
//! records go is up to the sink; this module provides the trait plus two
//! in-process sinks. The CSV file sink lives in the engine binary.

use trophic_types::{Species, TraceEvent, TraceRecord};

use crate::state::SimulationState;

/// Errors a trace sink can report.
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    /// Writing to the underlying destination failed.
    #[error("trace write failed: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

/// A destination for trace records.
pub trait TraceSink {
    /// Append one record.
    fn record(&mut self, record: &TraceRecord) -> Result<(), TraceError>;

    /// Push buffered records to their destination.
    fn flush(&mut self) -> Result<(), TraceError> {
        Ok(())
    }
}

/// A sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn record(&mut self, _record: &TraceRecord) -> Result<(), TraceError> {
        Ok(())
    }
}

/// A sink that keeps every record in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryTraceSink {
    records: Vec<TraceRecord>,
}

impl MemoryTraceSink {
    /// Create an empty sink.
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// All records received so far.
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Consume the sink and return its records.
    pub fn into_records(self) -> Vec<TraceRecord> {
        self.records
    }

    /// Position records for one tick, optionally filtered by species.
    pub fn positions_at(
        &self,
        timestep: u64,
        species: Option<Species>,
    ) -> impl Iterator<Item = &TraceRecord> {
        self.records.iter().filter(move |record| {
            record.timestep == timestep
                && matches!(
                    record.event,
                    TraceEvent::Position { species: s, .. } if species.is_none_or(|want| want == s)
                )
        })
    }
}

impl TraceSink for MemoryTraceSink {
    fn record(&mut self, record: &TraceRecord) -> Result<(), TraceError> {
        self.records.push(record.clone());
        Ok(())
    }
}

/// Write one position record per agent, predators first, then prey, then
/// plants. Returns the number of records written.
pub fn emit_positions(
    sink: &mut dyn TraceSink,
    timestep: u64,
    state: &SimulationState,
) -> Result<usize, TraceError> {
    let mut written: usize = 0;
    for species in Species::ALL {
        for agent in state.population(species) {
            sink.record(&TraceRecord::position(timestep, species, agent.position))?;
            written = written.saturating_add(1);
        }
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trophic_agents::Spawner;

    use crate::config::SimulationConfig;

    #[test]
    fn memory_sink_keeps_order() {
        let mut sink = MemoryTraceSink::new();
        assert!(sink.record(&TraceRecord::title("first")).is_ok());
        assert!(sink.flush().is_ok());
        assert_eq!(sink.records().len(), 1);
        let records = sink.into_records();
        assert!(matches!(
            records.first().map(|r| &r.event),
            Some(TraceEvent::Title { description }) if description == "first"
        ));
    }

    #[test]
    fn emit_positions_covers_every_agent() {
        let config = SimulationConfig::default();
        let state = SimulationState::seeded(&config, Spawner::from_seed(4, config.bounds()));
        let mut sink = MemoryTraceSink::new();
        let written = emit_positions(&mut sink, 3, &state);
        assert_eq!(written.ok(), Some(120));
        assert_eq!(sink.positions_at(3, None).count(), 120);
        assert_eq!(sink.positions_at(3, Some(Species::Predator)).count(), 10);
        assert_eq!(sink.positions_at(3, Some(Species::Plant)).count(), 100);
        assert_eq!(sink.positions_at(4, None).count(), 0);
        // Predators come first.
        assert!(matches!(
            sink.records().first().map(|r| &r.event),
            Some(TraceEvent::Position { species: Species::Predator, .. })
        ));
    }

    #[test]
    fn null_sink_accepts_everything() {
        let mut sink = NullTraceSink;
        assert!(sink.record(&TraceRecord::title("ignored")).is_ok());
        assert!(sink.flush().is_ok());
    }
}
