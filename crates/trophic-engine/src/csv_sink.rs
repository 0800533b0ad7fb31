//! CSV trace file writer.
//!
//! One line per record, no header:
//!
//! ```text
//! 0,Title,<description>
//! <tick>,Position,<Species>,<x>,<y>
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use trophic_core::trace::{TraceError, TraceSink};
use trophic_types::{TraceEvent, TraceRecord};

/// A [`TraceSink`] that writes CSV lines to any writer.
#[derive(Debug)]
pub struct CsvTraceSink<W: Write> {
    writer: W,
    lines: u64,
}

impl CsvTraceSink<BufWriter<File>> {
    /// Create (or truncate) the file at `path` and write to it through a
    /// buffer.
    pub fn create(path: &Path) -> Result<Self, TraceError> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> CsvTraceSink<W> {
    /// Wrap an existing writer.
    pub const fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    /// Number of lines written so far.
    pub const fn lines(&self) -> u64 {
        self.lines
    }

    /// Flush and return the inner writer.
    #[cfg(test)]
    pub fn into_inner(mut self) -> Result<W, TraceError> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> TraceSink for CsvTraceSink<W> {
    fn record(&mut self, record: &TraceRecord) -> Result<(), TraceError> {
        match &record.event {
            TraceEvent::Title { description } => {
                writeln!(self.writer, "{},Title,{description}", record.timestep)?;
            }
            TraceEvent::Position { species, x, y } => {
                writeln!(self.writer, "{},Position,{species},{x},{y}", record.timestep)?;
            }
        }
        self.lines = self.lines.saturating_add(1);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TraceError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use trophic_types::{DVec2, Species};

    fn written(records: &[TraceRecord]) -> String {
        let mut sink = CsvTraceSink::new(Vec::new());
        for record in records {
            assert!(sink.record(record).is_ok());
        }
        assert_eq!(sink.lines(), records.len() as u64);
        let bytes = sink.into_inner().unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn title_line() {
        let out = written(&[TraceRecord::title("Predator Prey Relationship")]);
        assert_eq!(out, "0,Title,Predator Prey Relationship\n");
    }

    #[test]
    fn position_lines() {
        let out = written(&[
            TraceRecord::position(7, Species::Prey, DVec2::new(12.5, 3.0)),
            TraceRecord::position(7, Species::Plant, DVec2::new(0.0, 1439.25)),
        ]);
        assert_eq!(out, "7,Position,Prey,12.5,3\n7,Position,Plant,0,1439.25\n");
    }

    #[test]
    fn write_failures_surface() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk gone"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let mut sink = CsvTraceSink::new(Broken);
        let result = sink.record(&TraceRecord::title("x"));
        assert!(matches!(result, Err(TraceError::Io { .. })));
        assert_eq!(sink.lines(), 0);
    }

    #[test]
    fn creates_file_on_disk() {
        let path = std::env::temp_dir().join(format!("trophic-csv-{}.csv", std::process::id()));
        let sink = CsvTraceSink::create(&path);
        assert!(sink.is_ok());
        if let Ok(mut sink) = sink {
            assert!(sink.record(&TraceRecord::title("disk")).is_ok());
            assert!(sink.flush().is_ok());
        }
        let contents = std::fs::read_to_string(&path).ok();
        let _ = std::fs::remove_file(&path);
        assert_eq!(contents.as_deref(), Some("0,Title,disk\n"));
    }
}
