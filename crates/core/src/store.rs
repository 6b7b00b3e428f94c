//! Flat-file persistence for the fleet.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::{
    fleet::Fleet,
    models::Boat,
    record::{format_record, parse_record},
};

/// Reads and writes the fleet data file.
#[derive(Debug, Clone)]
pub struct FleetFile {
    path: PathBuf,
}

impl FleetFile {
    /// Create a handle for the data file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read up to `capacity` boats from the file, one record per line.
    ///
    /// Blank lines are skipped and lines beyond the capacity are ignored.
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, and a
    /// read error part-way through keeps the boats read so far.
    pub fn load(&self, capacity: usize) -> Result<Vec<Boat>> {
        let file = File::open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        let mut reader = BufReader::new(file);

        let mut boats = Vec::new();
        let mut buf = Vec::new();
        loop {
            if boats.len() >= capacity {
                info!("capacity {capacity} reached, ignoring remaining records");
                break;
            }
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(err) => {
                    warn!(
                        "stopped reading {} after {} boats: {err}",
                        self.path.display(),
                        boats.len()
                    );
                    break;
                }
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            if line.trim().is_empty() {
                continue;
            }
            boats.push(parse_record(line));
        }

        info!("loaded {} boats from {}", boats.len(), self.path.display());
        Ok(boats)
    }

    /// Load the file into a fleet with the given capacity.
    pub fn load_fleet(&self, capacity: usize) -> Result<Fleet> {
        let boats = self.load(capacity)?;
        Ok(Fleet::from_boats(boats, capacity))
    }

    /// Overwrite the file with every boat in the fleet, in its current order.
    pub fn save(&self, fleet: &Fleet) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("failed to open {} for writing", self.path.display()))?;
        let mut writer = BufWriter::new(file);
        for boat in fleet {
            writeln!(writer, "{}", format_record(boat))
                .with_context(|| format!("failed to write {}", self.path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        info!("saved {} boats to {}", fleet.len(), self.path.display());
        Ok(())
    }
}
