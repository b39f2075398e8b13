//! Persistence for the learned table and the agent.
//!
//! Two formats are supported:
//!
//! - CSV: one row per table entry with the board before the move, the board
//!   after it and the value. Human readable; carries no hyperparameters.
//! - Snapshot: the whole agent (configuration, table, episode count) encoded
//!   as MessagePack, so training can be resumed.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Error, Result},
    q_learning::{AgentConfig, QLearningAgent, QTable},
    tictactoe::Board,
};

/// A single row of the CSV table export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QTableRecord {
    #[serde(rename = "State before win")]
    pub state: Board,
    #[serde(rename = "Last action")]
    pub action: Board,
    #[serde(rename = "Reward")]
    pub value: f64,
}

/// Write every entry of `table` as CSV, sorted by state then action.
pub fn write_table_csv<W: Write>(writer: W, table: &QTable) -> Result<usize> {
    let mut records: Vec<QTableRecord> = table
        .iter()
        .map(|(state, action, value)| QTableRecord {
            state,
            action,
            value,
        })
        .collect();
    records.sort_by_key(|record| (record.state.to_string(), record.action.to_string()));

    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in &records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(records.len())
}

/// Read CSV rows written by [`write_table_csv`] back into a table.
pub fn read_table_csv<R: Read>(reader: R) -> Result<QTable> {
    Ok(read_records_csv(reader)?
        .into_iter()
        .map(|record| (record.state, record.action, record.value))
        .collect())
}

/// Read the raw CSV rows, keeping file order.
pub fn read_records_csv<R: Read>(reader: R) -> Result<Vec<QTableRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for record in csv_reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

pub fn save_table_csv<P: AsRef<Path>>(path: P, table: &QTable) -> Result<usize> {
    let file = File::create(path.as_ref()).map_err(|source| Error::Io {
        operation: format!("create {}", path.as_ref().display()),
        source,
    })?;
    let written = write_table_csv(BufWriter::new(file), table)?;
    debug!(path = %path.as_ref().display(), rows = written, "wrote Q-table CSV");
    Ok(written)
}

pub fn load_records_csv<P: AsRef<Path>>(path: P) -> Result<Vec<QTableRecord>> {
    let file = File::open(path.as_ref()).map_err(|source| Error::Io {
        operation: format!("open {}", path.as_ref().display()),
        source,
    })?;
    read_records_csv(BufReader::new(file))
}

/// Versioned snapshot of a trained agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedAgent {
    pub version: u32,
    pub config: AgentConfig,
    pub episodes_trained: usize,
    table: QTable,
}

impl SavedAgent {
    pub const VERSION: u32 = 1;

    pub fn from_agent(agent: &QLearningAgent) -> Self {
        Self {
            version: Self::VERSION,
            config: *agent.config(),
            episodes_trained: agent.episodes_trained(),
            table: agent.q_table().clone(),
        }
    }

    pub fn table(&self) -> &QTable {
        &self.table
    }

    /// Rebuild the agent, optionally replacing the stored configuration.
    ///
    /// The table and episode count always come from the snapshot.
    pub fn to_agent(&self, config: Option<AgentConfig>) -> Result<QLearningAgent> {
        if self.version != Self::VERSION {
            return Err(Error::UnsupportedSnapshotVersion {
                found: self.version,
                expected: Self::VERSION,
            });
        }
        let config = config.unwrap_or(self.config);
        Ok(QLearningAgent::with_table(config, self.table.clone())?
            .with_episodes_trained(self.episodes_trained))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(rmp_serde::to_vec(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(rmp_serde::from_slice(bytes)?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref()).map_err(|source| Error::Io {
            operation: format!("create {}", path.as_ref().display()),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        rmp_serde::encode::write(&mut writer, self)?;
        writer.flush()?;
        debug!(
            path = %path.as_ref().display(),
            entries = self.table.size(),
            "saved agent snapshot"
        );
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(|source| Error::Io {
            operation: format!("open {}", path.as_ref().display()),
            source,
        })?;
        let saved: SavedAgent = rmp_serde::decode::from_read(BufReader::new(file))?;
        debug!(
            path = %path.as_ref().display(),
            version = saved.version,
            entries = saved.table.size(),
            "loaded agent snapshot"
        );
        Ok(saved)
    }
}
