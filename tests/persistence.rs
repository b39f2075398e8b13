//! Snapshot and CSV files written to disk and read back

mod common;

use common::{board, seeded_config};
use tempfile::TempDir;
use tictactoe_q::{
    Error, QLearningAgent, QTable,
    q_learning::{
        SavedAgent,
        serialization::{load_records_csv, read_table_csv, save_table_csv},
    },
};

#[test]
fn test_snapshot_file_roundtrip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("agent.msgpack");

    let mut agent = QLearningAgent::new(seeded_config(1)).unwrap();
    agent.train(500).unwrap();

    let saved = SavedAgent::from_agent(&agent);
    saved.save_to_file(&path).expect("Failed to save snapshot");
    assert!(path.exists(), "Saved file should exist");

    let loaded = SavedAgent::load_from_file(&path).expect("Failed to load snapshot");
    assert_eq!(loaded, saved);

    let restored = loaded.to_agent(None).unwrap();
    assert_eq!(restored.q_table(), agent.q_table());
    assert_eq!(restored.episodes_trained(), 500);
    assert_eq!(restored.config(), agent.config());
}

#[test]
fn test_resumed_training_accumulates() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("resume.msgpack");

    let mut agent = QLearningAgent::new(seeded_config(2)).unwrap();
    agent.train(200).unwrap();
    SavedAgent::from_agent(&agent).save_to_file(&path).unwrap();

    let mut resumed = SavedAgent::load_from_file(&path)
        .unwrap()
        .to_agent(None)
        .unwrap();
    let size_before = resumed.table_size();
    resumed.train(200).unwrap();

    assert_eq!(resumed.episodes_trained(), 400);
    assert!(resumed.table_size() >= size_before);
}

#[test]
fn test_csv_file_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("q_table.csv");

    let mut agent = QLearningAgent::new(seeded_config(3)).unwrap();
    agent.train(300).unwrap();

    let rows = save_table_csv(&path, agent.q_table()).unwrap();
    assert_eq!(rows, agent.table_size());

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("State before win,Last action,Reward"));

    let records = load_records_csv(&path).unwrap();
    assert_eq!(records.len(), rows);

    let reloaded = read_table_csv(std::fs::File::open(&path).unwrap()).unwrap();
    assert_eq!(&reloaded, agent.q_table());
}

#[test]
fn test_csv_keeps_board_spaces() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("single.csv");

    let mut table = QTable::new();
    table.set(board("XX OO    "), board("XXXOO    "), 1.0);
    save_table_csv(&path, &table).unwrap();

    let records = load_records_csv(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].state, board("XX OO    "));
    assert_eq!(records[0].action, board("XXXOO    "));
    assert_eq!(records[0].value, 1.0);
}

#[test]
fn test_missing_files_report_io_errors() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.msgpack");

    assert!(matches!(
        SavedAgent::load_from_file(&missing),
        Err(Error::Io { .. })
    ));
    assert!(matches!(
        load_records_csv(temp_dir.path().join("missing.csv")),
        Err(Error::Io { .. })
    ));
}

#[test]
fn test_corrupt_snapshot_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("corrupt.msgpack");
    std::fs::write(&path, b"not a snapshot").unwrap();

    assert!(matches!(
        SavedAgent::load_from_file(&path),
        Err(Error::Decode(_))
    ));
}
