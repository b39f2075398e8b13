use clap::Parser;
use tempfile::tempdir;
use tictactoe_q::{
    cli::commands::{demo, evaluate, export, show, train},
    q_learning::{SavedAgent, serialization::load_records_csv},
};

#[test]
fn train_writes_snapshot_csv_and_summary() {
    let tmp = tempdir().unwrap();
    let snapshot = tmp.path().join("agent.msgpack");
    let csv = tmp.path().join("q_table.csv");
    let summary = tmp.path().join("summary.json");

    let args = train::TrainArgs::parse_from([
        "tictactoe-q-train",
        "--stages",
        "50,30",
        "--eval-games",
        "20",
        "--seed",
        "4",
        "--no-progress",
        "--output",
        snapshot.to_str().unwrap(),
        "--csv",
        csv.to_str().unwrap(),
        "--summary",
        summary.to_str().unwrap(),
    ]);
    train::execute(args).expect("training should succeed");

    let saved = SavedAgent::load_from_file(&snapshot).unwrap();
    assert_eq!(saved.episodes_trained, 80);
    assert_eq!(saved.config.seed, Some(4));

    let records = load_records_csv(&csv).unwrap();
    assert_eq!(records.len(), saved.table().size());

    let contents = std::fs::read_to_string(&summary).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["stages"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["stages"][1]["episodes_trained"], 80);
    let baseline = &parsed["baseline"];
    let games: u64 = ["x_wins", "o_wins", "draws"]
        .iter()
        .map(|key| baseline[*key].as_u64().unwrap())
        .sum();
    assert_eq!(games, 20);
}

#[test]
fn resume_continues_episode_count() {
    let tmp = tempdir().unwrap();
    let first = tmp.path().join("first.msgpack");
    let second = tmp.path().join("second.msgpack");

    train::execute(train::TrainArgs::parse_from([
        "tictactoe-q-train",
        "-s",
        "40",
        "-g",
        "5",
        "--no-progress",
        "-O",
        first.to_str().unwrap(),
    ]))
    .unwrap();

    train::execute(train::TrainArgs::parse_from([
        "tictactoe-q-train",
        "-s",
        "60",
        "-g",
        "5",
        "--epsilon",
        "0.3",
        "--no-progress",
        "--resume",
        first.to_str().unwrap(),
        "-O",
        second.to_str().unwrap(),
    ]))
    .unwrap();

    let saved = SavedAgent::load_from_file(&second).unwrap();
    assert_eq!(saved.episodes_trained, 100);
    assert_eq!(saved.config.epsilon, 0.3);
}

#[test]
fn invalid_hyperparameters_are_rejected() {
    let args = train::TrainArgs::parse_from([
        "tictactoe-q-train",
        "-s",
        "10",
        "--alpha",
        "0",
        "--no-progress",
    ]);
    assert!(train::execute(args).is_err());
}

#[test]
fn snapshot_commands_read_trained_agent() {
    let tmp = tempdir().unwrap();
    let snapshot = tmp.path().join("agent.msgpack");
    let csv = tmp.path().join("exported.csv");
    let results = tmp.path().join("results.json");

    train::execute(train::TrainArgs::parse_from([
        "tictactoe-q-train",
        "-s",
        "100",
        "-g",
        "5",
        "--seed",
        "9",
        "--no-progress",
        "-O",
        snapshot.to_str().unwrap(),
    ]))
    .unwrap();

    evaluate::execute(evaluate::EvaluateArgs::parse_from([
        "tictactoe-q-evaluate",
        snapshot.to_str().unwrap(),
        "--games",
        "25",
        "--export",
        results.to_str().unwrap(),
    ]))
    .expect("evaluation should succeed");
    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&results).unwrap()).unwrap();
    assert_eq!(parsed["games"], 25);
    assert_eq!(parsed["episodes_trained"], 100);

    export::execute(export::ExportArgs::parse_from([
        "tictactoe-q-export",
        snapshot.to_str().unwrap(),
        "-o",
        csv.to_str().unwrap(),
    ]))
    .expect("export should succeed");
    let saved = SavedAgent::load_from_file(&snapshot).unwrap();
    assert_eq!(load_records_csv(&csv).unwrap().len(), saved.table().size());

    show::execute(show::ShowArgs::parse_from([
        "tictactoe-q-show",
        csv.to_str().unwrap(),
        "-n",
        "3",
    ]))
    .expect("show should succeed");

    demo::execute(demo::DemoArgs::parse_from([
        "tictactoe-q-demo",
        snapshot.to_str().unwrap(),
        "--seed",
        "1",
    ]))
    .expect("demo should succeed");
}

#[test]
fn missing_snapshot_fails_cleanly() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope.msgpack");
    let args = demo::DemoArgs::parse_from(["tictactoe-q-demo", missing.to_str().unwrap()]);
    assert!(demo::execute(args).is_err());
}
