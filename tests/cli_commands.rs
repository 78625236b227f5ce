use clap::Parser;
use qroute::{
    SavedQTable,
    cli::commands::{
        graph::{self, GraphArgs},
        replay::{self, ReplayArgs},
        route::{self, RouteArgs},
    },
};
use tempfile::tempdir;

mod common;

use common::labels;

#[test]
fn route_with_seed_prints_and_saves_table() {
    let tmp = tempdir().unwrap();
    let table_path = tmp.path().join("l1.json");
    let trace_path = tmp.path().join("trace.jsonl");

    let args = RouteArgs::parse_from([
        "qroute-route",
        "L9",
        "L1",
        "--seed",
        "42",
        "--iterations",
        "1000",
        "--save-table",
        table_path.to_str().unwrap(),
        "--observations",
        trace_path.to_str().unwrap(),
    ]);
    let planned = route::plan(&args).expect("route planning should succeed");
    assert_eq!(labels(&planned.route), vec!["L9", "L8", "L5", "L2", "L1"]);

    let saved = SavedQTable::load_from_file(&table_path).unwrap();
    assert_eq!(saved.goal, "L1");
    assert_eq!(saved.seed, Some(42));
    assert_eq!(saved.config.iterations, 1000);

    let trace = std::fs::read_to_string(&trace_path).unwrap();
    assert_eq!(trace.lines().count(), 1000);
    let first: serde_json::Value = serde_json::from_str(trace.lines().next().unwrap()).unwrap();
    assert_eq!(first["iteration"], 0);
}

#[test]
fn replay_reuses_saved_goal() {
    let tmp = tempdir().unwrap();
    let table_path = tmp.path().join("l1.json");

    let args = RouteArgs::parse_from([
        "qroute-route",
        "L9",
        "L1",
        "--seed",
        "7",
        "--save-table",
        table_path.to_str().unwrap(),
    ]);
    route::execute(args).unwrap();

    let args = ReplayArgs::parse_from([
        "qroute-replay",
        "--table",
        table_path.to_str().unwrap(),
        "L5",
    ]);
    let (goal, route) = replay::replay(&args).unwrap();
    assert_eq!(goal, "L1");
    assert_eq!(labels(&route), vec!["L5", "L2", "L1"]);

    replay::execute(args).unwrap();
}

#[test]
fn route_rejects_unknown_location() {
    let args = RouteArgs::parse_from(["qroute-route", "L99", "L1"]);
    let err = route::execute(args).unwrap_err();
    assert!(format!("{err:#}").contains("unknown location 'L99'"));
}

#[test]
fn route_rejects_invalid_gamma() {
    let args = RouteArgs::parse_from(["qroute-route", "L9", "L1", "--gamma", "1.5"]);
    let err = route::execute(args).unwrap_err();
    assert!(err.to_string().contains("discount factor"));
}

#[test]
fn route_verbose_with_table_succeeds() {
    let args = RouteArgs::parse_from([
        "qroute-route",
        "L9",
        "L8",
        "--seed",
        "1",
        "-v",
        "--show-table",
    ]);
    let planned = route::plan(&args).unwrap();
    assert_eq!(labels(&planned.route), vec!["L9", "L8"]);
}

#[test]
fn replay_missing_table_fails() {
    let args = ReplayArgs::parse_from(["qroute-replay", "--table", "/nonexistent/table.json", "L1"]);
    assert!(replay::execute(args).is_err());
}

#[test]
fn graph_command_runs() {
    graph::execute(GraphArgs::default()).unwrap();
}
