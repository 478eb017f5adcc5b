use assert_cmd::Command;
use serde_json::Value;

fn graph_trace() -> &'static str {
    r#"{"steps":[
        {"id":0,"description":"start",
         "data":{"nodes":[{"id":"a"},{"id":"b"},{"id":"c"}],
                 "edges":[{"from":"a","to":"b"},{"from":"b","to":"c"}]},
         "variables":{"queue":["a"]}},
        {"id":1,"description":"visit a","highlights":[0]}
    ]}"#
}

fn run(args: &[&str], stdin: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("vistra-cli")
        .unwrap()
        .args(args)
        .write_stdin(stdin)
        .assert()
}

fn stdout_json(assert: assert_cmd::assert::Assert) -> Value {
    let output = assert.success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn steps_summarizes_each_step() {
    let json = stdout_json(run(&["steps"], graph_trace()));
    let steps = json.as_array().unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0]["description"], "start");
    assert_eq!(steps[0]["variables"][0], "queue");
    assert_eq!(steps[1]["highlights"][0], 0);
}

#[test]
fn validate_accepts_monotonic_ids() {
    let json = stdout_json(run(&["validate"], graph_trace()));
    assert_eq!(json["ok"], true);
    assert_eq!(json["steps"], 2);
}

#[test]
fn validate_rejects_out_of_order_ids() {
    let trace = r#"{"steps":[{"id":5,"description":""},{"id":2,"description":""}]}"#;
    run(&["validate"], trace).failure().code(1);
}

#[test]
fn scene_resolves_graph_geometry() {
    let json = stdout_json(run(
        &["scene", "--step", "0", "--type", "circle", "--node-size", "40"],
        graph_trace(),
    ));
    let nodes = json["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 3);
    // 3-node circle on the default 800x600 canvas: first node at the top.
    let x = nodes[0]["x"].as_f64().unwrap();
    let y = nodes[0]["y"].as_f64().unwrap();
    assert!((x - 400.0).abs() < 1e-6);
    assert!((y - 90.0).abs() < 1e-6);
    assert_eq!(json["edges"].as_array().unwrap().len(), 2);
}

#[test]
fn scene_grid_lights_the_step_highlights() {
    let trace = r#"{"steps":[
        {"id":0,"description":"scan",
         "data":{"rows":2,"cols":2,
                 "cells":[{"row":0,"col":0},{"row":0,"col":1},
                          {"row":1,"col":0},{"row":1,"col":1}]},
         "highlights":[3]}
    ]}"#;
    let json = stdout_json(run(&["scene", "--step", "0", "--type", "grid"], trace));
    let cells = json["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 4);
    let lit: Vec<&Value> = cells
        .iter()
        .filter(|c| c["isHighlighted"] == true)
        .collect();
    assert_eq!(lit.len(), 1);
    assert_eq!(lit[0]["row"], 1);
    assert_eq!(lit[0]["col"], 1);
}

#[test]
fn missing_step_index_fails() {
    run(&["scene", "--step", "9"], graph_trace()).failure().code(1);
}

#[test]
fn unknown_flag_prints_usage() {
    run(&["--bogus"], "").failure().code(2);
}
