use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn help_works() {
    Command::cargo_bin("taskboard")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("In-memory task tracking"));
}

#[test]
fn demo_prints_the_board_and_history() {
    Command::cargo_bin("taskboard")
        .expect("binary")
        .assert()
        .success()
        .stdout(contains("Move apartments"))
        .stdout(contains("History"));
}

#[test]
fn json_output_is_valid_and_carries_all_sections() {
    let output = Command::cargo_bin("taskboard")
        .expect("binary")
        .arg("--json")
        .output()
        .expect("run");
    assert!(output.status.success());

    let board: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert!(board.get("tasks").is_some());
    assert!(board.get("epics").is_some());
    assert!(board.get("subtasks").is_some());
    assert!(board.get("history").is_some());

    // The scenario leaves the epic mid-flight: one child done, one started.
    let epics = board["epics"].as_array().expect("epics array");
    assert_eq!(epics[0]["status"], "in_progress");
}
