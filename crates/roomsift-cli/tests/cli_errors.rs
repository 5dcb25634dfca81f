use assert_cmd::Command;
use predicates::prelude::*;
use roomsift_testing::TestWorld;

#[allow(deprecated)]
fn roomsift(world: &TestWorld) -> Command {
    let mut cmd = Command::cargo_bin("roomsift").unwrap();
    world.configure_command(&mut cmd);
    cmd
}

#[test]
fn test_missing_source_file_fails() {
    let world = TestWorld::new();

    roomsift(&world)
        .args(["rooms", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load rooms from missing.json"));
}

#[test]
fn test_malformed_source_fails() {
    let world = TestWorld::new().with_file("rooms.json", r#"{"id": "101"}"#);

    roomsift(&world)
        .args(["rooms", "rooms.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item source error"));
}

#[test]
fn test_invalid_today_is_rejected_by_parser() {
    let world = TestWorld::new().with_sample_reservations();

    roomsift(&world)
        .args(["reservations", "reservations.json", "--today", "ayer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--today"));
}

#[test]
fn test_malformed_config_fails() {
    let world = TestWorld::new()
        .with_sample_rooms()
        .with_config("[timing\n");

    roomsift(&world)
        .args(["rooms", "rooms.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn test_rust_log_overrides_log_level() {
    let world = TestWorld::new()
        .with_sample_rooms()
        .with_env("RUST_LOG", "debug");

    roomsift(&world)
        .args(["rooms", "rooms.json", "--log-level", "error"])
        .assert()
        .success()
        .stderr(predicate::str::contains("listing evaluated"));
}
