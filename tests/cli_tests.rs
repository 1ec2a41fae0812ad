use regex::Regex;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn data(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fontaine"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_rate_json() {
    let player = data("player.json");
    let json = stdout_json(&run(&["rate", "--player", &player, "--json"]));

    assert_eq!(json["nickname"], "Traveler");
    let characters = json["characters"].as_array().unwrap();
    assert_eq!(characters.len(), 3);
    assert_eq!(characters[1]["name"], "Bennett");
    assert_eq!(characters[1]["artifacts"][0]["rating"]["label"], "Excellent");
    assert_eq!(characters[1]["progress"]["bucketed"], 75.0);
}

#[test]
fn test_rate_character_filter() {
    let player = data("player.json");
    let json = stdout_json(&run(&["rate", "-p", &player, "-n", "xiang", "--json"]));

    let characters = json["characters"].as_array().unwrap();
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0]["name"], "Xiangling");
}

#[test]
fn test_rate_table_output() {
    let player = data("player.json");
    let output = run(&["rate", "--player", &player]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("JUDGEMENT: Traveler (700000001)"));
    let row = Regex::new(r"Bennett[^\n]*\|[^\n]*75%").unwrap();
    assert!(row.is_match(&stdout), "missing Bennett row:\n{}", stdout);
    let rating = Regex::new(r"Excellent \(0\.9\)").unwrap();
    assert!(rating.is_match(&stdout));
}

#[test]
fn test_config_file_and_flag_precedence() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("fontaine.json");
    // Everything at or above 0.5 is excellent
    fs::write(
        &config_path,
        r#"{ "ratings": { "rating_thresholds": "0.1,0.2,0.3,0.5" } }"#,
    )
    .unwrap();
    let config = config_path.to_string_lossy().into_owned();
    let player = data("player.json");

    let json = stdout_json(&run(&[
        "--config", &config, "rate", "-p", &player, "-n", "Xiangling", "--json",
    ]));
    let circlet = &json["characters"][0]["artifacts"][1];
    assert_eq!(circlet["slot"], "Circlet");
    assert_eq!(circlet["rating"]["label"], "Excellent");

    let json = stdout_json(&run(&[
        "--config",
        &config,
        "rate",
        "-p",
        &player,
        "-n",
        "Xiangling",
        "--rating-thresholds",
        "0.3,0.5,0.7,0.9",
        "--json",
    ]));
    let circlet = &json["characters"][0]["artifacts"][1];
    assert_eq!(circlet["rating"]["label"], "Good");
}

#[test]
fn test_cohort_json_and_csv() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("cohort.csv");
    let csv = csv_path.to_string_lossy().into_owned();
    let input = data("cohort.json");

    let json = stdout_json(&run(&["cohort", "-i", &input, "--csv", &csv, "--json"]));
    let characters = json["characters"].as_array().unwrap();
    assert_eq!(characters[0]["bundle"]["owner"]["nickname"], "Lumine");
    assert_eq!(characters[0]["rank"], 1);
    assert_eq!(characters[0]["styles"]["cv"], "above");
    assert_eq!(characters[2]["styles"]["cv"], "below");

    let exported = fs::read_to_string(&csv_path).unwrap();
    assert!(exported.starts_with("owner_uid,owner_name,stat_hp"));
    assert_eq!(exported.lines().count(), 4);
}

#[test]
fn test_cohort_table_output() {
    let input = data("cohort.json");
    let output = run(&["cohort", "--input", &input]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Hu Tao ACROSS 3 PLAYERS"));
    assert!(stdout.contains("Paimon"));
}

#[test]
fn test_missing_player_file_fails() {
    let output = run(&["rate", "--player", "/no/such/player.json"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
}
