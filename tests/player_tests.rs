mod common;

use common::{crit_goblet, flat_flower};
use fontaine::error::FontaineError;
use fontaine::player::{rate_character, rate_player, CharacterSnapshot, PlayerSnapshot};
use fontaine::scorer::{RatingBucket, Scorer, Slot};
use std::path::PathBuf;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn test_snapshot_codes_are_normalized() {
    let snapshot = PlayerSnapshot::load_from_file(data("player.json")).unwrap();
    let xiangling = &snapshot.characters[0];

    assert_eq!(xiangling.artifacts[0].slot, Slot::Circlet);
    assert_eq!(xiangling.artifacts[1].slot, Slot::Flower);
    let main = xiangling.artifacts[0].main_stat().unwrap();
    assert_eq!(main.name, "Crit DMG");
    let subs: Vec<&str> = xiangling.artifacts[0]
        .substats()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(subs, ["Crit RATE", "ATK%", "Flat ATK", "HP%"]);
}

#[test]
fn test_rate_player_orders_characters_and_slots() {
    let snapshot = PlayerSnapshot::load_from_file(data("player.json")).unwrap();
    let report = rate_player(&Scorer::default(), &snapshot).unwrap();

    let names: Vec<&str> = report.characters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Amber", "Bennett", "Xiangling"]);

    let xiangling = &report.characters[2];
    let slots: Vec<Slot> = xiangling.artifacts.iter().map(|a| a.slot).collect();
    assert_eq!(slots, [Slot::Flower, Slot::Circlet]);
    assert_eq!(xiangling.artifacts[0].bucket, RatingBucket::Terrible);
    assert_eq!(xiangling.artifacts[1].bucket, RatingBucket::Good);
    // -2 + 1 = -1 -> 40 -> 50
    assert_eq!(xiangling.progress.bucketed, 50.0);

    let bennett = &report.characters[1];
    assert_eq!(bennett.artifacts[0].score, 0.9);
    // +2 -> 70 -> 75
    assert_eq!(bennett.progress.bucketed, 75.0);

    let amber = &report.characters[0];
    assert!(amber.artifacts.is_empty());
    assert_eq!(amber.progress.bucketed, 0.0);
}

#[test]
fn test_duplicate_slot_rejected() {
    let character = CharacterSnapshot {
        name: "Bennett".to_string(),
        artifacts: vec![crit_goblet(), flat_flower(), crit_goblet()],
    };
    let err = rate_character(&Scorer::default(), &character).unwrap_err();
    assert!(matches!(err, FontaineError::Validation(_)));
}

#[test]
fn test_invalid_artifact_fails_the_player() {
    let mut broken = crit_goblet();
    broken.stats.clear();
    let snapshot = PlayerSnapshot {
        uid: "1".to_string(),
        nickname: "Test".to_string(),
        characters: vec![CharacterSnapshot {
            name: "Bennett".to_string(),
            artifacts: vec![broken],
        }],
    };
    assert!(rate_player(&Scorer::default(), &snapshot).is_err());
}

#[test]
fn test_malformed_snapshot_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ \"uid\": 1 ").unwrap();
    let err = PlayerSnapshot::load_from_file(&path).unwrap_err();
    assert!(matches!(err, FontaineError::Json(_)));
}

#[test]
fn test_slot_parses_names_and_equip_codes() {
    assert_eq!("circlet".parse::<Slot>().unwrap(), Slot::Circlet);
    assert_eq!("EQUIP_NECKLACE".parse::<Slot>().unwrap(), Slot::Feather);
    assert_eq!("equip_shoes".parse::<Slot>().unwrap(), Slot::Sands);
    assert!("Hat".parse::<Slot>().is_err());
    assert_eq!(Slot::Goblet.to_string(), "Goblet");
}
