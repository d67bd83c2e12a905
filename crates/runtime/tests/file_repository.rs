mod common;

use arkana_runtime::{CharacterRepository, FileCharacterRepository, RepositoryError};
use common::*;

#[test]
fn records_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let repository = FileCharacterRepository::new(dir.path()).unwrap();
    let record = alice(12, vec![scene("ward").with_caster("Alice"), turns("haste", 3, 2), permanent("mark")]);

    repository.insert(&record).unwrap();
    let loaded = repository.load(ALICE).unwrap().unwrap();

    assert_eq!(loaded, record);
    assert!(repository.exists(ALICE));
    assert_eq!(repository.list_ids().unwrap(), vec![ALICE]);
}

#[test]
fn stored_json_uses_wire_shape() {
    let dir = tempfile::tempdir().unwrap();
    let repository = FileCharacterRepository::new(dir.path()).unwrap();
    repository
        .insert(&alice(15, vec![scene("ward"), turns("haste", 3, 2)]))
        .unwrap();

    let raw = std::fs::read_to_string(dir.path().join("character_1.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let effects = json["activeEffects"].as_array().unwrap();
    assert_eq!(effects[0]["duration"], "scene");
    assert_eq!(effects[0]["turnsLeft"], 999);
    assert_eq!(effects[1]["duration"], "turns:3");
    assert_eq!(effects[1]["turnsLeft"], 2);
    assert_eq!(json["stats"]["maxHp"], 15);
}

#[test]
fn legacy_json_without_live_stats_loads() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("character_7.json"),
        r#"{
            "id": 7,
            "name": "Brom",
            "attributes": {"physical": 3, "dexterity": 2, "mental": 1, "perception": 2, "maxHp": 18},
            "stats": {"health": 18, "maxHp": 18},
            "activeEffects": [{"effectId": "haste", "name": "Haste", "duration": "turns:3"}]
        }"#,
    )
    .unwrap();
    let repository = FileCharacterRepository::new(dir.path()).unwrap();

    let record = repository.load(arkana_core::CharacterId(7)).unwrap().unwrap();

    assert_eq!(record.version, 0);
    assert!(record.live_stats.is_empty());
    assert_eq!(record.active_effects[0].lifetime.turns_left(), Some(3));
}

#[test]
fn stale_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let repository = FileCharacterRepository::new(dir.path()).unwrap();
    let record = alice(15, Vec::new());
    repository.insert(&record).unwrap();
    repository.update(&record, 0).unwrap();

    let err = repository.update(&record, 0).unwrap_err();

    assert!(matches!(
        err,
        RepositoryError::VersionConflict {
            expected: 0,
            actual: 1,
            ..
        }
    ));
}

#[test]
fn delete_removes_file() {
    let dir = tempfile::tempdir().unwrap();
    let repository = FileCharacterRepository::new(dir.path()).unwrap();
    repository.insert(&alice(15, Vec::new())).unwrap();

    repository.delete(ALICE).unwrap();

    assert!(!repository.exists(ALICE));
    assert!(repository.load(ALICE).unwrap().is_none());
    repository.delete(ALICE).unwrap();
}

#[test]
fn lock_and_temp_files_are_not_listed() {
    let dir = tempfile::tempdir().unwrap();
    let repository = FileCharacterRepository::new(dir.path()).unwrap();
    repository.insert(&alice(15, vec![turns("haste", 3, 3)])).unwrap();
    let record = repository.load(ALICE).unwrap().unwrap();
    repository.update(&record, 0).unwrap();

    assert!(dir.path().join("character_1.lock").exists());
    assert_eq!(repository.list_ids().unwrap(), vec![ALICE]);

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().starts_with(".character_"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn unreadable_duration_does_not_block_scene_end() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("character_1.json"),
        r#"{
            "id": 1,
            "name": "Alice",
            "attributes": {"physical": 1, "dexterity": 1, "mental": 1, "perception": 1, "maxHp": 15},
            "stats": {"health": 15, "maxHp": 15},
            "activeEffects": [
                {"effectId": "odd", "name": "Odd", "duration": "rounds:2", "turnsLeft": 2},
                {"effectId": "mark", "name": "Mark", "duration": "permanent"}
            ]
        }"#,
    )
    .unwrap();
    let repository = std::sync::Arc::new(FileCharacterRepository::new(dir.path()).unwrap());
    let service = service_with(repository.clone());

    let report = service.end_scene(ALICE).unwrap();

    assert_eq!(report.effects_removed, 1);
    let stored = repository.load(ALICE).unwrap().unwrap();
    let remaining: Vec<_> = stored.active_effects.iter().map(|e| e.effect_id.as_str()).collect();
    assert_eq!(remaining, vec!["mark"]);
    assert_eq!(stored.active_effects[0].lifetime.duration().to_string(), "permanent");
}
