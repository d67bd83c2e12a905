mod common;

use arkana_core::{EffectError, LiveStatValue};
use arkana_runtime::{CharacterRepository, RuntimeError};
use common::*;

#[test]
fn turn_decays_and_drops_expired_effects() {
    let (service, repository) = memory_service(vec![alice(15, vec![turns("haste", 3, 3), turns("daze", 1, 1)])]);

    let report = service.use_turn(ALICE).unwrap();

    assert_eq!(report.effects_removed, 1);
    assert_eq!(report.effects_remaining, 1);
    assert_eq!(report.removed, ["daze"]);

    let stored = repository.load(ALICE).unwrap().unwrap();
    assert_eq!(stored.active_effects[0].lifetime.turns_left(), Some(2));
    assert!(!stored.live_stats.has_flag("stun", "dazed"));
    assert_eq!(stored.version, 1);
}

#[test]
fn scene_end_clears_temporaries_and_clamps_health() {
    let (service, repository) = memory_service(vec![alice(
        23,
        vec![scene("ward"), turns("haste", 3, 3), turns("daze", 1, 1), permanent("mark")],
    )]);

    let report = service.end_scene(ALICE).unwrap();

    assert_eq!(report.effects_removed, 3);
    assert_eq!(report.effects_remaining, 1);
    assert_eq!((report.health, report.max_hp), (15, 15));
    assert!(report.health_clamped);

    let stored = repository.load(ALICE).unwrap().unwrap();
    assert_eq!(stored.active_effects, vec![permanent("mark")]);
    assert_eq!(stored.stats.health, 15);
    assert_eq!(stored.stats.max_hp, 15);
    assert_eq!(stored.live_stats.get("Perception"), Some(&LiveStatValue::Number(1)));
    assert_eq!(stored.live_stats.get("Health"), None);
}

#[test]
fn self_deactivation_reports_name_and_uses_a_turn() {
    let ward = scene("ward").with_caster("Alice");
    let (service, repository) = memory_service(vec![alice(20, vec![ward, turns("haste", 3, 3)])]);

    let report = service.deactivate(ALICE, "ward", "Alice").unwrap();

    assert_eq!(report.deactivated.as_deref(), Some("ward"));
    assert_eq!(report.effects_removed, 1);
    assert_eq!((report.health, report.max_hp), (15, 15));

    let stored = repository.load(ALICE).unwrap().unwrap();
    assert_eq!(stored.active_effects, vec![turns("haste", 3, 2)]);
}

#[test]
fn deactivate_own_uses_character_name_as_requester() {
    let ward = scene("ward").with_caster("Alice");
    let (service, _) = memory_service(vec![alice(15, vec![ward])]);

    let report = service.deactivate_own(ALICE, "ward").unwrap();
    assert_eq!(report.effects_remaining, 0);
}

#[test]
fn failed_deactivation_writes_nothing() {
    let foreign = scene("ward").with_caster("Bob");
    let original = alice(20, vec![foreign, turns("haste", 3, 3)]);
    let (service, repository) = memory_service(vec![original.clone()]);

    let forbidden = service.deactivate(ALICE, "ward", "Alice").unwrap_err();
    assert!(matches!(forbidden, RuntimeError::Effect(EffectError::Forbidden { .. })));
    assert_eq!(forbidden.to_string(), "Cannot deactivate effects cast by others");

    let invalid = service.deactivate(ALICE, "haste", "Alice").unwrap_err();
    assert_eq!(invalid.to_string(), "Cannot deactivate turn-based effects");

    let missing = service.deactivate(ALICE, "nope", "Alice").unwrap_err();
    assert_eq!(missing.to_string(), "Effect not found in active effects");

    assert_eq!(repository.load(ALICE).unwrap().unwrap(), original);
}

#[test]
fn unknown_character_is_not_found() {
    let (service, _) = memory_service(Vec::new());

    let err = service.use_turn(ALICE).unwrap_err();
    assert!(matches!(err, RuntimeError::CharacterNotFound(id) if id == ALICE));
    assert_eq!(err.error_code(), "CHARACTER_NOT_FOUND");
}

#[test]
fn apply_then_expire_round_trip() {
    let (service, repository) = memory_service(vec![alice(15, Vec::new())]);

    let applied = service.apply(ALICE, "haste", Some("Brom")).unwrap();
    assert_eq!(applied.applied.as_deref(), Some("Haste"));

    let sheet = service.character(ALICE).unwrap();
    assert_eq!(sheet.effective.dexterity, 4);

    for _ in 0..3 {
        service.use_turn(ALICE).unwrap();
    }

    let stored = repository.load(ALICE).unwrap().unwrap();
    assert!(stored.active_effects.is_empty());
    assert!(stored.live_stats.is_empty());
    assert_eq!(stored.version, 4);
}

#[test]
fn applying_unknown_effect_fails_without_writing() {
    let (service, repository) = memory_service(vec![alice(15, Vec::new())]);

    let err = service.apply(ALICE, "meteor", None).unwrap_err();

    assert!(matches!(err, RuntimeError::Effect(EffectError::UnknownEffect { .. })));
    assert_eq!(repository.load(ALICE).unwrap().unwrap().version, 0);
}

#[test]
fn refresh_rebuilds_stale_cache() {
    let mut record = alice(15, vec![scene("ward")]);
    record.live_stats = Default::default();
    let (service, repository) = memory_service(vec![record]);

    let report = service.refresh(ALICE).unwrap();

    assert_eq!(report.max_hp, 25);
    let stored = repository.load(ALICE).unwrap().unwrap();
    assert_eq!(stored.live_stats.health_delta(), 10);
}

#[test]
fn register_assigns_sequential_ids() {
    let (service, _) = memory_service(Vec::new());

    let first = service.register(&alice_template()).unwrap();
    let second = service.register(&alice_template()).unwrap();

    assert_eq!(first.id.0, 1);
    assert_eq!(second.id.0, 2);
    assert_eq!(service.characters().unwrap().len(), 2);
}

#[test]
fn bundled_catalog_drives_the_service() {
    let content = bundled_content();
    let service = arkana_runtime::EffectService::builder()
        .oracles(arkana_runtime::OracleManager::from_definitions(
            content.load_effects().unwrap(),
        ))
        .repository(std::sync::Arc::new(arkana_runtime::InMemoryCharacterRepo::new()))
        .build()
        .unwrap();
    let templates = content.load_characters().unwrap();
    let alice = service.register(&templates[0]).unwrap();

    service.apply(alice.id, "arkana_stoneskin", None).unwrap();
    let report = service.end_scene(alice.id).unwrap();

    assert_eq!(report.effects_removed, 1);
    assert_eq!(report.max_hp, templates[0].attributes.max_hp);
}
