#![allow(dead_code)]

use std::sync::Arc;

use arkana_content::{CharacterTemplate, ContentFactory};
use arkana_core::{
    ActiveEffect, BaseAttributes, CharacterId, EffectDefinition, EffectDuration, EffectLifetime,
    Universe,
};
use arkana_runtime::{
    CharacterRecord, CharacterRepository, EffectService, InMemoryCharacterRepo, OracleManager,
    RuntimeConfig,
};

pub const ALICE: CharacterId = CharacterId(1);

/// ward (scene, Health +10), haste (turns:3), daze (turns:1),
/// mark (permanent, Perception +1).
pub fn catalog() -> Vec<EffectDefinition> {
    vec![
        EffectDefinition::new("ward", "Ward", EffectDuration::Scene).with_delta("Health", 10),
        EffectDefinition::new("haste", "Haste", EffectDuration::Turns(3))
            .with_delta("Dexterity", 2),
        EffectDefinition::new("daze", "Daze", EffectDuration::Turns(1)).with_flag("stun", "dazed"),
        EffectDefinition::new("mark", "Mark", EffectDuration::Permanent).with_delta("Perception", 1),
    ]
}

pub fn bundled_content() -> ContentFactory {
    ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../game/content/data"))
}

pub fn alice_template() -> CharacterTemplate {
    CharacterTemplate {
        name: "Alice".into(),
        universe: Universe::Arkana,
        attributes: BaseAttributes::default(),
        health: None,
    }
}

/// Alice (15 base max HP) carrying `effects` at `health`.
pub fn alice(health: i32, effects: Vec<ActiveEffect>) -> CharacterRecord {
    let mut record = CharacterRecord::from_template(ALICE, &alice_template());
    record.stats.health = health;
    record.active_effects = effects;
    record
}

pub fn scene(id: &str) -> ActiveEffect {
    ActiveEffect::new(id, id, EffectLifetime::Scene)
}

pub fn turns(id: &str, total: u32, left: u32) -> ActiveEffect {
    ActiveEffect::new(id, id, EffectLifetime::Turns { total, left })
}

pub fn permanent(id: &str) -> ActiveEffect {
    ActiveEffect::new(id, id, EffectLifetime::Permanent)
}

pub fn service_with(repository: Arc<dyn CharacterRepository>) -> EffectService {
    service_with_config(repository, RuntimeConfig::default())
}

pub fn service_with_config(
    repository: Arc<dyn CharacterRepository>,
    config: RuntimeConfig,
) -> EffectService {
    EffectService::builder()
        .config(config)
        .oracles(OracleManager::from_definitions(catalog()))
        .repository(repository)
        .build()
        .expect("service should build")
}

pub fn memory_service(records: Vec<CharacterRecord>) -> (EffectService, Arc<InMemoryCharacterRepo>) {
    let repository = Arc::new(InMemoryCharacterRepo::with_records(records));
    (service_with(repository.clone()), repository)
}
