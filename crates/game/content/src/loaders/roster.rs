//! RON monster-roster loader.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use coinfall_core::{MonsterOracle, MonsterSpec, MonsterTier};

use crate::{monsters, passives};

/// On-disk shape of one roster entry.
#[derive(Clone, Debug, Deserialize)]
pub struct RawMonster {
    pub display_name: String,
    pub max_hp: u32,
    #[serde(default)]
    pub base_attack: u32,
    #[serde(default)]
    pub base_defense: u32,
    pub ability_ids: Vec<String>,
    #[serde(default)]
    pub passive_ids: Vec<String>,
    pub tier: String,
}

/// A validated roster, usable wherever the engine expects a
/// [`MonsterOracle`].
#[derive(Clone, Debug, Default)]
pub struct LoadedRoster {
    entries: Vec<(String, MonsterSpec)>,
}

impl LoadedRoster {
    /// Parses and validates a roster from RON text.
    pub fn from_str(text: &str) -> Result<Self> {
        let raw: Vec<(String, RawMonster)> =
            ron::from_str(text).context("failed to parse roster RON")?;

        let mut entries = Vec::with_capacity(raw.len());
        for (key, monster) in raw {
            let spec = validate(&key, monster)
                .with_context(|| format!("invalid roster entry `{key}`"))?;
            if entries.iter().any(|(existing, _)| *existing == key) {
                bail!("duplicate roster key `{key}`");
            }
            entries.push((key, spec));
        }
        Ok(Self { entries })
    }

    /// Loads and validates a roster from a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read roster file {}", path.display()))?;
        Self::from_str(&text)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MonsterOracle for LoadedRoster {
    fn monster(&self, key: &str) -> Option<MonsterSpec> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, spec)| spec.clone())
    }
}

fn validate(key: &str, raw: RawMonster) -> Result<MonsterSpec> {
    if key.is_empty() {
        bail!("roster key must not be empty");
    }
    if raw.max_hp == 0 {
        bail!("max_hp must be at least 1");
    }
    if raw.ability_ids.is_empty() {
        bail!("at least one ability id is required");
    }
    let tier = MonsterTier::from_str(&raw.tier)
        .map_err(|_| anyhow::anyhow!("unknown tier `{}`", raw.tier))?;
    for id in &raw.ability_ids {
        if monsters::ability(id).is_none() {
            bail!("unknown ability id `{id}`");
        }
    }
    for id in &raw.passive_ids {
        if passives::hook(id).is_none() {
            bail!("unknown passive id `{id}`");
        }
    }
    Ok(MonsterSpec {
        display_name: raw.display_name,
        max_hp: raw.max_hp,
        base_attack: raw.base_attack,
        base_defense: raw.base_defense,
        ability_ids: raw.ability_ids,
        passive_ids: raw.passive_ids,
        tier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = r#"[
        ("cave_slime", (
            display_name: "Cave Slime",
            max_hp: 16,
            base_attack: 1,
            ability_ids: ["slime_tackle", "slime_harden"],
            tier: "normal",
        )),
        ("elder_witch", (
            display_name: "Elder Witch",
            max_hp: 30,
            base_attack: 3,
            base_defense: 1,
            ability_ids: ["witch_resonance", "witch_hex"],
            passive_ids: ["witch_ward"],
            tier: "miniboss",
        )),
    ]"#;

    #[test]
    fn loads_a_valid_roster() {
        let roster = LoadedRoster::from_str(GOOD).unwrap();
        assert_eq!(roster.len(), 2);

        let witch = roster.monster("elder_witch").unwrap();
        assert_eq!(witch.tier, MonsterTier::Miniboss);
        assert_eq!(witch.passive_ids, vec!["witch_ward".to_string()]);
        assert!(roster.monster("dragon").is_none());
    }

    #[test]
    fn rejects_unknown_ability_ids() {
        let text = r#"[
            ("ghoul", (
                display_name: "Ghoul",
                max_hp: 10,
                ability_ids: ["ghoul_bite"],
                tier: "normal",
            )),
        ]"#;
        let err = LoadedRoster::from_str(text).unwrap_err();
        assert!(format!("{err:#}").contains("unknown ability id"));
    }

    #[test]
    fn rejects_bad_tier_and_zero_hp() {
        let bad_tier = r#"[
            ("imp", (
                display_name: "Imp",
                max_hp: 8,
                ability_ids: ["slime_tackle"],
                tier: "legendary",
            )),
        ]"#;
        assert!(LoadedRoster::from_str(bad_tier).is_err());

        let zero_hp = r#"[
            ("wisp", (
                display_name: "Wisp",
                max_hp: 0,
                ability_ids: ["slime_tackle"],
                tier: "normal",
            )),
        ]"#;
        assert!(LoadedRoster::from_str(zero_hp).is_err());
    }

    #[test]
    fn rejects_duplicate_keys() {
        let text = r#"[
            ("slime", (
                display_name: "Slime A",
                max_hp: 10,
                ability_ids: ["slime_tackle"],
                tier: "normal",
            )),
            ("slime", (
                display_name: "Slime B",
                max_hp: 12,
                ability_ids: ["slime_tackle"],
                tier: "normal",
            )),
        ]"#;
        let err = LoadedRoster::from_str(text).unwrap_err();
        assert!(format!("{err}").contains("duplicate"));
    }
}
