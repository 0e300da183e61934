use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::badges::Badge;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharacterStatus {
    Active,
    #[default]
    Inactive,
    Deleted,
}

impl CharacterStatus {
    pub fn from_activity(is_active: bool) -> Self {
        if is_active {
            Self::Active
        } else {
            Self::Inactive
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Job slots in the order the Lodestone lists them on the class/job tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobSlot {
    Gladiator,
    Marauder,
    DarkKnight,
    Pugilist,
    Lancer,
    Rogue,
    Samurai,
    Conjurer,
    Scholar,
    Astrologian,
    Archer,
    Machinist,
    Thaumaturge,
    Arcanist,
    RedMage,
    BlueMage,
    Carpenter,
    Blacksmith,
    Armorer,
    Goldsmith,
    Leatherworker,
    Weaver,
    Alchemist,
    Culinarian,
    Miner,
    Botanist,
    Fisher,
    /// Elemental level; only rendered once the character has entered Eureka.
    Eureka,
}

impl JobSlot {
    pub const ROSTER: [JobSlot; 28] = [
        JobSlot::Gladiator,
        JobSlot::Marauder,
        JobSlot::DarkKnight,
        JobSlot::Pugilist,
        JobSlot::Lancer,
        JobSlot::Rogue,
        JobSlot::Samurai,
        JobSlot::Conjurer,
        JobSlot::Scholar,
        JobSlot::Astrologian,
        JobSlot::Archer,
        JobSlot::Machinist,
        JobSlot::Thaumaturge,
        JobSlot::Arcanist,
        JobSlot::RedMage,
        JobSlot::BlueMage,
        JobSlot::Carpenter,
        JobSlot::Blacksmith,
        JobSlot::Armorer,
        JobSlot::Goldsmith,
        JobSlot::Leatherworker,
        JobSlot::Weaver,
        JobSlot::Alchemist,
        JobSlot::Culinarian,
        JobSlot::Miner,
        JobSlot::Botanist,
        JobSlot::Fisher,
        JobSlot::Eureka,
    ];

    /// Slots every profile renders; anything past these is optional.
    pub const MANDATORY: usize = 27;
}

pub type JobLevels = BTreeMap<JobSlot, u32>;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CharacterRecord {
    pub id: u64,
    pub name: String,
    pub realm: String,
    pub race: String,
    pub gender: Option<Gender>,
    pub grand_company: String,
    pub free_company: String,
    pub job_levels: JobLevels,
    pub minions: BTreeSet<String>,
    pub mounts: BTreeSet<String>,
    #[serde(flatten)]
    pub badges: BTreeMap<Badge, bool>,
    pub image_last_modified: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub status: CharacterStatus,
}

impl CharacterRecord {
    /// Record for a character the Lodestone no longer serves.
    pub fn deleted(id: u64) -> Self {
        Self {
            id,
            status: CharacterStatus::Deleted,
            ..Default::default()
        }
    }

    pub fn has(&self, badge: Badge) -> bool {
        self.badges.get(&badge).copied().unwrap_or(false)
    }

    pub fn level(&self, slot: JobSlot) -> u32 {
        self.job_levels.get(&slot).copied().unwrap_or(0)
    }
}
