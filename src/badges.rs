use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Purchase and milestone history inferred from owned minions and mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    #[serde(rename = "has_30_days_sub")]
    Has30DaysSub,
    #[serde(rename = "has_60_days_sub")]
    Has60DaysSub,
    #[serde(rename = "has_90_days_sub")]
    Has90DaysSub,
    #[serde(rename = "has_180_days_sub")]
    Has180DaysSub,
    #[serde(rename = "has_270_days_sub")]
    Has270DaysSub,
    #[serde(rename = "has_360_days_sub")]
    Has360DaysSub,
    #[serde(rename = "has_450_days_sub")]
    Has450DaysSub,
    #[serde(rename = "has_630_days_sub")]
    Has630DaysSub,
    #[serde(rename = "has_960_days_sub")]
    Has960DaysSub,
    HasPreOrderArr,
    HasPreOrderHw,
    HasPreOrderSb,
    HasPreOrderShb,
    HasArrArtbook,
    HasHwArtbookOne,
    HasHwArtbookTwo,
    HasSbArtbook,
    HasSbArtbookTwo,
    HasEncyclopediaEorzea,
    HasBeforeMeteor,
    HasBeforeTheFall,
    HasSoundtrack,
    HasAttendedEternalBond,
    HasCompletedHwSightseeing,
    #[serde(rename = "has_completed_2pt5")]
    HasCompleted2pt5,
    HasFiftyComms,
    HasMooglePlush,
    HasTopazCarbunclePlush,
    HasEmeraldCarbunclePlush,
    HasCompletedHildibrand,
    HasPs4Collectors,
    #[serde(rename = "has_completed_3pt1")]
    HasCompleted3pt1,
    #[serde(rename = "has_completed_3pt3")]
    HasCompleted3pt3,
    HasCompletedSb,
    HasEternalBond,
    HasArrCollectors,
    HasKobold,
    HasSahagin,
    HasAmaljaa,
    HasSylph,
    HasMoogle,
    HasVanuVanu,
    HasVath,
    HasCompletedHw,
    IsLegacyPlayer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Minion,
    Mount,
}

#[derive(Debug, Clone, Copy)]
pub struct BadgeRule {
    pub item: &'static str,
    pub kind: ItemKind,
    pub badge: Badge,
}

const fn minion(item: &'static str, badge: Badge) -> BadgeRule {
    BadgeRule { item, kind: ItemKind::Minion, badge }
}

const fn mount(item: &'static str, badge: Badge) -> BadgeRule {
    BadgeRule { item, kind: ItemKind::Mount, badge }
}

/// One row per qualifying item. A badge is set when any of its rows matches.
pub const BADGE_RULES: &[BadgeRule] = &[
    // Subscription tenure rewards
    minion("Wind-up Cursor", Badge::Has30DaysSub),
    minion("Black Chocobo Chick", Badge::Has60DaysSub),
    minion("Beady Eye", Badge::Has90DaysSub),
    minion("Minion Of Light", Badge::Has180DaysSub),
    minion("Wind-up Leader", Badge::Has270DaysSub),
    minion("Wind-up Odin", Badge::Has360DaysSub),
    minion("Wind-up Goblin", Badge::Has450DaysSub),
    minion("Wind-up Nanamo", Badge::Has630DaysSub),
    minion("Wind-up Firion", Badge::Has960DaysSub),
    // Pre-orders
    minion("Cait Sith Doll", Badge::HasPreOrderArr),
    minion("Chocobo Chick Courier", Badge::HasPreOrderHw),
    minion("Wind-up Red Mage", Badge::HasPreOrderSb),
    minion("Baby Gremlin", Badge::HasPreOrderShb),
    // Artbooks, books and soundtracks
    minion("Model Enterprise", Badge::HasArrArtbook),
    minion("Wind-Up Relm", Badge::HasHwArtbookOne),
    minion("Wind-Up Hraesvelgr", Badge::HasHwArtbookTwo),
    minion("Wind-up Yotsuyu", Badge::HasSbArtbook),
    minion("Dress-up Tataru", Badge::HasSbArtbookTwo),
    minion("Namingway", Badge::HasEncyclopediaEorzea),
    minion("Wind-up Dalamud", Badge::HasBeforeMeteor),
    minion("Set Of Primogs", Badge::HasBeforeTheFall),
    minion("Wind-up Bahamut", Badge::HasSoundtrack),
    // Events, content and merchandise
    minion("Demon Box", Badge::HasAttendedEternalBond),
    minion("Fledgling Apkallu", Badge::HasCompletedHwSightseeing),
    minion("Midgardsormr", Badge::HasCompleted2pt5),
    minion("Princely Hatchling", Badge::HasFiftyComms),
    minion("Wind-up Delivery Moogle", Badge::HasMooglePlush),
    minion("Heliodor Carbuncle", Badge::HasTopazCarbunclePlush),
    minion("Peridot Carbuncle", Badge::HasEmeraldCarbunclePlush),
    minion("Wind-up Gentleman", Badge::HasCompletedHildibrand),
    minion("Wind-up Moogle", Badge::HasPs4Collectors),
    minion("Wind-up Haurchefant", Badge::HasCompleted3pt1),
    minion("Wind-up Aymeric", Badge::HasCompleted3pt3),
    // Stormblood's main scenario drops nothing; any level 70 dungeon minion stands in for it
    minion("Ivon Coeurlfist Doll", Badge::HasCompletedSb),
    minion("Dress-up Yugiri", Badge::HasCompletedSb),
    minion("Wind-up Exdeath", Badge::HasCompletedSb),
    // Mounts
    mount("Ceremony Chocobo", Badge::HasEternalBond),
    mount("Coeurl", Badge::HasArrCollectors),
    mount("Bomb Palanquin", Badge::HasKobold),
    mount("Cavalry Elbst", Badge::HasSahagin),
    mount("Cavalry Drake", Badge::HasAmaljaa),
    mount("Laurel Goobbue", Badge::HasSylph),
    mount("Cloud Mallow", Badge::HasMoogle),
    mount("Sanuwa", Badge::HasVanuVanu),
    mount("Kongamato", Badge::HasVath),
    mount("Midgardsormr", Badge::HasCompletedHw),
    mount("Legacy Chocobo", Badge::IsLegacyPlayer),
];

/// Evaluate [`BADGE_RULES`] against the owned collections. Every badge in the table
/// gets an entry, so absent items read as `false` rather than missing.
pub fn derive(minions: &BTreeSet<String>, mounts: &BTreeSet<String>) -> BTreeMap<Badge, bool> {
    let mut badges = BTreeMap::new();
    for rule in BADGE_RULES {
        let owned = match rule.kind {
            ItemKind::Minion => minions.contains(rule.item),
            ItemKind::Mount => mounts.contains(rule.item),
        };
        *badges.entry(rule.badge).or_insert(false) |= owned;
    }
    badges
}

// ── Tests ──
