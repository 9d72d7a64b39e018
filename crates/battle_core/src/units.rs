//! Unit identity: kinds, attack categories, and scalable properties.
//!
//! Unit kinds are a closed enum rather than a dynamic registry: the category
//! mapping is an exhaustive match, so adding a kind without classifying it
//! is a compile error. Discriminants are stable numeric IDs (grouped in
//! tens/hundreds by role) so serialized data stays valid across releases.

use serde::{Deserialize, Serialize};

/// A kind of unit.
///
/// Grouped by role: infantry (10-40), cavalry (100-130), siege (200-230),
/// utility (300), market (400).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum UnitType {
    // Infantry
    /// Spear infantry, the baseline melee line.
    NileSpearmen = 10,
    /// Ranged skirmishers with slings.
    Slingers = 20,
    /// Heavy melee infantry with axes.
    DesertAxemen = 30,
    /// Ranged archer infantry.
    PharaohsBowmen = 40,

    // Cavalry
    /// Fast chariot riders.
    Chariots = 100,
    /// Mounted shock cavalry.
    NubianCavalry = 110,
    /// Mounted archers, classified as ranged.
    CamelArchers = 120,
    /// Heavy elephant cavalry.
    WarElephants = 130,

    // Siege
    /// Mobile assault tower.
    SiegeTower = 200,
    /// Stone-throwing artillery.
    Catapult = 210,
    /// Light reconnaissance unit, fights in the melee line.
    Scout = 220,
    /// Sappers that undermine walls.
    TunnelDiggers = 230,

    // Utility
    /// Defensive trap layer. Not part of the battle roster.
    Trapper = 300,

    // Market
    /// Trade caravan. Not part of the battle roster.
    Caravan = 400,
}

impl UnitType {
    /// Every defined unit kind, in discriminant order.
    pub const ALL: [UnitType; 14] = [
        UnitType::NileSpearmen,
        UnitType::Slingers,
        UnitType::DesertAxemen,
        UnitType::PharaohsBowmen,
        UnitType::Chariots,
        UnitType::NubianCavalry,
        UnitType::CamelArchers,
        UnitType::WarElephants,
        UnitType::SiegeTower,
        UnitType::Catapult,
        UnitType::Scout,
        UnitType::TunnelDiggers,
        UnitType::Trapper,
        UnitType::Caravan,
    ];

    /// The kinds that can be fielded in a battle.
    ///
    /// Trapper and Caravan have combat categories (everything does) but are
    /// never part of a roster.
    pub const BATTLE_ROSTER: [UnitType; 12] = [
        UnitType::NileSpearmen,
        UnitType::Slingers,
        UnitType::DesertAxemen,
        UnitType::PharaohsBowmen,
        UnitType::Chariots,
        UnitType::NubianCavalry,
        UnitType::CamelArchers,
        UnitType::WarElephants,
        UnitType::SiegeTower,
        UnitType::Catapult,
        UnitType::Scout,
        UnitType::TunnelDiggers,
    ];

    /// Attack category this kind fights in.
    ///
    /// Total mapping: combat is resolved independently per category, and
    /// every kind belongs to exactly one.
    #[must_use]
    pub const fn attack_category(self) -> AttackCategory {
        match self {
            UnitType::NileSpearmen => AttackCategory::Melee,
            UnitType::Slingers => AttackCategory::Ranged,
            UnitType::DesertAxemen => AttackCategory::Melee,
            UnitType::PharaohsBowmen => AttackCategory::Ranged,
            UnitType::Chariots => AttackCategory::Cavalry,
            UnitType::NubianCavalry => AttackCategory::Cavalry,
            UnitType::CamelArchers => AttackCategory::Ranged,
            UnitType::WarElephants => AttackCategory::Cavalry,
            UnitType::SiegeTower => AttackCategory::Siege,
            UnitType::Catapult => AttackCategory::Siege,
            UnitType::Scout => AttackCategory::Melee,
            UnitType::TunnelDiggers => AttackCategory::Siege,
            UnitType::Trapper => AttackCategory::Melee,
            UnitType::Caravan => AttackCategory::Melee,
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            UnitType::NileSpearmen => "Nile Spearmen",
            UnitType::Slingers => "Slingers",
            UnitType::DesertAxemen => "Desert Axemen",
            UnitType::PharaohsBowmen => "Pharaohs Bowmen",
            UnitType::Chariots => "Chariots",
            UnitType::NubianCavalry => "Nubian Cavalry",
            UnitType::CamelArchers => "Camel Archers",
            UnitType::WarElephants => "War Elephants",
            UnitType::SiegeTower => "Siege Tower",
            UnitType::Catapult => "Catapult",
            UnitType::Scout => "Scout",
            UnitType::TunnelDiggers => "Tunnel Diggers",
            UnitType::Trapper => "Trapper",
            UnitType::Caravan => "Caravan",
        }
    }

    /// Stable numeric identifier (the enum discriminant).
    #[must_use]
    pub const fn id(self) -> u16 {
        self as u16
    }
}

/// Attack category a unit fights in.
///
/// Combat is resolved independently within each category before being
/// combined into an overall outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackCategory {
    /// Close combat line.
    Melee,
    /// Missile troops.
    Ranged,
    /// Mounted shock troops.
    Cavalry,
    /// Wall-breaking engines and sappers.
    Siege,
}

impl AttackCategory {
    /// All categories, in resolution order.
    pub const ALL: [AttackCategory; 4] = [
        AttackCategory::Melee,
        AttackCategory::Ranged,
        AttackCategory::Cavalry,
        AttackCategory::Siege,
    ];

    /// Lowercase category name for display output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AttackCategory::Melee => "melee",
            AttackCategory::Ranged => "ranged",
            AttackCategory::Cavalry => "cavalry",
            AttackCategory::Siege => "siege",
        }
    }
}

/// A level-scalable unit property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitProperty {
    /// Movement speed.
    Speed,
    /// Resource carry capacity.
    Carry,
    /// Offensive strength.
    Attack,
    /// Defensive strength.
    Defense,
    /// Hit points.
    Health,
}

impl UnitProperty {
    /// All properties.
    pub const ALL: [UnitProperty; 5] = [
        UnitProperty::Speed,
        UnitProperty::Carry,
        UnitProperty::Attack,
        UnitProperty::Defense,
        UnitProperty::Health,
    ];
}
