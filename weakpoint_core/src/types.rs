//! Core types shared across the weak point pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// Elemental kind of a damage component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Pure,
    Biological,
    Bash,
    Cut,
    Acid,
    Stab,
    Heat,
    Cold,
    Electric,
    Bullet,
}

impl DamageType {
    /// Number of damage types; the length of every per-type array
    pub const COUNT: usize = 10;

    /// Get all damage types in ordinal order
    pub fn all() -> &'static [DamageType] {
        &[
            DamageType::Pure,
            DamageType::Biological,
            DamageType::Bash,
            DamageType::Cut,
            DamageType::Acid,
            DamageType::Stab,
            DamageType::Heat,
            DamageType::Cold,
            DamageType::Electric,
            DamageType::Bullet,
        ]
    }

    /// Physical damage types, addressed together by the `physical` config key
    pub fn physical() -> &'static [DamageType] {
        &[
            DamageType::Bash,
            DamageType::Cut,
            DamageType::Stab,
            DamageType::Bullet,
        ]
    }

    /// Array index of this damage type
    pub fn index(self) -> usize {
        self as usize
    }

    /// Config key for this damage type
    pub fn key(self) -> &'static str {
        match self {
            DamageType::Pure => "pure",
            DamageType::Biological => "biological",
            DamageType::Bash => "bash",
            DamageType::Cut => "cut",
            DamageType::Acid => "acid",
            DamageType::Stab => "stab",
            DamageType::Heat => "heat",
            DamageType::Cold => "cold",
            DamageType::Electric => "electric",
            DamageType::Bullet => "bullet",
        }
    }

    /// Look up a damage type by its config key
    pub fn from_key(key: &str) -> Option<DamageType> {
        DamageType::all().iter().copied().find(|t| t.key() == key)
    }
}

/// One value per damage type, indexed by `DamageType::index`
pub type DamageArray = [f64; DamageType::COUNT];

/// Identifier of a status effect (bleeding, stunned, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectId(pub String);

impl From<&str> for EffectId {
    fn from(s: &str) -> Self {
        EffectId(s.to_string())
    }
}

impl From<String> for EffectId {
    fn from(s: String) -> Self {
        EffectId(s)
    }
}

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a learnable proficiency
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProficiencyId(pub String);

impl From<&str> for ProficiencyId {
    fn from(s: &str) -> Self {
        ProficiencyId(s.to_string())
    }
}

impl From<String> for ProficiencyId {
    fn from(s: String) -> Self {
        ProficiencyId(s)
    }
}

impl fmt::Display for ProficiencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The weapon used to make an attack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: String,
    pub name: String,
}

impl Weapon {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Weapon {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// An inclusive `[min, max]` range read from config as a two-element array
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(T, T)", into = "(T, T)")]
pub struct Range<T: Copy> {
    pub min: T,
    pub max: T,
}

impl<T: Copy> Range<T> {
    pub fn new(min: T, max: T) -> Self {
        Range { min, max }
    }
}

impl<T: Copy> From<(T, T)> for Range<T> {
    fn from((min, max): (T, T)) -> Self {
        Range { min, max }
    }
}

impl<T: Copy> From<Range<T>> for (T, T) {
    fn from(range: Range<T>) -> Self {
        (range.min, range.max)
    }
}

impl Range<f64> {
    /// Whether `value` lies within the range, inclusive at both ends
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
