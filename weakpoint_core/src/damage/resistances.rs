//! Resistances - Flat armor per damage type
//!
//! Armor is subtracted from each damage component of matching type:
//! - damage_taken = max(0, amount - armor)

use super::{DamageInstance, DamageUnit};
use crate::types::{DamageArray, DamageType};
use serde::{Deserialize, Serialize};

/// Armor values of a creature, one per damage type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resistances {
    values: DamageArray,
}

impl Default for Resistances {
    fn default() -> Self {
        Resistances {
            values: [0.0; DamageType::COUNT],
        }
    }
}

impl Resistances {
    /// Create resistances with no armor
    pub fn new() -> Self {
        Self::default()
    }

    /// Set armor for one damage type
    pub fn with(mut self, damage_type: DamageType, armor: f64) -> Self {
        self.set(damage_type, armor);
        self
    }

    /// Armor against a damage type
    pub fn get(&self, damage_type: DamageType) -> f64 {
        self.values[damage_type.index()]
    }

    pub fn set(&mut self, damage_type: DamageType, armor: f64) {
        self.values[damage_type.index()] = armor;
    }

    /// Mutable access to the raw per-type array
    pub fn values_mut(&mut self) -> &mut DamageArray {
        &mut self.values
    }

    /// Armor that actually applies to a unit; negative armor never adds damage
    pub fn effective_resist(&self, unit: &DamageUnit) -> f64 {
        self.get(unit.damage_type).max(0.0)
    }

    /// Damage left in a unit after armor
    pub fn absorb(&self, unit: &DamageUnit) -> f64 {
        (unit.amount - self.effective_resist(unit)).max(0.0)
    }

    /// Total damage left in an instance after armor
    pub fn absorb_all(&self, damage: &DamageInstance) -> f64 {
        damage.units.iter().map(|u| self.absorb(u)).sum()
    }
}
