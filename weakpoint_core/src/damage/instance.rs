//! DamageInstance - The damage components of a single attack

use crate::types::DamageType;
use serde::{Deserialize, Serialize};

/// A single damage component of one type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageUnit {
    #[serde(rename = "type")]
    pub damage_type: DamageType,
    pub amount: f64,
}

impl DamageUnit {
    pub fn new(damage_type: DamageType, amount: f64) -> Self {
        DamageUnit {
            damage_type,
            amount,
        }
    }
}

/// All damage components of one attack
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageInstance {
    pub units: Vec<DamageUnit>,
}

impl DamageInstance {
    /// Create a new empty damage instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a damage instance with a single component
    pub fn single(damage_type: DamageType, amount: f64) -> Self {
        let mut instance = Self::new();
        instance.add_damage(damage_type, amount);
        instance
    }

    /// Add damage of a type, merging into an existing component of that type
    pub fn add_damage(&mut self, damage_type: DamageType, amount: f64) {
        if let Some(existing) = self.units.iter_mut().find(|u| u.damage_type == damage_type) {
            existing.amount += amount;
        } else {
            self.units.push(DamageUnit::new(damage_type, amount));
        }
    }

    /// Get total damage (sum of all types)
    pub fn total_damage(&self) -> f64 {
        self.units.iter().map(|u| u.amount).sum()
    }

    /// Get damage for a specific type
    pub fn damage_of_type(&self, damage_type: DamageType) -> f64 {
        self.units
            .iter()
            .filter(|u| u.damage_type == damage_type)
            .map(|u| u.amount)
            .sum()
    }

    /// Get a damage breakdown string for display
    pub fn damage_breakdown(&self) -> String {
        self.units
            .iter()
            .map(|u| format!("{:?}: {:.0}", u.damage_type, u.amount))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
