//! WeakPointHit - Outcome of a weak point strike

use crate::effect::AppliedEffect;
use crate::types::DamageType;
use serde::{Deserialize, Serialize};

/// Result of resolving one attack through the weak point pipeline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeakPointHit {
    // === Weak Point ===
    /// Id of the struck weak point; empty for the default
    pub weakpoint_id: String,
    pub weakpoint_name: String,
    /// False when the strike landed on no particular weak point
    pub hit_weakpoint: bool,

    // === Damage Breakdown ===
    /// Damage taken per type
    pub damage_taken: Vec<DamageTaken>,
    /// Total damage after weak point multipliers and armor
    pub total_damage: f64,

    // === Effects Applied ===
    pub effects_applied: Vec<AppliedEffect>,
}

impl WeakPointHit {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total raw damage (before weak point and armor)
    pub fn total_raw_damage(&self) -> f64 {
        self.damage_taken.iter().map(|d| d.raw_amount).sum()
    }

    /// Get damage taken for a specific type
    pub fn damage_of_type(&self, damage_type: DamageType) -> Option<&DamageTaken> {
        self.damage_taken.iter().find(|d| d.damage_type == damage_type)
    }

    /// Messages to show the player, in effect order
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.effects_applied
            .iter()
            .filter_map(|e| e.message.as_deref())
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if self.hit_weakpoint {
            let label = if self.weakpoint_name.is_empty() {
                &self.weakpoint_id
            } else {
                &self.weakpoint_name
            };
            parts.push(format!("hit {}", label));
        }

        parts.push(format!("{:.0} damage", self.total_damage));

        for effect in &self.effects_applied {
            parts.push(format!("caused {}", effect.effect));
        }

        parts.join(", ")
    }
}

/// Damage breakdown for a single damage type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageTaken {
    pub damage_type: DamageType,
    /// Incoming damage
    pub raw_amount: f64,
    /// Damage after the weak point's damage or crit multiplier
    pub scaled_amount: f64,
    /// Armor after the weak point's armor multiplier and penalty
    pub armor: f64,
    /// Final damage after armor
    pub final_amount: f64,
}

impl DamageTaken {
    /// Damage prevented by armor
    pub fn absorbed(&self) -> f64 {
        self.scaled_amount - self.final_amount
    }
}
