//! Weak points - Vulnerable regions of a target
//!
//! Hit chance formula:
//! - effective_coverage = coverage * coverage_mult[attack_type]
//! - margin = skill - difficulty[attack_type]
//! - hit_chance = clamp(effective_coverage * logistic(margin / CURVE_WIDTH), 0, 100)
//!
//! At the default difficulty (-100) any ordinary skill saturates the curve, so
//! the chance is simply the effective coverage.

mod registry;
mod set;

pub use registry::{WeakPointProfile, WeakPointRegistry};
pub use set::{SelectionWeights, WeakPointSet};

use crate::attack::{AttackContext, AttackType};
use crate::config::{damage_array, WeakPointDef};
use crate::creature::Creature;
use crate::damage::{DamageInstance, Resistances};
use crate::difficulty::DifficultyTable;
use crate::effect::{AppliedEffect, WeakPointEffect};
use crate::types::{DamageArray, DamageType, EffectId};
use rand::Rng;

/// Hit chance tuning
pub mod constants {
    /// Skill margin that moves the logistic curve by one unit
    pub const HIT_CHANCE_CURVE_WIDTH: f64 = 2.0;

    /// Default difficulty for every attack type; low enough to never gate
    pub const DEFAULT_DIFFICULTY: f64 = -100.0;

    pub const DEFAULT_COVERAGE: f64 = 100.0;
}

/// A single named weak point
#[derive(Debug, Clone, PartialEq)]
pub struct WeakPoint {
    /// Unique within the owning set
    pub id: String,
    /// Display name; may be empty
    pub name: String,
    /// Base percent chance of hitting the weak point
    pub coverage: f64,
    /// Multiplier for existing armor values
    pub armor_mult: DamageArray,
    /// Flat armor penalty, applied after the multiplier
    pub armor_penalty: DamageArray,
    pub damage_mult: DamageArray,
    /// Used instead of `damage_mult` on critical hits
    pub crit_mult: DamageArray,
    /// Effects the target must bear for the weak point to be hittable
    pub required_effects: Vec<EffectId>,
    pub effects: Vec<WeakPointEffect>,
    pub coverage_mult: DifficultyTable,
    pub difficulty: DifficultyTable,
}

impl Default for WeakPoint {
    fn default() -> Self {
        WeakPoint {
            id: String::new(),
            name: String::new(),
            coverage: constants::DEFAULT_COVERAGE,
            armor_mult: [1.0; DamageType::COUNT],
            armor_penalty: [0.0; DamageType::COUNT],
            damage_mult: [1.0; DamageType::COUNT],
            crit_mult: [1.0; DamageType::COUNT],
            required_effects: Vec::new(),
            effects: Vec::new(),
            coverage_mult: DifficultyTable::new(1.0),
            difficulty: DifficultyTable::new(constants::DEFAULT_DIFFICULTY),
        }
    }
}

impl From<WeakPointDef> for WeakPoint {
    fn from(def: WeakPointDef) -> Self {
        let mut coverage_mult = DifficultyTable::new(1.0);
        coverage_mult.load(&def.coverage_mult);
        let mut difficulty = DifficultyTable::new(constants::DEFAULT_DIFFICULTY);
        difficulty.load(&def.difficulty);

        WeakPoint {
            id: def.resolved_id(),
            armor_mult: damage_array(&def.armor_mult, 1.0, "armor_mult"),
            armor_penalty: damage_array(&def.armor_penalty, 0.0, "armor_penalty"),
            damage_mult: damage_array(&def.damage_mult, 1.0, "damage_mult"),
            crit_mult: damage_array(&def.crit_mult, 1.0, "crit_mult"),
            name: def.name,
            coverage: def.coverage,
            required_effects: def.required_effects,
            effects: def.effects,
            coverage_mult,
            difficulty,
        }
    }
}

impl WeakPoint {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        WeakPoint {
            name: id.clone(),
            id,
            ..Default::default()
        }
    }

    pub fn with_coverage(mut self, coverage: f64) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn with_armor_mult(mut self, damage_type: DamageType, mult: f64) -> Self {
        self.armor_mult[damage_type.index()] = mult;
        self
    }

    pub fn with_armor_penalty(mut self, damage_type: DamageType, penalty: f64) -> Self {
        self.armor_penalty[damage_type.index()] = penalty;
        self
    }

    pub fn with_damage_mult(mut self, damage_type: DamageType, mult: f64) -> Self {
        self.damage_mult[damage_type.index()] = mult;
        self
    }

    pub fn with_crit_mult(mut self, damage_type: DamageType, mult: f64) -> Self {
        self.crit_mult[damage_type.index()] = mult;
        self
    }

    pub fn with_difficulty(mut self, attack_type: AttackType, difficulty: f64) -> Self {
        self.difficulty.set(attack_type, difficulty);
        self
    }

    pub fn with_coverage_mult(mut self, attack_type: AttackType, mult: f64) -> Self {
        self.coverage_mult.set(attack_type, mult);
        self
    }

    pub fn requiring(mut self, effect: impl Into<EffectId>) -> Self {
        self.required_effects.push(effect.into());
        self
    }

    pub fn with_effect(mut self, effect: WeakPointEffect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Apply the armor multipliers, then the flat penalties
    pub fn apply_to_resistances(&self, resistances: &mut Resistances) {
        for (i, armor) in resistances.values_mut().iter_mut().enumerate() {
            *armor = *armor * self.armor_mult[i] - self.armor_penalty[i];
        }
    }

    /// Apply the damage multipliers, or the crit multipliers on a critical hit
    pub fn apply_to_damage(&self, damage: &mut DamageInstance, is_crit: bool) {
        let mults = if is_crit { &self.crit_mult } else { &self.damage_mult };
        for unit in &mut damage.units {
            unit.amount *= mults[unit.damage_type.index()];
        }
    }

    /// Roll every effect independently against `target`
    pub fn apply_effects<R: Rng + ?Sized>(
        &self,
        target: &mut dyn Creature,
        total_damage: f64,
        attack: &AttackContext<'_>,
        rng: &mut R,
    ) -> Vec<AppliedEffect> {
        let mut applied = Vec::new();
        for effect in &self.effects {
            if let Some(result) = effect.apply_to(&mut *target, total_damage, attack, &mut *rng) {
                applied.push(result);
            }
        }
        applied
    }

    /// Whether the target bears every required effect
    pub fn is_eligible(&self, attack: &AttackContext<'_>) -> bool {
        self.required_effects
            .iter()
            .all(|effect| attack.target.has_effect(effect))
    }

    /// Percent chance, in [0, 100], of the attack striking this weak point
    pub fn hit_chance(&self, attack: &AttackContext<'_>) -> f64 {
        if !self.is_eligible(attack) {
            return 0.0;
        }

        let effective_coverage = self.coverage * self.coverage_mult.of(attack);
        let margin = attack.skill - self.difficulty.of(attack);
        let chance = effective_coverage * logistic(margin / constants::HIT_CHANCE_CURVE_WIDTH);

        if chance.is_nan() {
            0.0
        } else {
            chance.clamp(0.0, 100.0)
        }
    }
}

fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
