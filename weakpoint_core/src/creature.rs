//! Creature - The entities on both ends of an attack
//!
//! The weak point pipeline only reads and mutates creatures through the
//! `Creature` trait. `CreatureState` is a plain data implementation used by
//! the simulator and tests.

use crate::attack::AttackType;
use crate::damage::Resistances;
use crate::types::{EffectId, ProficiencyId, Weapon};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Collaborator interface for attackers and targets
pub trait Creature {
    /// Maximum health, used to scale damage for effect gating
    fn max_health(&self) -> f64;

    /// Base armor against each damage type
    fn resistances(&self) -> Resistances;

    /// Whether the creature currently bears a status effect
    fn has_effect(&self, effect: &EffectId) -> bool;

    /// Acquire a status effect. `duration` of `None` means permanent.
    fn add_effect(&mut self, effect: &EffectId, duration: Option<u32>, intensity: i32);

    /// Base skill at hitting weak points, before proficiency modifiers
    fn weakpoint_skill(&self, attack_type: AttackType, is_thrown: bool, weapon: Option<&Weapon>) -> f64;

    fn has_proficiency(&self, _proficiency: &ProficiencyId) -> bool {
        false
    }

    /// Advance learning progress. Returns true if the proficiency was learned by this call.
    fn practice_proficiency(&mut self, _proficiency: &ProficiencyId, _amount: Duration) -> bool {
        false
    }

    /// Whether messages caused by this creature are shown to the player
    fn is_avatar(&self) -> bool {
        false
    }
}

/// Active status effect on a creature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    /// Turns remaining; `None` for permanent effects
    pub duration_remaining: Option<u32>,
    pub intensity: i32,
}

impl ActiveEffect {
    pub fn new(duration: Option<u32>, intensity: i32) -> Self {
        ActiveEffect {
            duration_remaining: duration,
            intensity,
        }
    }

    pub fn is_permanent(&self) -> bool {
        self.duration_remaining.is_none()
    }

    /// Reapply the effect: keep the longer duration and the higher intensity
    pub fn refresh(&mut self, duration: Option<u32>, intensity: i32) {
        self.duration_remaining = match (self.duration_remaining, duration) {
            (None, _) | (_, None) => None,
            (Some(current), Some(new)) => Some(current.max(new)),
        };
        self.intensity = self.intensity.max(intensity);
    }

    /// Tick one turn. Returns true while the effect is still active.
    pub fn tick(&mut self) -> bool {
        match self.duration_remaining.as_mut() {
            None => true,
            Some(turns) => {
                *turns = turns.saturating_sub(1);
                *turns > 0
            }
        }
    }
}

/// Learning progress towards a proficiency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProficiencyProgress {
    pub practiced: Duration,
    pub required: Duration,
}

impl ProficiencyProgress {
    pub fn new(required: Duration) -> Self {
        ProficiencyProgress {
            practiced: Duration::ZERO,
            required,
        }
    }

    pub fn is_learned(&self) -> bool {
        self.practiced >= self.required
    }
}

/// A plain data creature
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatureState {
    pub name: String,
    pub max_health: f64,
    pub resistances: Resistances,
    /// Base weak point skill, regardless of attack type
    pub base_skill: f64,
    pub is_avatar: bool,
    pub effects: HashMap<EffectId, ActiveEffect>,
    /// Proficiencies known or being learned
    pub proficiencies: HashMap<ProficiencyId, ProficiencyProgress>,
}

impl CreatureState {
    pub fn new(name: impl Into<String>, max_health: f64) -> Self {
        CreatureState {
            name: name.into(),
            max_health,
            ..Default::default()
        }
    }

    pub fn with_resistances(mut self, resistances: Resistances) -> Self {
        self.resistances = resistances;
        self
    }

    pub fn with_skill(mut self, skill: f64) -> Self {
        self.base_skill = skill;
        self
    }

    pub fn as_avatar(mut self) -> Self {
        self.is_avatar = true;
        self
    }

    pub fn with_effect(mut self, effect: impl Into<EffectId>) -> Self {
        self.effects.insert(effect.into(), ActiveEffect::new(None, 1));
        self
    }

    /// Track a proficiency that takes `required` practice to learn
    pub fn learning(mut self, proficiency: impl Into<ProficiencyId>, required: Duration) -> Self {
        self.proficiencies
            .insert(proficiency.into(), ProficiencyProgress::new(required));
        self
    }

    /// Grant a proficiency outright
    pub fn with_proficiency(self, proficiency: impl Into<ProficiencyId>) -> Self {
        self.learning(proficiency, Duration::ZERO)
    }

    pub fn effect(&self, effect: &EffectId) -> Option<&ActiveEffect> {
        self.effects.get(effect)
    }

    /// Tick all effects one turn, dropping expired ones
    pub fn tick_effects(&mut self) {
        self.effects.retain(|_, e| e.tick());
    }
}

impl Creature for CreatureState {
    fn max_health(&self) -> f64 {
        self.max_health
    }

    fn resistances(&self) -> Resistances {
        self.resistances
    }

    fn has_effect(&self, effect: &EffectId) -> bool {
        self.effects.contains_key(effect)
    }

    fn add_effect(&mut self, effect: &EffectId, duration: Option<u32>, intensity: i32) {
        self.effects
            .entry(effect.clone())
            .and_modify(|e| e.refresh(duration, intensity))
            .or_insert_with(|| ActiveEffect::new(duration, intensity));
    }

    fn weakpoint_skill(&self, _attack_type: AttackType, _is_thrown: bool, _weapon: Option<&Weapon>) -> f64 {
        self.base_skill
    }

    fn has_proficiency(&self, proficiency: &ProficiencyId) -> bool {
        self.proficiencies
            .get(proficiency)
            .is_some_and(ProficiencyProgress::is_learned)
    }

    fn practice_proficiency(&mut self, proficiency: &ProficiencyId, amount: Duration) -> bool {
        // Proficiencies nobody has started on have no known threshold
        let Some(progress) = self.proficiencies.get_mut(proficiency) else {
            return false;
        };
        if progress.is_learned() {
            return false;
        }
        progress.practiced += amount;
        progress.is_learned()
    }

    fn is_avatar(&self) -> bool {
        self.is_avatar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_effect_refreshes() {
        let mut creature = CreatureState::new("zombie", 100.0);
        let bleed = EffectId::from("bleed");

        creature.add_effect(&bleed, Some(3), 1);
        creature.add_effect(&bleed, Some(2), 2);

        let active = creature.effect(&bleed).unwrap();
        assert_eq!(active.duration_remaining, Some(3));
        assert_eq!(active.intensity, 2);
    }

    #[test]
    fn test_permanent_effect_stays_permanent() {
        let mut creature = CreatureState::new("zombie", 100.0);
        let blind = EffectId::from("blind");

        creature.add_effect(&blind, None, 1);
        creature.add_effect(&blind, Some(5), 1);

        assert!(creature.effect(&blind).unwrap().is_permanent());
    }

    #[test]
    fn test_effects_expire() {
        let mut creature = CreatureState::new("zombie", 100.0);
        let stun = EffectId::from("stunned");
        creature.add_effect(&stun, Some(2), 1);

        creature.tick_effects();
        assert!(creature.has_effect(&stun));
        creature.tick_effects();
        assert!(!creature.has_effect(&stun));
    }

    #[test]
    fn test_practice_learns_once() {
        let prof = ProficiencyId::from("prof_wp_zombie");
        let mut creature = CreatureState::new("survivor", 100.0)
            .learning(prof.clone(), Duration::from_secs(3));

        assert!(!creature.practice_proficiency(&prof, Duration::from_secs(2)));
        assert!(!creature.has_proficiency(&prof));
        assert!(creature.practice_proficiency(&prof, Duration::from_secs(2)));
        assert!(creature.has_proficiency(&prof));
        assert!(!creature.practice_proficiency(&prof, Duration::from_secs(2)));
    }

    #[test]
    fn test_unknown_proficiency_never_learned() {
        let prof = ProficiencyId::from("prof_unknown");
        let mut creature = CreatureState::new("survivor", 100.0);
        assert!(!creature.practice_proficiency(&prof, Duration::from_secs(3600)));
        assert!(!creature.has_proficiency(&prof));
    }
}
