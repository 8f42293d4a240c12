//! WeakPointEffect - Status effects caused by striking a weak point
//!
//! An effect fires only when both gates pass:
//! - chance roll: uniform [0, 100) < chance
//! - damage gate: total_damage / max_health within damage_required (inclusive)

use crate::attack::AttackContext;
use crate::creature::Creature;
use crate::types::{EffectId, Range};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An effect that a weak point can cause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeakPointEffect {
    /// Status effect to apply
    pub effect: EffectId,
    /// Percent chance of causing the effect
    #[serde(default = "default_chance")]
    pub chance: f64,
    /// Permanent effects ignore `duration`
    #[serde(default)]
    pub permanent: bool,
    /// Duration range in turns
    #[serde(default = "default_one_range")]
    pub duration: Range<u32>,
    #[serde(default = "default_intensity")]
    pub intensity: Range<i32>,
    /// Damage required, as a fraction of the target's max health
    #[serde(default = "default_damage_required")]
    pub damage_required: Range<f64>,
    /// Shown when the player causes the effect
    #[serde(default)]
    pub message: String,
}

fn default_chance() -> f64 {
    100.0
}

fn default_one_range() -> Range<u32> {
    Range::new(1, 1)
}

fn default_intensity() -> Range<i32> {
    Range::new(1, 1)
}

fn default_damage_required() -> Range<f64> {
    Range::new(0.0, f64::INFINITY)
}

/// Record of an effect that fired
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedEffect {
    pub effect: EffectId,
    /// `None` for permanent effects
    pub duration: Option<u32>,
    pub intensity: i32,
    /// Message for the player, if the attacker is the player and one is configured
    pub message: Option<String>,
}

impl WeakPointEffect {
    /// Create an effect that always fires with the default ranges
    pub fn new(effect: impl Into<EffectId>) -> Self {
        WeakPointEffect {
            effect: effect.into(),
            chance: default_chance(),
            permanent: false,
            duration: default_one_range(),
            intensity: default_intensity(),
            damage_required: default_damage_required(),
            message: String::new(),
        }
    }

    pub fn with_chance(mut self, chance: f64) -> Self {
        self.chance = chance;
        self
    }

    pub fn with_duration(mut self, min: u32, max: u32) -> Self {
        self.duration = Range::new(min, max);
        self
    }

    pub fn with_intensity(mut self, min: i32, max: i32) -> Self {
        self.intensity = Range::new(min, max);
        self
    }

    pub fn with_damage_required(mut self, min: f64, max: f64) -> Self {
        self.damage_required = Range::new(min, max);
        self
    }

    pub fn permanent(mut self) -> Self {
        self.permanent = true;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Whether `total_damage` against `max_health` satisfies the damage gate
    pub fn damage_gate_passes(&self, total_damage: f64, max_health: f64) -> bool {
        if max_health <= 0.0 {
            return false;
        }
        self.damage_required.contains(total_damage / max_health)
    }

    /// Maybe apply the effect to `target`
    pub fn apply_to<R: Rng + ?Sized>(
        &self,
        target: &mut dyn Creature,
        total_damage: f64,
        attack: &AttackContext<'_>,
        rng: &mut R,
    ) -> Option<AppliedEffect> {
        if rng.gen_range(0.0..100.0) >= self.chance {
            return None;
        }
        if !self.damage_gate_passes(total_damage, target.max_health()) {
            return None;
        }

        let duration = if self.permanent {
            None
        } else {
            Some(roll_range(rng, self.duration.min, self.duration.max))
        };
        let intensity = roll_range(rng, self.intensity.min, self.intensity.max);
        target.add_effect(&self.effect, duration, intensity);
        tracing::debug!(
            "weak point effect {} applied (duration {:?}, intensity {})",
            self.effect,
            duration,
            intensity
        );

        let shown = !self.message.is_empty() && attack.source.is_some_and(|s| s.is_avatar());
        Some(AppliedEffect {
            effect: self.effect.clone(),
            duration,
            intensity,
            message: shown.then(|| self.message.clone()),
        })
    }
}

/// Uniform draw from `[min, max]`; reversed ranges yield `min`
fn roll_range<T, R>(rng: &mut R, min: T, max: T) -> T
where
    T: Copy + PartialOrd + rand::distributions::uniform::SampleUniform,
    R: Rng + ?Sized,
{
    if min >= max {
        min
    } else {
        rng.gen_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attack::AttackType;
    use crate::creature::CreatureState;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_certain_effect_fires() {
        let original = CreatureState::new("zombie", 100.0);
        let mut target = original.clone();
        let ctx = AttackContext::new(&original, AttackType::MeleeCut);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let effect = WeakPointEffect::new("bleed").with_duration(3, 6).with_intensity(1, 2);
        let applied = effect.apply_to(&mut target, 10.0, &ctx, &mut rng).unwrap();

        let duration = applied.duration.unwrap();
        assert!((3..=6).contains(&duration));
        assert!((1..=2).contains(&applied.intensity));
        assert!(target.has_effect(&EffectId::from("bleed")));
    }

    #[test]
    fn test_zero_chance_never_fires() {
        let original = CreatureState::new("zombie", 100.0);
        let mut target = original.clone();
        let ctx = AttackContext::new(&original, AttackType::MeleeCut);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let effect = WeakPointEffect::new("bleed").with_chance(0.0);
        for _ in 0..200 {
            assert!(effect.apply_to(&mut target, 50.0, &ctx, &mut rng).is_none());
        }
        assert!(target.effects.is_empty());
    }

    #[test]
    fn test_damage_gate_blocks_outside_range() {
        let original = CreatureState::new("zombie", 100.0);
        let mut target = original.clone();
        let ctx = AttackContext::new(&original, AttackType::MeleeBash);
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let effect = WeakPointEffect::new("stunned").with_damage_required(0.2, 0.5);
        // 10% and 60% of max health are both outside the gate
        assert!(effect.apply_to(&mut target, 10.0, &ctx, &mut rng).is_none());
        assert!(effect.apply_to(&mut target, 60.0, &ctx, &mut rng).is_none());
        // Both ends are inclusive
        assert!(effect.apply_to(&mut target, 20.0, &ctx, &mut rng).is_some());
        assert!(effect.apply_to(&mut target, 50.0, &ctx, &mut rng).is_some());
    }

    #[test]
    fn test_zero_health_target_never_gated_in() {
        let effect = WeakPointEffect::new("stunned");
        assert!(!effect.damage_gate_passes(10.0, 0.0));
    }

    #[test]
    fn test_permanent_effect_has_no_duration() {
        let original = CreatureState::new("zombie", 100.0);
        let mut target = original.clone();
        let ctx = AttackContext::new(&original, AttackType::MeleeStab);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let effect = WeakPointEffect::new("blind").permanent().with_duration(5, 10);
        let applied = effect.apply_to(&mut target, 10.0, &ctx, &mut rng).unwrap();
        assert_eq!(applied.duration, None);
        assert!(target.effect(&EffectId::from("blind")).unwrap().is_permanent());
    }

    #[test]
    fn test_message_only_for_avatar() {
        let original = CreatureState::new("zombie", 100.0);
        let player = CreatureState::new("you", 100.0).as_avatar();
        let npc = CreatureState::new("npc", 100.0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let effect = WeakPointEffect::new("blind").with_message("You blind the zombie!");

        let mut target = original.clone();
        let ctx = AttackContext::new(&original, AttackType::MeleeStab).with_source(&player);
        let applied = effect.apply_to(&mut target, 10.0, &ctx, &mut rng).unwrap();
        assert_eq!(applied.message.as_deref(), Some("You blind the zombie!"));

        let ctx = AttackContext::new(&original, AttackType::MeleeStab).with_source(&npc);
        let applied = effect.apply_to(&mut target, 10.0, &ctx, &mut rng).unwrap();
        assert_eq!(applied.message, None);
    }

    #[test]
    fn test_parse_effect_defaults() {
        let effect: WeakPointEffect = toml::from_str(r#"effect = "bleed""#).unwrap();
        assert!((effect.chance - 100.0).abs() < f64::EPSILON);
        assert!(!effect.permanent);
        assert_eq!(effect.duration, Range::new(1, 1));
        assert!(effect.damage_required.contains(1000.0));
        assert!(effect.message.is_empty());
    }
}
