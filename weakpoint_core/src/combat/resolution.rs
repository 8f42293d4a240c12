//! Weak point resolution - Select, modify armor and damage, apply effects

use super::result::{DamageTaken, WeakPointHit};
use crate::attack::AttackContext;
use crate::creature::Creature;
use crate::damage::DamageInstance;
use crate::weakpoint::WeakPointSet;
use rand::Rng;

/// Resolve an attack against a defender through its weak points (immutable API)
///
/// `attack.target` must describe `defender`. Returns the new defender state and
/// the hit result. Steps:
/// 1. Select a weak point
/// 2. Apply its armor multipliers and penalties to the defender's resistances
/// 3. Apply its damage (or crit) multipliers to the incoming damage
/// 4. Subtract armor from each damage component
/// 5. Roll its effects against the total damage
pub fn resolve_weakpoint_hit<C, R>(
    weakpoints: &WeakPointSet,
    attack: &AttackContext<'_>,
    defender: &C,
    damage: &DamageInstance,
    rng: &mut R,
) -> (C, WeakPointHit)
where
    C: Creature + Clone,
    R: Rng + ?Sized,
{
    let mut new_defender = defender.clone();
    let mut result = WeakPointHit::new();

    // Step 1: Select
    let weakpoint = weakpoints.select_weakpoint(attack, rng);
    result.hit_weakpoint = !weakpoints.is_default(weakpoint);
    result.weakpoint_id = weakpoint.id.clone();
    result.weakpoint_name = weakpoint.name.clone();

    // Step 2: Armor
    let mut resistances = defender.resistances();
    weakpoint.apply_to_resistances(&mut resistances);

    // Step 3: Damage multipliers
    let mut scaled = damage.clone();
    weakpoint.apply_to_damage(&mut scaled, attack.is_crit);

    // Step 4: Armor absorbs per component
    for (raw, unit) in damage.units.iter().zip(&scaled.units) {
        result.damage_taken.push(DamageTaken {
            damage_type: unit.damage_type,
            raw_amount: raw.amount,
            scaled_amount: unit.amount,
            armor: resistances.get(unit.damage_type),
            final_amount: resistances.absorb(unit),
        });
    }
    result.total_damage = result.damage_taken.iter().map(|d| d.final_amount).sum();

    // Step 5: Effects
    result.effects_applied = weakpoint.apply_effects(&mut new_defender, result.total_damage, attack, rng);

    (new_defender, result)
}
