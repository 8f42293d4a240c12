//! weakpoint_core - Weak point targeting for combat targets
//!
//! This library provides:
//! - WeakPointSet: Weighted selection of the weak point an attack strikes
//! - WeakPoint: Armor, damage and crit multipliers plus status effects
//! - FamilySet: Proficiency-based skill modifiers and practice
//! - Profiles: Layered TOML configuration of weak points per creature type
//! - Resolution: A reference composition of the pipeline with a damage step

pub mod attack;
pub mod combat;
pub mod config;
pub mod creature;
pub mod damage;
pub mod difficulty;
pub mod effect;
pub mod family;
pub mod prelude;
pub mod types;
pub mod weakpoint;

// Re-export core types for convenience
pub use attack::{AttackContext, AttackType};
pub use combat::{resolve_weakpoint_hit, DamageTaken, WeakPointHit};
pub use config::{default_profiles, ConfigError};
pub use creature::{ActiveEffect, Creature, CreatureState, ProficiencyProgress};
pub use damage::{DamageInstance, DamageUnit, Resistances};
pub use difficulty::DifficultyTable;
pub use effect::{AppliedEffect, WeakPointEffect};
pub use family::{FamilySet, FamilyStacking, ProficiencyFamily};
pub use types::{DamageType, EffectId, ProficiencyId, Range, Weapon};
pub use weakpoint::{SelectionWeights, WeakPoint, WeakPointProfile, WeakPointRegistry, WeakPointSet};
