//! Prelude module for convenient imports
//!
//! ```rust
//! use weakpoint_core::prelude::*;
//! ```

// Core types
pub use crate::types::{DamageType, EffectId, ProficiencyId, Weapon};

// Attacks
pub use crate::attack::{AttackContext, AttackType};

// Weak points
pub use crate::effect::{AppliedEffect, WeakPointEffect};
pub use crate::weakpoint::{WeakPoint, WeakPointProfile, WeakPointRegistry, WeakPointSet};

// Families
pub use crate::family::{FamilySet, ProficiencyFamily};

// Damage and combat
pub use crate::combat::{resolve_weakpoint_hit, WeakPointHit};
pub use crate::damage::{DamageInstance, Resistances};

// Creatures
pub use crate::creature::{Creature, CreatureState};

// Config
pub use crate::config::{default_profiles, ConfigError};
