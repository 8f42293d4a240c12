//! Damage model consumed by the weak point pipeline - DamageInstance and Resistances

mod instance;
mod resistances;

pub use instance::{DamageInstance, DamageUnit};
pub use resistances::Resistances;
