//! Attack descriptors - AttackType and AttackContext

mod context;
mod kind;

pub use context::AttackContext;
pub use kind::AttackType;
