//! Combat resolution - Apply a weak point strike to a defender

mod resolution;
mod result;

pub use resolution::resolve_weakpoint_hit;
pub use result::{DamageTaken, WeakPointHit};
