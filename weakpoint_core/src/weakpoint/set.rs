//! WeakPointSet - Weak points of one target and the selection draw
//!
//! Selection is a single weighted draw. Each eligible weak point weighs its
//! hit chance; the default weak point takes whatever is left of 100:
//! - S = sum(hit_chance)
//! - remainder = max(0, 100 - S)
//! - roll in [0, S + remainder)

use super::WeakPoint;
use crate::attack::AttackContext;
use crate::config::{ConfigError, WeakPointDef};
use rand::Rng;
use std::collections::HashSet;

/// Draw weights for one attack
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionWeights {
    /// Hit chance of each listed weak point, in list order
    pub weights: Vec<f64>,
    /// Mass left for the default weak point
    pub remainder: f64,
}

impl SelectionWeights {
    /// Sum of the listed weak points' weights
    pub fn listed_total(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Width of the draw range
    pub fn total(&self) -> f64 {
        self.listed_total() + self.remainder
    }
}

/// Weak points of a target plus the "no weak point" fallback
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeakPointSet {
    /// Ordered weak points; ids are unique
    pub weakpoint_list: Vec<WeakPoint>,
    /// Returned when no listed weak point is struck
    pub default_weakpoint: WeakPoint,
}

impl WeakPointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.weakpoint_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weakpoint_list.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&WeakPoint> {
        self.weakpoint_list.iter().find(|wp| wp.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeakPoint> {
        self.weakpoint_list.iter()
    }

    /// Whether `weakpoint` is this set's default weak point
    pub fn is_default(&self, weakpoint: &WeakPoint) -> bool {
        std::ptr::eq(weakpoint, &self.default_weakpoint)
    }

    /// Compute the draw weights for an attack
    pub fn selection_weights(&self, attack: &AttackContext<'_>) -> SelectionWeights {
        let weights: Vec<f64> = self
            .weakpoint_list
            .iter()
            .map(|wp| wp.hit_chance(attack))
            .collect();
        let listed: f64 = weights.iter().sum();
        SelectionWeights {
            weights,
            remainder: (100.0 - listed).max(0.0),
        }
    }

    /// Select a weak point to hit
    pub fn select_weakpoint<R: Rng + ?Sized>(&self, attack: &AttackContext<'_>, rng: &mut R) -> &WeakPoint {
        let weights = self.selection_weights(attack);
        let roll = rng.gen_range(0.0..weights.total());
        let selected = self.select_with_roll(&weights, roll);
        tracing::debug!(
            "selected weak point '{}' (roll {:.2} of {:.2})",
            selected.id,
            roll,
            weights.total()
        );
        selected
    }

    /// Resolve a roll in `[0, weights.total())` to a weak point
    ///
    /// Zero-weight weak points are never returned, even when the roll sits on
    /// their cumulative boundary.
    pub fn select_with_roll(&self, weights: &SelectionWeights, roll: f64) -> &WeakPoint {
        let mut cumulative = 0.0;
        for (wp, &weight) in self.weakpoint_list.iter().zip(&weights.weights) {
            if weight <= 0.0 {
                continue;
            }
            cumulative += weight;
            if roll < cumulative {
                return wp;
            }
        }
        &self.default_weakpoint
    }

    /// Reset to the default-only state
    pub fn clear(&mut self) {
        self.weakpoint_list.clear();
        self.default_weakpoint = WeakPoint::default();
    }

    /// Merge weak points from config
    ///
    /// Weak points whose id already exists are replaced in place; new ids are
    /// appended. Duplicate ids within one load are rejected and leave the set
    /// unchanged.
    pub fn load(&mut self, defs: Vec<WeakPointDef>) -> Result<(), ConfigError> {
        let incoming: Vec<WeakPoint> = defs.into_iter().map(WeakPoint::from).collect();

        let mut seen = HashSet::new();
        for wp in &incoming {
            if !seen.insert(wp.id.as_str()) {
                return Err(ConfigError::DuplicateId {
                    kind: "weak point",
                    id: wp.id.clone(),
                });
            }
        }

        for wp in incoming {
            match self.weakpoint_list.iter_mut().find(|existing| existing.id == wp.id) {
                Some(existing) => *existing = wp,
                None => self.weakpoint_list.push(wp),
            }
        }
        Ok(())
    }

    /// Remove weak points by id; unknown ids are ignored
    pub fn remove<S: AsRef<str>>(&mut self, ids: &[S]) {
        self.weakpoint_list
            .retain(|wp| !ids.iter().any(|id| id.as_ref() == wp.id));
    }
}
