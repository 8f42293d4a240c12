//! Proficiency families - Skill bonuses for knowing how to exploit weak points
//!
//! Each family ties a bonus (for holding a proficiency) or a penalty (for
//! lacking it) to the attacker's weak point skill. Hitting, killing and
//! dissecting creatures practices the proficiencies the learner is missing.

use crate::config::{ConfigError, FamilyDef};
use crate::creature::Creature;
use crate::types::ProficiencyId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Practice amounts for combat events
pub mod constants {
    use std::time::Duration;

    /// Practice granted per weak point hit
    pub const PRACTICE_HIT: Duration = Duration::from_secs(1);

    /// Practice granted per kill
    pub const PRACTICE_KILL: Duration = Duration::from_secs(60);

    /// Practice granted per dissection
    pub const PRACTICE_DISSECT: Duration = Duration::from_secs(5 * 60);
}

/// A skill modifier tied to one proficiency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProficiencyFamily {
    /// Family id; equal to the proficiency id unless configured
    pub id: String,
    pub proficiency: ProficiencyId,
    /// Skill bonus for having the proficiency
    pub bonus: Option<f64>,
    /// Skill penalty for not having the proficiency
    pub penalty: Option<f64>,
}

impl ProficiencyFamily {
    pub fn new(proficiency: ProficiencyId) -> Self {
        ProficiencyFamily {
            id: proficiency.0.clone(),
            proficiency,
            bonus: None,
            penalty: None,
        }
    }

    pub fn with_bonus(mut self, bonus: f64) -> Self {
        self.bonus = Some(bonus);
        self
    }

    pub fn with_penalty(mut self, penalty: f64) -> Self {
        self.penalty = Some(penalty);
        self
    }

    /// Skill modifier for `attacker`
    pub fn modifier(&self, attacker: &dyn Creature) -> f64 {
        if attacker.has_proficiency(&self.proficiency) {
            self.bonus.unwrap_or(0.0)
        } else {
            -self.penalty.unwrap_or(0.0)
        }
    }
}

impl From<FamilyDef> for ProficiencyFamily {
    fn from(def: FamilyDef) -> Self {
        ProficiencyFamily {
            id: def.id.unwrap_or_else(|| def.proficiency.0.clone()),
            proficiency: def.proficiency,
            bonus: def.bonus,
            penalty: def.penalty,
        }
    }
}

/// How the modifiers of several families combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyStacking {
    /// Every family contributes
    #[default]
    Sum,
    /// Only the most favourable family counts
    Best,
}

/// Ordered collection of proficiency families
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilySet {
    pub families: Vec<ProficiencyFamily>,
    #[serde(default)]
    pub stacking: FamilyStacking,
}

impl FamilySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_families(families: Vec<ProficiencyFamily>) -> Self {
        FamilySet {
            families,
            stacking: FamilyStacking::Sum,
        }
    }

    pub fn with_stacking(mut self, stacking: FamilyStacking) -> Self {
        self.stacking = stacking;
        self
    }

    pub fn get(&self, id: &str) -> Option<&ProficiencyFamily> {
        self.families.iter().find(|f| f.id == id)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Combined skill modifier for `attacker`
    pub fn modifier(&self, attacker: &dyn Creature) -> f64 {
        let modifiers = self.families.iter().map(|f| f.modifier(attacker));
        match self.stacking {
            FamilyStacking::Sum => modifiers.sum(),
            FamilyStacking::Best => modifiers.reduce(f64::max).unwrap_or(0.0),
        }
    }

    /// Practice every missing proficiency for `amount`
    ///
    /// Returns true if any proficiency was learned by this call.
    pub fn practice(&self, learner: &mut dyn Creature, amount: Duration) -> bool {
        let mut learned = false;
        for family in &self.families {
            if learner.has_proficiency(&family.proficiency) {
                continue;
            }
            if learner.practice_proficiency(&family.proficiency, amount) {
                tracing::debug!("learned proficiency {} through family {}", family.proficiency, family.id);
                learned = true;
            }
        }
        learned
    }

    pub fn practice_hit(&self, learner: &mut dyn Creature) -> bool {
        self.practice(learner, constants::PRACTICE_HIT)
    }

    pub fn practice_kill(&self, learner: &mut dyn Creature) -> bool {
        self.practice(learner, constants::PRACTICE_KILL)
    }

    pub fn practice_dissect(&self, learner: &mut dyn Creature) -> bool {
        self.practice(learner, constants::PRACTICE_DISSECT)
    }

    pub fn clear(&mut self) {
        self.families.clear();
    }

    /// Merge families from config
    ///
    /// Families whose id already exists are replaced in place; new ids are
    /// appended. Duplicate ids within one load are rejected and leave the set
    /// unchanged.
    pub fn load(&mut self, defs: Vec<FamilyDef>) -> Result<(), ConfigError> {
        let incoming: Vec<ProficiencyFamily> = defs.into_iter().map(ProficiencyFamily::from).collect();

        let mut seen = HashSet::new();
        for family in &incoming {
            if !seen.insert(family.id.as_str()) {
                return Err(ConfigError::DuplicateId {
                    kind: "weak point family",
                    id: family.id.clone(),
                });
            }
        }

        for family in incoming {
            match self.families.iter_mut().find(|f| f.id == family.id) {
                Some(existing) => *existing = family,
                None => self.families.push(family),
            }
        }
        Ok(())
    }

    /// Remove families by id; unknown ids are ignored
    pub fn remove<S: AsRef<str>>(&mut self, ids: &[S]) {
        self.families
            .retain(|f| !ids.iter().any(|id| id.as_ref() == f.id));
    }
}
