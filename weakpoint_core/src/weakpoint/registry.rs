//! WeakPointRegistry - Weak point profiles by creature type

use super::WeakPointSet;
use crate::config::{ConfigError, ProfileDef, ProfilesConfig};
use crate::family::FamilySet;
use std::collections::HashMap;

/// Weak points and proficiency families of one creature type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeakPointProfile {
    pub id: String,
    pub weakpoints: WeakPointSet,
    pub families: FamilySet,
}

impl WeakPointProfile {
    pub fn new(id: impl Into<String>) -> Self {
        WeakPointProfile {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Apply one layer of changes: prune first, then merge
    ///
    /// On error the profile is left as it was.
    pub fn apply(&mut self, def: ProfileDef) -> Result<(), ConfigError> {
        let mut next = self.clone();
        next.weakpoints.remove(&def.remove_weakpoints);
        next.families.remove(&def.remove_families);
        next.weakpoints.load(def.weakpoints)?;
        next.families.load(def.families)?;
        if let Some(stacking) = def.family_stacking {
            next.families.stacking = stacking;
        }
        *self = next;
        Ok(())
    }
}

/// Profile registry
#[derive(Debug, Clone, Default)]
pub struct WeakPointRegistry {
    /// Mapping from profile ID to profile
    profiles: HashMap<String, WeakPointProfile>,
}

impl WeakPointRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        WeakPointRegistry {
            profiles: HashMap::new(),
        }
    }

    /// Register a profile, replacing any with the same id
    pub fn register(&mut self, profile: WeakPointProfile) {
        self.profiles.insert(profile.id.clone(), profile);
    }

    /// Get a profile by ID
    pub fn get(&self, id: &str) -> Option<&WeakPointProfile> {
        self.profiles.get(id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Profile ids in sorted order
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Apply a config layer on top of the current profiles, in order
    ///
    /// The layer is all or nothing: if any entry fails, no profile changes.
    pub fn apply_layer(&mut self, config: ProfilesConfig) -> Result<(), ConfigError> {
        let mut staged = self.profiles.clone();
        for def in config.profiles {
            if def.id.is_empty() {
                return Err(ConfigError::ValidationError(
                    "weak point profile without an id".to_string(),
                ));
            }
            let profile = staged
                .entry(def.id.clone())
                .or_insert_with(|| WeakPointProfile::new(def.id.clone()));
            profile.apply(def)?;
        }
        self.profiles = staged;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FamilyDef, WeakPointDef};
    use crate::types::ProficiencyId;

    fn profile_def(id: &str, weakpoints: &[&str]) -> ProfileDef {
        ProfileDef {
            id: id.to_string(),
            weakpoints: weakpoints.iter().map(|wp| WeakPointDef::new(*wp)).collect(),
            remove_weakpoints: Vec::new(),
            families: Vec::new(),
            remove_families: Vec::new(),
            family_stacking: None,
        }
    }

    #[test]
    fn test_apply_layer_creates_profiles() {
        let mut registry = WeakPointRegistry::new();
        registry
            .apply_layer(ProfilesConfig {
                profiles: vec![profile_def("zombie", &["head"]), profile_def("dog", &["nose"])],
            })
            .unwrap();

        assert_eq!(registry.ids(), vec!["dog", "zombie"]);
        assert!(registry.get("dog").unwrap().weakpoints.get("nose").is_some());
    }

    #[test]
    fn test_remove_runs_before_merge() {
        let mut profile = WeakPointProfile::new("zombie");
        profile.apply(profile_def("zombie", &["head", "eye"])).unwrap();

        let mut layer = profile_def("zombie", &["eye"]);
        layer.remove_weakpoints = vec!["eye".to_string(), "head".to_string()];
        profile.apply(layer).unwrap();

        let ids: Vec<&str> = profile.weakpoints.iter().map(|wp| wp.id.as_str()).collect();
        assert_eq!(ids, vec!["eye"]);
    }

    #[test]
    fn test_profile_without_id_rejected() {
        let mut registry = WeakPointRegistry::new();
        let err = registry
            .apply_layer(ProfilesConfig {
                profiles: vec![profile_def("", &["head"])],
            })
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_failed_apply_keeps_profile() {
        let mut profile = WeakPointProfile::new("zombie");
        profile.apply(profile_def("zombie", &["head", "eye"])).unwrap();
        let before = profile.clone();

        let mut layer = profile_def("zombie", &["knee", "knee"]);
        layer.remove_weakpoints = vec!["head".to_string()];
        let err = profile.apply(layer).unwrap_err();

        assert!(matches!(err, ConfigError::DuplicateId { .. }));
        assert_eq!(profile, before);
    }

    #[test]
    fn test_failed_family_load_keeps_weakpoints() {
        let mut profile = WeakPointProfile::new("zombie");
        profile.apply(profile_def("zombie", &["head"])).unwrap();

        let mut layer = profile_def("zombie", &["knee"]);
        layer.families = vec![
            FamilyDef {
                id: None,
                proficiency: ProficiencyId::from("prof_wp_zombie"),
                bonus: Some(1.0),
                penalty: None,
            };
            2
        ];
        assert!(profile.apply(layer).is_err());

        assert!(profile.weakpoints.get("knee").is_none());
        assert!(profile.families.is_empty());
    }

    #[test]
    fn test_failed_layer_changes_no_profile() {
        let mut registry = WeakPointRegistry::new();
        registry
            .apply_layer(ProfilesConfig {
                profiles: vec![profile_def("zombie", &["head", "eye"])],
            })
            .unwrap();

        let mut pruned = profile_def("zombie", &[]);
        pruned.remove_weakpoints = vec!["head".to_string()];
        let err = registry
            .apply_layer(ProfilesConfig {
                profiles: vec![pruned, profile_def("dog", &["nose", "nose"])],
            })
            .unwrap_err();

        assert!(matches!(err, ConfigError::DuplicateId { .. }));
        assert_eq!(registry.ids(), vec!["zombie"]);
        let ids: Vec<&str> = registry
            .get("zombie")
            .unwrap()
            .weakpoints
            .iter()
            .map(|wp| wp.id.as_str())
            .collect();
        assert_eq!(ids, vec!["head", "eye"]);
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = WeakPointRegistry::new();
        registry.register(WeakPointProfile::new("zombie"));
        registry.register(WeakPointProfile::new("zombie"));
        assert_eq!(registry.len(), 1);
    }
}
