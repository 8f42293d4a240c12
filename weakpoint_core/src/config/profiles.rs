//! Weak point profile configuration loading
//!
//! A profile file is a layer. Each `[[profiles]]` entry extends, overrides or
//! prunes the profile with the same id built by earlier layers.

use super::{ConfigError, FamilyDef, WeakPointDef};
use crate::family::FamilyStacking;
use crate::weakpoint::WeakPointRegistry;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for one layer of profile definitions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilesConfig {
    #[serde(default)]
    pub profiles: Vec<ProfileDef>,
}

/// Changes to one creature type's weak points and families
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDef {
    pub id: String,
    #[serde(default)]
    pub weakpoints: Vec<WeakPointDef>,
    /// Weak point ids to prune before `weakpoints` are merged
    #[serde(default)]
    pub remove_weakpoints: Vec<String>,
    #[serde(default)]
    pub families: Vec<FamilyDef>,
    /// Family ids to prune before `families` are merged
    #[serde(default)]
    pub remove_families: Vec<String>,
    pub family_stacking: Option<FamilyStacking>,
}

/// Load a profile layer from a TOML file into a fresh registry
pub fn load_profiles(path: &Path) -> Result<WeakPointRegistry, ConfigError> {
    let config: ProfilesConfig = super::load_toml(path)?;

    let mut registry = WeakPointRegistry::new();
    registry.apply_layer(config)?;

    Ok(registry)
}

/// Load a profile layer from a TOML string into a fresh registry
pub fn parse_profiles(content: &str) -> Result<WeakPointRegistry, ConfigError> {
    let mut registry = WeakPointRegistry::new();
    apply_profile_layer(&mut registry, content)?;
    Ok(registry)
}

/// Apply a TOML profile layer on top of an existing registry
pub fn apply_profile_layer(registry: &mut WeakPointRegistry, content: &str) -> Result<(), ConfigError> {
    let config: ProfilesConfig = super::parse_toml(content)?;
    registry.apply_layer(config)
}

/// Get the bundled profiles
pub fn default_profiles() -> WeakPointRegistry {
    let toml = include_str!("../../config/weakpoints.toml");
    parse_profiles(toml).unwrap_or_else(|err| {
        tracing::warn!("bundled weak point profiles failed to load: {}", err);
        WeakPointRegistry::new()
    })
}
