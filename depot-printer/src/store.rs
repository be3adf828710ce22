//! JSON-backed printer profile store
//!
//! One store instance owns the in-memory profile map and the path of the
//! backing file. The file is read once at construction and rewritten
//! wholesale on every mutation; a single process is assumed to own it.
//! There is no global instance; callers construct a store and pass it where
//! it is needed, and tests run against a temp directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{PrintError, PrintResult};
use crate::profile::PrinterProfile;

/// On-disk layout of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    default_printer: Option<String>,
    #[serde(default)]
    printers: BTreeMap<String, PrinterProfile>,
    /// Sections owned by other components (`label_defaults`, global
    /// settings) ride along so a whole-file rewrite never erases them.
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

/// Persistent collection of printer profiles with a default selection.
#[derive(Debug)]
pub struct PrinterProfileStore {
    path: PathBuf,
    config: ConfigFile,
}

impl PrinterProfileStore {
    /// Load the store from `path`.
    ///
    /// An absent or malformed file yields the built-in fallback profile and
    /// a logged warning, never an error. Nothing is written back until the
    /// first mutation.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<ConfigFile>(&raw) {
                Ok(config) => {
                    info!(path = %path.display(), printers = config.printers.len(), "printer configuration loaded");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "malformed printer configuration, using fallback profile");
                    Self::fallback_config()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "printer configuration not readable, using fallback profile");
                Self::fallback_config()
            }
        };

        Self { path, config }
    }

    fn fallback_config() -> ConfigFile {
        let fallback = PrinterProfile::fallback();
        let mut printers = BTreeMap::new();
        let id = fallback.id.clone();
        printers.insert(id.clone(), fallback);
        ConfigFile { default_printer: Some(id), printers, extra: BTreeMap::new() }
    }

    /// Rewrite the whole backing file.
    pub fn save(&self) -> PrintResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.config)
            .map_err(|e| PrintError::Validation(format!("unserializable configuration: {}", e)))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ========== Read Path ==========

    pub fn get(&self, id: &str) -> Option<&PrinterProfile> {
        self.config.printers.get(id)
    }

    pub fn all(&self) -> impl Iterator<Item = &PrinterProfile> {
        self.config.printers.values()
    }

    /// Profiles available for selection.
    pub fn enabled(&self) -> impl Iterator<Item = &PrinterProfile> {
        self.all().filter(|p| p.enabled)
    }

    /// The default profile, or `None` when unset or dangling.
    pub fn default_profile(&self) -> Option<&PrinterProfile> {
        self.config.default_printer.as_deref().and_then(|id| self.get(id))
    }

    // ========== Mutations (synchronous persist-or-fail) ==========

    /// Add a new profile. Fails on an empty or duplicate id.
    pub fn add(&mut self, profile: PrinterProfile) -> PrintResult<()> {
        if profile.id.trim().is_empty() {
            return Err(PrintError::Validation("printer id must not be empty".to_string()));
        }
        if self.config.printers.contains_key(&profile.id) {
            return Err(PrintError::Validation(format!(
                "printer '{}' already exists",
                profile.id
            )));
        }
        profile.validate()?;
        self.config.printers.insert(profile.id.clone(), profile);
        self.save()
    }

    /// Apply a partial update as a recursive deep merge.
    ///
    /// Nested objects merge key by key: patching `connection.port` leaves
    /// the sibling `ip_address` and `timeout` untouched. The merged result
    /// is re-validated through the typed profile before it replaces the
    /// stored one.
    pub fn update(&mut self, id: &str, patch: Value) -> PrintResult<()> {
        let current = self
            .config
            .printers
            .get(id)
            .ok_or_else(|| PrintError::NotFound(id.to_string()))?;

        let mut merged = serde_json::to_value(current)
            .map_err(|e| PrintError::Validation(format!("unserializable profile: {}", e)))?;
        deep_merge(&mut merged, &patch);

        let updated: PrinterProfile = serde_json::from_value(merged)
            .map_err(|e| PrintError::Validation(format!("invalid update for '{}': {}", id, e)))?;
        updated.validate()?;

        self.config.printers.insert(id.to_string(), updated);
        self.save()
    }

    pub fn enable(&mut self, id: &str) -> PrintResult<()> {
        self.update(id, serde_json::json!({ "enabled": true }))
    }

    pub fn disable(&mut self, id: &str) -> PrintResult<()> {
        self.update(id, serde_json::json!({ "enabled": false }))
    }

    /// Remove a profile. If it was the default, the default moves to the
    /// first remaining enabled profile, or clears.
    pub fn remove(&mut self, id: &str) -> PrintResult<()> {
        if self.config.printers.remove(id).is_none() {
            return Err(PrintError::NotFound(id.to_string()));
        }

        if self.config.default_printer.as_deref() == Some(id) {
            let next_default = self.enabled().next().map(|p| p.id.clone());
            self.config.default_printer = next_default;
        }

        self.save()
    }

    /// Select the default profile. Disabled profiles cannot be the default.
    pub fn set_default(&mut self, id: &str) -> PrintResult<()> {
        let profile = self.get(id).ok_or_else(|| PrintError::NotFound(id.to_string()))?;
        if !profile.enabled {
            return Err(PrintError::Disabled(id.to_string()));
        }
        self.config.default_printer = Some(id.to_string());
        self.save()
    }
}

/// Recursive merge: objects merge key by key, everything else replaces.
fn deep_merge(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                match target_map.get_mut(key) {
                    Some(existing) => deep_merge(existing, patch_value),
                    None => {
                        target_map.insert(key.clone(), patch_value.clone());
                    }
                }
            }
        }
        (target, patch) => *target = patch.clone(),
    }
}
