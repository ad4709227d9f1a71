#![deny(missing_docs)]

//! # Route Manifests
//!
//! YAML / JSON documents that populate a [`RouteRegistry`] at startup.
//!
//! ```yaml
//! base_uri: http://localhost:8080
//! name_policy: strict
//! routes:
//!   - name: items.show
//!     path: /items/{id}
//!     query: [sort, filter]
//! ```

use crate::error::{AppError, AppResult};
use crate::registry::{RouteDescriptor, RouteRegistry};
use crate::template::NamePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serializable form of a route table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteManifest {
    /// Prefix for every resolved URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_uri: Option<String>,
    /// Parameter name handling for templates built from these routes.
    #[serde(default)]
    pub name_policy: NamePolicy,
    /// Routes in registration order.
    #[serde(default)]
    pub routes: Vec<RouteDescriptor>,
}

impl RouteManifest {
    /// Parses a manifest from YAML.
    pub fn from_yaml_str(yaml: &str) -> AppResult<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| AppError::Config(format!("Failed to parse route manifest YAML: {}", e)))
    }

    /// Parses a manifest from JSON.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AppError::Config(format!("Failed to parse route manifest JSON: {}", e)))
    }

    /// Reads a manifest from disk. `.json` files are parsed as JSON,
    /// everything else as YAML.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        if is_json(path) {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Renders the manifest as YAML.
    pub fn to_yaml_string(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::General(format!("Failed to serialize manifest: {}", e)))
    }

    /// Renders the manifest as pretty JSON.
    pub fn to_json_string(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::General(format!("Failed to serialize manifest: {}", e)))
    }

    /// Writes the manifest to disk, choosing the format from the extension.
    pub fn write_to(&self, path: &Path) -> AppResult<()> {
        let content = if is_json(path) {
            self.to_json_string()?
        } else {
            self.to_yaml_string()?
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Builds the registry, validating every route.
    pub fn into_registry(self) -> AppResult<RouteRegistry> {
        let mut registry = RouteRegistry::new().with_name_policy(self.name_policy);
        if let Some(base) = self.base_uri {
            registry = registry.with_base_uri(base);
        }
        for route in self.routes {
            registry.register(route)?;
        }
        Ok(registry)
    }
}

impl RouteRegistry {
    /// Builds a registry from a YAML manifest.
    pub fn from_yaml_str(yaml: &str) -> AppResult<Self> {
        RouteManifest::from_yaml_str(yaml)?.into_registry()
    }

    /// Builds a registry from a JSON manifest.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        RouteManifest::from_json_str(json)?.into_registry()
    }

    /// Builds a registry from a manifest file.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        RouteManifest::from_path(path)?.into_registry()
    }

    /// Captures the registry as a manifest.
    pub fn to_manifest(&self) -> RouteManifest {
        RouteManifest {
            base_uri: self.base_uri().map(str::to_string),
            name_policy: self.options().name_policy,
            routes: self.routes().cloned().collect(),
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
