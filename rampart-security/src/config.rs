//! Security header configuration
//!
//! Header writers can be configured in code, from a TOML or JSON file, or from
//! the environment. Unknown policy values are rejected here even though
//! [`CrossOriginResourcePolicy::from_wire`] treats them as a plain miss: a typo
//! in configuration should stop startup rather than silently drop a header.
//!
//! ```toml
//! cross_origin_resource_policy = "same-origin"
//! ```

use crate::cross_origin_resource_policy::{
    CrossOriginResourcePolicy, CrossOriginResourcePolicyHeaderWriter,
};
use crate::error::{SecurityError, SecurityResult};
use crate::header_writer::CompositeHeaderWriter;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default prefix for environment variables
pub const DEFAULT_ENV_PREFIX: &str = "RAMPART";

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            _ => None,
        }
    }
}

/// Configuration for the security header writers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SecurityHeadersConfig {
    /// `Cross-Origin-Resource-Policy` value; no header when unset
    pub cross_origin_resource_policy: Option<CrossOriginResourcePolicy>,
}

impl SecurityHeadersConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cross_origin_resource_policy(mut self, policy: CrossOriginResourcePolicy) -> Self {
        self.cross_origin_resource_policy = Some(policy);
        self
    }

    pub fn from_toml_str(content: &str) -> SecurityResult<Self> {
        toml::from_str(content)
            .map_err(|e| SecurityError::config(format!("TOML parse error: {}", e)))
    }

    pub fn from_json_str(content: &str) -> SecurityResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| SecurityError::config(format!("JSON parse error: {}", e)))
    }

    /// Load from a `.toml` or `.json` file
    pub fn from_file(path: impl AsRef<Path>) -> SecurityResult<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| SecurityError::config("No file extension found"))?;
        let format = FileFormat::from_extension(ext)
            .ok_or_else(|| SecurityError::config(format!("Unsupported format: {}", ext)))?;

        let content = fs::read_to_string(path).map_err(|e| {
            SecurityError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), format = ?format, "Loading security header config");

        match format {
            FileFormat::Json => Self::from_json_str(&content),
            FileFormat::Toml => Self::from_toml_str(&content),
        }
    }

    /// Load from `RAMPART_*` environment variables, reading `.env` first if present
    pub fn from_env() -> SecurityResult<Self> {
        // a missing .env file is not an error
        let _ = dotenvy::dotenv();
        Self::from_env_with_prefix(DEFAULT_ENV_PREFIX)
    }

    /// Load a `.env` file into the process environment, then read `<prefix>_*`.
    ///
    /// Variables already set in the environment are not overridden.
    pub fn from_env_file(path: impl AsRef<Path>, prefix: &str) -> SecurityResult<Self> {
        let path = path.as_ref();
        dotenvy::from_path(path).map_err(|e| {
            SecurityError::config(format!("Failed to load {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "Loaded environment file");
        Self::from_env_with_prefix(prefix)
    }

    /// Load from `<prefix>_*` environment variables
    pub fn from_env_with_prefix(prefix: &str) -> SecurityResult<Self> {
        Self::from_lookup(prefix, |key| match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(SecurityError::config(format!("{}: {}", key, e))),
        })
    }

    /// Load using `lookup` to resolve `<prefix>_*` variable names.
    pub fn from_lookup<F>(prefix: &str, lookup: F) -> SecurityResult<Self>
    where
        F: Fn(&str) -> SecurityResult<Option<String>>,
    {
        let key = env_key(prefix, "CROSS_ORIGIN_RESOURCE_POLICY");
        let cross_origin_resource_policy = match lookup(&key)? {
            Some(raw) => Some(raw.trim().parse::<CrossOriginResourcePolicy>()?),
            None => None,
        };

        Ok(Self {
            cross_origin_resource_policy,
        })
    }

    /// Build the writers this configuration describes.
    ///
    /// The result is empty when nothing is configured.
    pub fn build_writer(&self) -> CompositeHeaderWriter {
        let mut writers = CompositeHeaderWriter::new();

        if let Some(policy) = self.cross_origin_resource_policy {
            writers.add_writer(CrossOriginResourcePolicyHeaderWriter::with_policy(policy));
        }

        debug!(writer_count = writers.len(), "Built security header writers");
        writers
    }
}

fn env_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}_{}", prefix.trim_end_matches('_').to_uppercase(), name)
    }
}
