use std::path::Path;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::crisis::DEFAULT_CRISIS_KEYWORDS;
use crate::error::ChatError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

pub const DEFAULT_HELPLINE: &str = "988";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default = "default_keywords")]
    pub crisis_keywords: Vec<String>,
    /// Number quoted in crisis replies. Added in v1.
    pub helpline: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            crisis_keywords: default_keywords(),
            helpline: DEFAULT_HELPLINE.to_string(),
        }
    }
}

fn default_keywords() -> Vec<String> {
    DEFAULT_CRISIS_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

pub fn parse_config(contents: &str) -> Result<ChatConfig, ChatError> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    // Missing = pre-versioned. Anything wider than u32 is from a newer build.
    let on_disk_version = match json.get("config_version") {
        None | Some(serde_json::Value::Null) => 0,
        Some(v) => {
            let raw = v.as_u64().ok_or_else(|| {
                ChatError::Config(format!("config_version must be a non-negative integer, got {v}"))
            })?;
            u32::try_from(raw).map_err(|_| newer_version(raw))?
        }
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: ChatConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<ChatConfig, ChatError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ChatError::Config(format!("failed to read config at {}: {e}", path.display()))
    })?;
    parse_config(&contents)
}

/// Like [`load_config`], but a missing file yields the defaults.
pub fn load_or_default(path: &Path) -> Result<ChatConfig, ChatError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no chat config, using defaults");
        return Ok(ChatConfig::default());
    }
    load_config(path)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, ChatError> {
    if from_version > CURRENT_VERSION {
        return Err(newer_version(from_version.into()));
    }

    // v0 → v1: add helpline
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| ChatError::Config("config is not a JSON object".to_string()))?;
        obj.entry("helpline")
            .or_insert(serde_json::Value::String(DEFAULT_HELPLINE.to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated chat config v0 → v1 (added helpline)");
    }

    Ok(json)
}

fn newer_version(version: u64) -> ChatError {
    ChatError::Config(format!(
        "config_version {version} is newer than this build supports ({CURRENT_VERSION})"
    ))
}

pub fn save_config(path: &Path, config: &ChatConfig) -> Result<(), ChatError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "chat config saved");
    Ok(())
}
