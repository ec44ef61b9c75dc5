use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Tunable settings for a screening session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Tapping trial window, in seconds.
    pub capture_window_secs: u64,
    /// Poll interval inside the trial window, in milliseconds.
    pub capture_poll_ms: u64,
    /// Seed for the assistant's response selection. `None` draws from OS
    /// entropy; set it for reproducible conversations.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dialogue_seed: Option<u64>,
    /// Where the assistant's knowledge base comes from.
    pub knowledge_base: KnowledgeBase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum KnowledgeBase {
    /// No retrieval; rule-based responses only.
    Disabled,
    /// The guidelines compiled into neurobridge-dialogue.
    Bundled,
    /// A guidelines file on disk.
    File { path: PathBuf },
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            capture_window_secs: 10,
            capture_poll_ms: 200,
            dialogue_seed: None,
            knowledge_base: KnowledgeBase::Bundled,
        }
    }
}

pub fn load_config(path: &Path) -> Result<ScreeningConfig, SessionError> {
    let contents = std::fs::read_to_string(path)?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ScreeningConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
) -> Result<serde_json::Value, SessionError> {
    if from_version > CURRENT_VERSION {
        return Err(SessionError::ConfigVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: add knowledge_base (pre-versioned configs always used the
    // bundled guidelines)
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(SessionError::ConfigShape)?;
        obj.entry("knowledge_base")
            .or_insert(serde_json::json!({ "source": "bundled" }));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added knowledge_base)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_config(path: &Path, config: &ScreeningConfig) -> Result<(), SessionError> {
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

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
