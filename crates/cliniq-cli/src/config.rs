use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use cliniq_dialogue::DialogueConfig;
use cliniq_export::ExportFormat;
use cliniq_export::styles::DocumentStyles;
use cliniq_intent::vocabulary::Vocabulary;
use cliniq_router::reply::DEFAULT_IMAGE_URL_PATTERN;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

pub const ENV_DIALOGUE_TOKEN: &str = "CLINIQ_DIALOGUE_TOKEN";
pub const ENV_STORE_PATH: &str = "CLINIQ_STORE_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliniqConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub store: StoreConfig,
    #[serde(default)]
    pub dialogue: DialogueConfig,
    #[serde(default)]
    pub export: ExportConfig,
    /// Replies matching this regex are sent as images.
    #[serde(default = "default_image_url_pattern")]
    pub image_url_pattern: String,
    /// Replaces the built-in parser word lists when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<Vocabulary>,
    /// Replaces the built-in stopword list when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopwords: Option<Vec<String>>,
}

impl Default for CliniqConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            store: StoreConfig::default(),
            dialogue: DialogueConfig::default(),
            export: ExportConfig::default(),
            image_url_pattern: default_image_url_pattern(),
            vocabulary: None,
            stopwords: None,
        }
    }
}

fn default_image_url_pattern() -> String {
    DEFAULT_IMAGE_URL_PATTERN.to_string()
}

/// Where documents are read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum StoreConfig {
    /// A JSON array or JSON-lines file loaded into memory.
    Memory { path: PathBuf },
    /// A Tantivy index directory built with `cliniq import`.
    Index { path: PathBuf },
}

impl StoreConfig {
    pub fn path(&self) -> &Path {
        match self {
            StoreConfig::Memory { path } | StoreConfig::Index { path } => path,
        }
    }

    fn set_path(&mut self, new_path: PathBuf) {
        match self {
            StoreConfig::Memory { path } | StoreConfig::Index { path } => *path = new_path,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::Memory {
            path: PathBuf::from("documents.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub format: ExportFormat,
    /// Directory rendered charts are written to.
    pub dir: PathBuf,
    /// URL prefix the directory is served under.
    pub base_url: String,
    pub styles: DocumentStyles,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            dir: PathBuf::from("charts"),
            base_url: "http://localhost:8080/charts".to_string(),
            styles: DocumentStyles::default(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("cliniq"))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path` (or the platform default), falling back to
/// defaults when the file does not exist, then apply environment overrides.
pub fn load_config(path: Option<&Path>) -> eyre::Result<CliniqConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    let mut config = if path.exists() {
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
        let config = parse_config(&contents)?;
        tracing::info!(path = %path.display(), "config loaded");
        config
    } else {
        tracing::info!(path = %path.display(), "no config file, using defaults");
        CliniqConfig::default()
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

/// Parse config JSON, migrating older shapes first.
pub fn parse_config(contents: &str) -> eyre::Result<CliniqConfig> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: CliniqConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update cliniq."
        ));
    }

    // v0 → v1: flat `documents_path` / `access_token` move into the
    // `store` and `dialogue` sections.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

        let documents_path = obj.remove("documents_path");
        if !obj.contains_key("store") {
            let path = documents_path
                .unwrap_or_else(|| serde_json::Value::String("documents.json".to_string()));
            obj.insert(
                "store".to_string(),
                serde_json::json!({ "backend": "memory", "path": path }),
            );
        }

        if let Some(token) = obj.remove("access_token") {
            let dialogue = obj
                .entry("dialogue")
                .or_insert_with(|| serde_json::json!({}));
            if let Some(dialogue) = dialogue.as_object_mut() {
                dialogue.entry("token").or_insert(token);
            }
        }

        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (store and dialogue sections)");
    }

    Ok(json)
}

/// Secrets and deployment paths may come from the environment instead of
/// the file. Set values win over the file; empty values are ignored.
pub fn apply_env_overrides(config: &mut CliniqConfig, lookup: impl Fn(&str) -> Option<String>) {
    let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(token) = lookup(ENV_DIALOGUE_TOKEN) {
        config.dialogue.token = Some(token);
    }
    if let Some(path) = lookup(ENV_STORE_PATH) {
        config.store.set_path(PathBuf::from(path));
    }
}

pub fn save_config(config: &CliniqConfig, path: &Path) -> eyre::Result<()> {
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

    // The file may hold the dialogue token
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
