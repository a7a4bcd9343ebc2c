use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Version written by [`save_to`]. Every bump needs a step in [`migrate`].
const CURRENT_VERSION: u32 = 2;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

pub const MODEL_ID_ENV: &str = "MINDWELL_MODEL_ID";
pub const REGION_ENV: &str = "MINDWELL_REGION";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MindwellConfig {
    /// 0 when the file predates versioning.
    #[serde(default)]
    pub config_version: u32,
    pub region: String,
    /// Bedrock inference profile used by every flow. Added in v1.
    pub model_id: String,
    /// IANA zone that decides what "today" is. Added in v2; `None` uses
    /// the system zone.
    #[serde(default)]
    pub time_zone: Option<String>,
    pub created_at: jiff::Timestamp,
    pub credentials: CredentialSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    Inline {
        access_key_id: String,
        secret_access_key: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        session_token: Option<String>,
    },
    Profile {
        profile_name: String,
    },
    DefaultChain,
}

impl Default for MindwellConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            region: DEFAULT_REGION.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            time_zone: None,
            created_at: jiff::Timestamp::now(),
            credentials: CredentialSource::DefaultChain,
        }
    }
}

/// What `config show` prints. Secrets are reduced to a hint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigInfo {
    pub path: String,
    pub region: String,
    pub model_id: String,
    pub time_zone: Option<String>,
    pub created_at: String,
    pub credential_type: String,
    pub profile_name: Option<String>,
    pub access_key_hint: Option<String>,
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("mindwell"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the saved config, or the defaults when none has been written yet.
pub fn load_or_default() -> eyre::Result<MindwellConfig> {
    let path = config_path()?;
    if path.exists() {
        load_from(&path)
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(MindwellConfig::default())
    }
}

pub fn load_from(path: &Path) -> eyre::Result<MindwellConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: MindwellConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Bring a raw config from `from_version` up to the current shape, one
/// step per version.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update mindwell."
        ));
    }

    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

    // v0 → v1: flows got a configurable model
    if from_version < 1 {
        obj.entry("model_id")
            .or_insert(serde_json::Value::String(DEFAULT_MODEL_ID.to_string()));
        tracing::info!("migrated config v0 → v1 (added model_id)");
    }

    // v1 → v2: explicit time zone for day boundaries
    if from_version < 2 {
        obj.entry("time_zone").or_insert(serde_json::Value::Null);
        tracing::info!("migrated config v1 → v2 (added time_zone)");
    }

    obj.insert(
        "config_version".to_string(),
        serde_json::Value::Number(CURRENT_VERSION.into()),
    );

    Ok(json)
}

pub fn save_config(config: &MindwellConfig) -> eyre::Result<PathBuf> {
    save_to(&config_dir()?, config)
}

/// Write `config.json` into `dir` and return its path.
pub fn save_to(dir: &Path, config: &MindwellConfig) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join("config.json");
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(path)
}

/// Apply `MINDWELL_MODEL_ID` and `MINDWELL_REGION` from `lookup`.
/// Empty values are ignored.
pub fn apply_env_overrides<F>(config: &mut MindwellConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let set = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(model_id) = set(MODEL_ID_ENV) {
        tracing::debug!(model_id = %model_id, "model overridden from environment");
        config.model_id = model_id;
    }
    if let Some(region) = set(REGION_ENV) {
        tracing::debug!(region = %region, "region overridden from environment");
        config.region = region;
    }
}

pub fn config_info(config: &MindwellConfig, path: &Path) -> ConfigInfo {
    let (credential_type, profile_name, access_key_hint) = match &config.credentials {
        CredentialSource::Inline {
            access_key_id,
            session_token,
            ..
        } => {
            let cred_type = if session_token.is_some() {
                "temporary"
            } else {
                "inline"
            };
            (cred_type.to_string(), None, Some(redact_access_key(access_key_id)))
        }
        CredentialSource::Profile { profile_name } => {
            ("profile".to_string(), Some(profile_name.clone()), None)
        }
        CredentialSource::DefaultChain => ("default_chain".to_string(), None, None),
    };

    ConfigInfo {
        path: path.display().to_string(),
        region: config.region.clone(),
        model_id: config.model_id.clone(),
        time_zone: config.time_zone.clone(),
        created_at: config.created_at.to_string(),
        credential_type,
        profile_name,
        access_key_hint,
    }
}

fn redact_access_key(key: &str) -> String {
    if key.len() <= 8 || !key.is_ascii() {
        return "****".to_string();
    }
    let prefix = &key[..4];
    let suffix = &key[key.len() - 4..];
    format!("{prefix}...{suffix}")
}

/// The current moment in the configured zone.
pub fn now(config: &MindwellConfig) -> eyre::Result<jiff::Zoned> {
    match &config.time_zone {
        Some(name) => {
            let tz = jiff::tz::TimeZone::get(name)
                .map_err(|e| eyre::eyre!("unknown time zone {name:?}: {e}"))?;
            Ok(jiff::Timestamp::now().to_zoned(tz))
        }
        None => Ok(jiff::Zoned::now()),
    }
}
