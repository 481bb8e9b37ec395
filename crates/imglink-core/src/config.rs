use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// What to do with a label cell whose formula is absent or does not yield a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellErrorPolicy {
    /// Log a warning and continue with the next cell.
    #[default]
    Skip,
    /// Stop extraction and return the error.
    Abort,
}

/// Network limits for a single fetch (optional `[fetch]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub connect_timeout_secs: u64,
    /// Upper bound for a whole transfer, headers included.
    pub timeout_secs: u64,
    /// Abort when the transfer stays below this rate for `low_speed_time_secs`.
    pub low_speed_limit_bytes: u32,
    pub low_speed_time_secs: u64,
    pub max_redirections: u32,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            timeout_secs: 300,
            low_speed_limit_bytes: 1024,
            low_speed_time_secs: 60,
            max_redirections: 10,
            user_agent: format!("imglink/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FetchConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn low_speed_time(&self) -> Duration {
        Duration::from_secs(self.low_speed_time_secs)
    }
}

/// Global configuration loaded from `~/.config/imglink/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImglinkConfig {
    /// Display value that marks a cell holding an image HYPERLINK formula.
    pub target_label: String,
    /// Directory the images are downloaded into.
    pub destination_dir: PathBuf,
    /// Suffix appended to the final path while a download is in flight.
    pub temp_suffix: String,
    /// Where `run` persists the extracted URL list (None = not persisted).
    pub url_list_file: Option<PathBuf>,
    /// Where failed URLs are written after a download run (None = not persisted).
    pub failure_log_file: Option<PathBuf>,
    /// Label cell without a formula.
    pub missing_formula: CellErrorPolicy,
    /// Label cell whose formula has no recoverable URL.
    pub unparsable_formula: CellErrorPolicy,
    pub fetch: FetchConfig,
}

impl Default for ImglinkConfig {
    fn default() -> Self {
        Self {
            target_label: "ImageLink".to_string(),
            destination_dir: PathBuf::from("images"),
            temp_suffix: ".downloading".to_string(),
            url_list_file: None,
            failure_log_file: Some(PathBuf::from("failed_downloads.txt")),
            missing_formula: CellErrorPolicy::Skip,
            unparsable_formula: CellErrorPolicy::Skip,
            fetch: FetchConfig::default(),
        }
    }
}

impl ImglinkConfig {
    /// Rejects settings that would make every run fail or write outside the destination.
    pub fn validate(&self) -> Result<()> {
        if self.target_label.is_empty() {
            anyhow::bail!("target_label must not be empty");
        }
        if self.temp_suffix.is_empty() {
            anyhow::bail!("temp_suffix must not be empty");
        }
        if self.temp_suffix.contains('/') || self.temp_suffix.contains('\\') {
            anyhow::bail!("temp_suffix must not contain a path separator: {:?}", self.temp_suffix);
        }
        if self.fetch.connect_timeout_secs == 0 || self.fetch.timeout_secs == 0 {
            anyhow::bail!("fetch timeouts must be greater than zero");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imglink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ImglinkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ImglinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path. Missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<ImglinkConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: ImglinkConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
