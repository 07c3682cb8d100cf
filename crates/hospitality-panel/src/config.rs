//! Layered configuration.
//!
//! Resolution order, later layers winning:
//!
//! 1. Built-in defaults
//! 2. YAML config file (`~/.hospitality/config.yml`, or `--config PATH`)
//! 3. `HOSPITALITY_*` environment variables
//! 4. Command-line flags (applied by the CLI)

use std::env;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PanelError, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BASE_PATH: &str = "/hospitality";
pub const DEFAULT_PORT: u16 = 4174;

pub const ENV_API_URL: &str = "HOSPITALITY_API_URL";
pub const ENV_PAGE_SIZE: &str = "HOSPITALITY_PAGE_SIZE";
pub const ENV_SESSION_FILE: &str = "HOSPITALITY_SESSION_FILE";
pub const ENV_TIMEOUT_SECS: &str = "HOSPITALITY_TIMEOUT_SECS";
pub const ENV_LOG_JSON: &str = "HOSPITALITY_LOG_JSON";

/// On-disk config file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub api_url: Option<String>,
    pub page_size: Option<usize>,
    pub session_file: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_json: Option<bool>,
    pub dist_dir: Option<String>,
    pub base_path: Option<String>,
    pub port: Option<u16>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API base URL, without a trailing slash.
    pub api_url: String,
    /// Overrides every screen's default page size when set.
    pub page_size: Option<NonZeroUsize>,
    pub session_file: PathBuf,
    pub timeout: Duration,
    pub log_json: bool,
    pub dist_dir: PathBuf,
    pub base_path: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: None,
            session_file: default_session_path(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_json: false,
            dist_dir: PathBuf::from("dist"),
            base_path: DEFAULT_BASE_PATH.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("USERPROFILE").map(PathBuf::from))
}

fn app_dir() -> PathBuf {
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".hospitality")
}

pub fn default_config_path() -> PathBuf {
    app_dir().join("config.yml")
}

pub fn default_session_path() -> PathBuf {
    app_dir().join("session")
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Reads a config file. A missing file is an empty config when
/// `allow_missing` is set.
pub fn load_config_file(path: &Path, allow_missing: bool) -> Result<ConfigFile> {
    match std::fs::read_to_string(path) {
        Ok(contents) if contents.trim().is_empty() => Ok(ConfigFile::default()),
        Ok(contents) => serde_yaml::from_str(&contents).map_err(|e| {
            PanelError::Config(format!("failed to parse '{}': {e}", path.display()))
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
            Ok(ConfigFile::default())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(PanelError::Config(format!(
            "config file not found '{}'",
            path.display()
        ))),
        Err(e) => Err(PanelError::Config(format!(
            "failed to read '{}': {e}",
            path.display()
        ))),
    }
}

/// Normalizes and checks an API base URL.
pub fn parse_api_url(raw: &str) -> Result<String> {
    let url = raw.trim().trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(PanelError::Config(format!(
            "api url must start with http:// or https://, got '{raw}'"
        )))
    }
}

pub fn parse_page_size(raw: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(raw)
        .ok_or_else(|| PanelError::Config("page size must be at least 1".to_string()))
}

/// Normalizes a mount path to `/segment` form.
pub fn parse_base_path(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.contains("..") {
        return Err(PanelError::Config(format!("invalid base path '{raw}'")));
    }
    Ok(format!("/{trimmed}"))
}

fn parse_bool(name: &str, raw: &str) -> Result<bool> {
    match raw.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Ok(true),
        "0" | "false" | "FALSE" | "no" | "NO" | "" => Ok(false),
        other => Err(PanelError::Config(format!("{name}: expected a boolean, got '{other}'"))),
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| PanelError::Config(format!("{name}: expected a number, got '{raw}'")))
}

impl Config {
    /// Resolves defaults, the config file and the process environment.
    ///
    /// An explicit `path` must exist; the default location may be absent.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let file = match path {
            Some(p) => load_config_file(p, false)?,
            None => load_config_file(&default_config_path(), true)?,
        };
        let mut config = Config::default();
        config.merge_file(file)?;
        config.apply_env(|name| env::var(name).ok())?;
        Ok(config)
    }

    /// Overlays values present in a config file.
    pub fn merge_file(&mut self, file: ConfigFile) -> Result<()> {
        if let Some(url) = file.api_url {
            self.api_url = parse_api_url(&url)?;
        }
        if let Some(size) = file.page_size {
            self.page_size = Some(parse_page_size(size)?);
        }
        if let Some(path) = file.session_file {
            self.session_file = expand_tilde(&path);
        }
        if let Some(secs) = file.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(json) = file.log_json {
            self.log_json = json;
        }
        if let Some(dir) = file.dist_dir {
            self.dist_dir = expand_tilde(&dir);
        }
        if let Some(base) = file.base_path {
            self.base_path = parse_base_path(&base)?;
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        Ok(())
    }

    /// Overlays `HOSPITALITY_*` variables read through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_url = parse_api_url(&url)?;
        }
        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            self.page_size = Some(parse_page_size(parse_number(ENV_PAGE_SIZE, &raw)?)?);
        }
        if let Some(path) = lookup(ENV_SESSION_FILE) {
            self.session_file = expand_tilde(&path);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout = Duration::from_secs(parse_number(ENV_TIMEOUT_SECS, &raw)?);
        }
        if let Some(raw) = lookup(ENV_LOG_JSON) {
            self.log_json = parse_bool(ENV_LOG_JSON, &raw)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_map(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.page_size, None);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.session_file.ends_with(".hospitality/session"));
        assert_eq!(config.base_path, "/hospitality");
        assert_eq!(config.port, 4174);
    }

    #[test]
    fn file_layer_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api_url: https://anokha.example.org/api/v1/\npage_size: 20\nlog_json: true\nbase_path: panel/"
        )
        .unwrap();

        let parsed = load_config_file(file.path(), false).unwrap();
        let mut config = Config::default();
        config.merge_file(parsed).unwrap();

        assert_eq!(config.api_url, "https://anokha.example.org/api/v1");
        assert_eq!(config.page_size, NonZeroUsize::new(20));
        assert!(config.log_json);
        assert_eq!(config.base_path, "/panel");
    }

    #[test]
    fn env_layer_overrides_file() {
        let mut config = Config::default();
        config
            .merge_file(ConfigFile {
                api_url: Some("http://file.example/api/v1".into()),
                page_size: Some(10),
                ..ConfigFile::default()
            })
            .unwrap();
        config
            .apply_env(env_map(&[
                (ENV_API_URL, "http://env.example/api/v1"),
                (ENV_TIMEOUT_SECS, "5"),
                (ENV_LOG_JSON, "yes"),
            ]))
            .unwrap();

        assert_eq!(config.api_url, "http://env.example/api/v1");
        assert_eq!(config.page_size, NonZeroUsize::new(10));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.log_json);
    }

    #[test]
    fn invalid_values_are_config_errors() {
        let mut config = Config::default();
        assert!(matches!(
            config.apply_env(env_map(&[(ENV_PAGE_SIZE, "0")])),
            Err(PanelError::Config(_))
        ));
        assert!(matches!(
            config.apply_env(env_map(&[(ENV_PAGE_SIZE, "many")])),
            Err(PanelError::Config(_))
        ));
        assert!(matches!(
            config.apply_env(env_map(&[(ENV_LOG_JSON, "maybe")])),
            Err(PanelError::Config(_))
        ));
        assert!(parse_api_url("localhost:3000").is_err());
        assert!(parse_base_path("/../etc").is_err());
    }

    #[test]
    fn missing_file_handling() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        assert_eq!(load_config_file(&path, true).unwrap(), ConfigFile::default());
        assert!(matches!(
            load_config_file(&path, false),
            Err(PanelError::Config(_))
        ));
    }

    #[test]
    fn unknown_keys_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_ulr: http://typo.example").unwrap();
        assert!(load_config_file(file.path(), false).is_err());
    }

    #[test]
    #[serial]
    fn load_reads_process_environment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "page_size: 7\n").unwrap();

        env::set_var(ENV_API_URL, "https://env.example/api/v1");
        env::set_var(ENV_SESSION_FILE, "/tmp/hospitality-test-session");
        let config = Config::load(Some(&path));
        env::remove_var(ENV_API_URL);
        env::remove_var(ENV_SESSION_FILE);

        let config = config.unwrap();
        assert_eq!(config.api_url, "https://env.example/api/v1");
        assert_eq!(config.page_size, NonZeroUsize::new(7));
        assert_eq!(config.session_file, PathBuf::from("/tmp/hospitality-test-session"));
    }
}
