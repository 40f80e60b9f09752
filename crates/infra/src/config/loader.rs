//! Schedule configuration loader
//!
//! Loads a [`ScheduleConfig`] from a file and validates it before handing
//! it to the core.
//!
//! ## Loading Strategy
//! 1. If `WEEKPLAN_CONFIG` is set, load exactly that file
//! 2. Otherwise, probe the standard locations for a config file
//! 3. Supports JSON and TOML formats (detected by file extension)
//!
//! ## Environment Variables
//! - `WEEKPLAN_CONFIG`: Path to the schedule configuration file
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./weekplan.toml` or `./weekplan.json` (current working directory)
//! 2. `./config/weekplan.toml` or `./config/weekplan.json`
//! 3. The same names relative to the executable location

use std::path::{Path, PathBuf};

use weekplan_common::{log_error, CommonError};
use weekplan_core::ScheduleConfigSource;
use weekplan_domain::{Result, ScheduleConfig, WeekplanError};

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "WEEKPLAN_CONFIG";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["weekplan.toml", "weekplan.json", "config/weekplan.toml", "config/weekplan.json"];

/// Load configuration with automatic fallback strategy
///
/// Uses `WEEKPLAN_CONFIG` when it is set, otherwise probes the standard
/// locations.
///
/// # Errors
/// Returns `WeekplanError::Config` if no file can be found, read, or
/// parsed, and any validation error the parsed document raises.
pub fn load() -> Result<ScheduleConfig> {
    match load_from_env() {
        Ok(config) => Ok(config),
        Err(WeekplanError::Config(reason)) if std::env::var_os(CONFIG_PATH_ENV).is_none() => {
            tracing::debug!(%reason, "No configuration path in environment, probing files");
            load_from_file(None)
        }
        Err(err) => Err(err),
    }
}

/// Load the file named by `WEEKPLAN_CONFIG`
///
/// # Errors
/// Returns `WeekplanError::Config` if the variable is missing or the file
/// cannot be loaded.
pub fn load_from_env() -> Result<ScheduleConfig> {
    let path = env_var(CONFIG_PATH_ENV)?;
    tracing::info!(path = %path, "Configuration path taken from environment");
    load_from_file(Some(PathBuf::from(path)))
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `WeekplanError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
///
/// Validation errors from [`ScheduleConfig::validate`] are returned as-is.
pub fn load_from_file(path: Option<PathBuf>) -> Result<ScheduleConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(WeekplanError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            WeekplanError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading schedule configuration from file");

    let contents = std::fs::read_to_string(&config_path).map_err(|e| {
        let err = CommonError::persistence_op("read", format!("{}: {e}", config_path.display()));
        log_error(&err, "Failed to read schedule configuration");
        WeekplanError::from(err)
    })?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;

    tracing::info!(
        templates = config.templates.len(),
        patterns = config.patterns.len(),
        days = config.days.len(),
        "Schedule configuration loaded"
    );
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `WeekplanError::Config` if format is unsupported or parsing
/// fails.
pub fn parse_config(contents: &str, path: &Path) -> Result<ScheduleConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    let parsed = match extension {
        "toml" => toml::from_str(contents).map_err(CommonError::from),
        "json" => serde_json::from_str(contents).map_err(CommonError::from),
        other => Err(CommonError::config_field(
            "extension",
            format!("Unsupported config format: {other}"),
        )),
    };

    parsed.map_err(|err| {
        log_error(&err, "Failed to parse schedule configuration");
        WeekplanError::from(err)
    })
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| cwd.join(name)));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// [`ScheduleConfigSource`] backed by a file on disk
///
/// With no explicit path, each load goes through [`load`].
#[derive(Debug, Clone, Default)]
pub struct FileConfigSource {
    path: Option<PathBuf>,
}

impl FileConfigSource {
    /// Source that always reads `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()) }
    }

    /// Resolve the file from the environment or the standard locations
    pub fn discover() -> Self {
        Self::default()
    }
}

impl ScheduleConfigSource for FileConfigSource {
    fn load(&self) -> Result<ScheduleConfig> {
        match &self.path {
            Some(path) => load_from_file(Some(path.clone())),
            None => load(),
        }
    }
}

/// Get required environment variable
///
/// # Errors
/// Returns `WeekplanError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        WeekplanError::Config(format!("Missing required environment variable: {key}"))
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::{Builder, NamedTempFile};
    use weekplan_domain::Weekday;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const TOML_CONFIG: &str = r#"
        [templates.breakfast]
        name = "Breakfast"
        category = "meals"
        duration = 30

        [patterns.weekday]
        start = "06:00"
        blocks = ["breakfast"]

        [days.Monday]
        pattern = "weekday"
    "#;

    fn temp_config(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_from_file_toml() {
        let file = temp_config(".toml", TOML_CONFIG);
        let config = load_from_file(Some(file.path().to_path_buf())).unwrap();
        assert!(config.day(Weekday::Monday).is_some());
        assert_eq!(config.templates["breakfast"].duration, 30);
    }

    #[test]
    fn test_load_from_file_json() {
        let json_content = r#"{
            "templates": {
                "study": { "name": "Study Block", "category": "study", "duration": 60 }
            },
            "patterns": { "weekday": { "start": "7:00am", "blocks": [["study", 90]] } },
            "days": { "Tuesday": { "pattern": "weekday" } }
        }"#;
        let file = temp_config(".json", json_content);
        let config = load_from_file(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.patterns["weekday"].start, "7:00am");
    }

    #[test]
    fn test_load_from_file_missing() {
        let err = load_from_file(Some(PathBuf::from("/nonexistent/weekplan.toml"))).unwrap_err();
        assert!(matches!(err, WeekplanError::Config(ref msg) if msg.contains("not found")));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let file = temp_config(".toml", "[templates.breakfast\nname = ");
        let err = load_from_file(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, WeekplanError::Config(ref msg) if msg.contains("TOML")));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = temp_config(".yaml", "templates: {}");
        let err = load_from_file(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, WeekplanError::Config(ref msg) if msg.contains("yaml")));
    }

    #[test]
    fn test_loaded_file_is_validated() {
        let file = temp_config(".toml", "[days.Friday]\npattern = \"holiday\"\n");
        let err = load_from_file(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, WeekplanError::UnknownPattern { day: Weekday::Friday, .. }));
    }

    #[test]
    fn test_load_from_env_uses_path() {
        let _guard = ENV_LOCK.lock().unwrap();
        let file = temp_config(".toml", TOML_CONFIG);

        std::env::set_var(CONFIG_PATH_ENV, file.path());
        let result = load();
        std::env::remove_var(CONFIG_PATH_ENV);

        assert!(result.unwrap().day(Weekday::Monday).is_some());
    }

    #[test]
    fn test_load_from_env_missing_var() {
        let _guard = ENV_LOCK.lock().unwrap();
        let saved = std::env::var_os(CONFIG_PATH_ENV);
        std::env::remove_var(CONFIG_PATH_ENV);

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, WeekplanError::Config(ref msg) if msg.contains(CONFIG_PATH_ENV)));

        if let Some(value) = saved {
            std::env::set_var(CONFIG_PATH_ENV, value);
        }
    }

    #[test]
    fn test_env_path_to_missing_file_does_not_fall_back() {
        let _guard = ENV_LOCK.lock().unwrap();

        std::env::set_var(CONFIG_PATH_ENV, "/nonexistent/weekplan.toml");
        let result = load();
        std::env::remove_var(CONFIG_PATH_ENV);

        assert!(matches!(result, Err(WeekplanError::Config(ref msg)) if msg.contains("not found")));
    }

    #[test]
    fn test_file_source_loads_explicit_path() {
        let file = temp_config(".toml", TOML_CONFIG);
        let source = FileConfigSource::new(file.path());
        assert_eq!(source.load().unwrap().patterns.len(), 1);
    }
}
