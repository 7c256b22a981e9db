// Configuration for the kiosk
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/scandesk/config.toml)
// 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// How long the reaction card stays up before reverting to the idle prompt
pub const DEFAULT_REACTION_DELAY_MS: u64 = 2000;

/// Default record-set name, used for both the key list and the CSV export
pub const DEFAULT_ROSTER_NAME: &str = "checkins";

/// Rotation policy for file logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl LogRotation {
    /// Parse a config value; anything unrecognized falls back to daily.
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "hourly" => LogRotation::Hourly,
            "never" => LogRotation::Never,
            _ => LogRotation::Daily,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogRotation::Hourly => "hourly",
            LogRotation::Daily => "daily",
            LogRotation::Never => "never",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Write logs to rotating files in addition to the in-TUI log view
    pub file_enabled: bool,

    /// Directory for log files
    pub file_dir: PathBuf,

    /// Log file name prefix
    pub file_prefix: String,

    /// Rotation policy for log files
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "scandesk".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the key-list file
    pub data_dir: PathBuf,

    /// Directory CSV exports are written to
    pub export_dir: PathBuf,

    /// Record-set name: <data_dir>/<name>.list and <export_dir>/<name>.csv
    pub roster_name: String,

    /// Milliseconds the reaction card stays up before the idle prompt returns
    pub reaction_delay_ms: u64,

    /// Theme name: "Dark", "Light", "Sorbet", "Midnight"
    pub theme: String,

    /// Demo mode: feed synthetic scans to showcase the display
    pub demo_mode: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
    file_prefix: Option<String>,
    file_rotation: Option<String>,
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    data_dir: Option<String>,
    export_dir: Option<String>,
    roster_name: Option<String>,
    reaction_delay_ms: Option<u64>,
    theme: Option<String>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: ~/.config/scandesk/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("scandesk").join("config.toml"))
    }

    /// Create config template if it doesn't exist
    /// Called during startup to help operators discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        let template = r#"# scandesk configuration
# Uncomment and modify options as needed

# Record-set name; names the key list (<name>.list) and the export (<name>.csv)
# roster_name = "checkins"

# Directory holding the key-list file (default: ./data)
# data_dir = "./data"

# Directory CSV exports are written to (default: ./exports)
# export_dir = "./exports"

# How long the reaction card stays up, in milliseconds (default: 2000)
# reaction_delay_ms = 2000

# Theme: Dark, Light, Sorbet, Midnight (press 't' in the kiosk to cycle)
# theme = "Dark"

# Logging configuration
# [logging]
# level = "info"          # trace, debug, info, warn, error (RUST_LOG overrides)
# file_enabled = false    # also write rotating log files
# file_dir = "./logs"
# file_prefix = "scandesk"
# file_rotation = "daily" # hourly, daily, never
"#;

        // Write template (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                FileConfig::default()
            }),
            Err(_) => FileConfig::default(), // File doesn't exist, use defaults
        }
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# scandesk configuration

# Record-set name; names the key list (<name>.list) and the export (<name>.csv)
roster_name = "{roster}"

# Directory holding the key-list file
data_dir = "{data_dir}"

# Directory CSV exports are written to
export_dir = "{export_dir}"

# How long the reaction card stays up, in milliseconds
reaction_delay_ms = {delay}

# Theme: Dark, Light, Sorbet, Midnight (press 't' in the kiosk to cycle)
theme = "{theme}"

# Logging configuration (RUST_LOG env var overrides the level)
[logging]
level = "{log_level}"
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_prefix = "{file_prefix}"
file_rotation = "{file_rotation}"
"#,
            roster = self.roster_name,
            data_dir = self.data_dir.display(),
            export_dir = self.export_dir.display(),
            delay = self.reaction_delay_ms,
            theme = self.theme,
            log_level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_prefix = self.logging.file_prefix,
            file_rotation = self.logging.file_rotation.as_str(),
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();

        // Data directory: env > file > default
        let data_dir = std::env::var("SCANDESK_DATA_DIR")
            .ok()
            .or(file.data_dir)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data"));

        // Export directory: env > file > default
        let export_dir = std::env::var("SCANDESK_EXPORT_DIR")
            .ok()
            .or(file.export_dir)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./exports"));

        // Record-set name: env > file > default
        let roster_name = std::env::var("SCANDESK_ROSTER")
            .ok()
            .or(file.roster_name)
            .unwrap_or_else(|| DEFAULT_ROSTER_NAME.to_string());

        // Reaction delay: env > file > default
        let reaction_delay_ms = std::env::var("SCANDESK_REACTION_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.reaction_delay_ms)
            .unwrap_or(DEFAULT_REACTION_DELAY_MS);

        // Theme: env > file > default
        let theme = std::env::var("SCANDESK_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or_else(|| "Dark".to_string());

        // Demo mode: env only (runtime flag)
        let demo_mode = std::env::var("SCANDESK_DEMO")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        // Logging settings: file config only (RUST_LOG env var handled in main.rs)
        let file_logging = file.logging.unwrap_or_default();
        let defaults = LoggingConfig::default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or(defaults.level),
            file_enabled: file_logging.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file_logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.file_dir),
            file_prefix: file_logging.file_prefix.unwrap_or(defaults.file_prefix),
            file_rotation: file_logging
                .file_rotation
                .as_deref()
                .map(LogRotation::parse)
                .unwrap_or(defaults.file_rotation),
        };

        Self {
            data_dir,
            export_dir,
            roster_name,
            reaction_delay_ms,
            theme,
            demo_mode,
            logging,
        }
    }

    /// The reaction delay as a Duration
    pub fn reaction_delay(&self) -> Duration {
        Duration::from_millis(self.reaction_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            export_dir: PathBuf::from("./exports"),
            roster_name: DEFAULT_ROSTER_NAME.to_string(),
            reaction_delay_ms: DEFAULT_REACTION_DELAY_MS,
            theme: "Dark".to_string(),
            demo_mode: false,
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.roster_name, "checkins");
        assert_eq!(config.reaction_delay_ms, 2000);
        assert_eq!(config.reaction_delay(), Duration::from_millis(2000));
        assert!(!config.demo_mode);
        assert!(!config.logging.file_enabled);
    }

    #[test]
    fn rotation_parse_is_forgiving() {
        assert_eq!(LogRotation::parse("hourly"), LogRotation::Hourly);
        assert_eq!(LogRotation::parse("Never"), LogRotation::Never);
        assert_eq!(LogRotation::parse("daily"), LogRotation::Daily);
        assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    }

    #[test]
    fn file_config_parses_partial_toml() {
        let parsed: FileConfig = toml::from_str(
            r#"
roster_name = "gala-2026"
reaction_delay_ms = 1500

[logging]
level = "debug"
file_rotation = "hourly"
"#,
        )
        .unwrap();

        assert_eq!(parsed.roster_name.as_deref(), Some("gala-2026"));
        assert_eq!(parsed.reaction_delay_ms, Some(1500));
        assert!(parsed.data_dir.is_none());
        let logging = parsed.logging.unwrap();
        assert_eq!(logging.level.as_deref(), Some("debug"));
        assert_eq!(logging.file_rotation.as_deref(), Some("hourly"));
    }

    #[test]
    fn to_toml_round_trips_through_file_config() {
        let mut config = Config::default();
        config.roster_name = "spring-social".to_string();
        config.reaction_delay_ms = 900;
        config.logging.file_enabled = true;
        config.logging.file_rotation = LogRotation::Never;

        let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
        assert_eq!(parsed.roster_name.as_deref(), Some("spring-social"));
        assert_eq!(parsed.reaction_delay_ms, Some(900));
        let logging = parsed.logging.unwrap();
        assert_eq!(logging.file_enabled, Some(true));
        assert_eq!(
            logging.file_rotation.as_deref().map(LogRotation::parse),
            Some(LogRotation::Never)
        );
    }
}
