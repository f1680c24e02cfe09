/*
 * Manages the application's settings: which folder is searched, which file
 * extension marks a candidate document, and whether strict matching is used.
 * Settings are persisted as a small JSON file and read once at startup into an
 * immutable `Settings` value.
 *
 * Writing the default file is an explicit step (`ensure_defaults`) separate
 * from loading, so loading never has side effects. It uses a trait-based
 * approach (`ConfigManagerOperations`) to allow mock implementations for testing.
 */
use crate::core::matcher::MatchPolicy;
use crate::core::path_utils;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_EXTENSION: &str = ".txt";
const STRICT_MATCH_ENABLED: &str = "yes";
const STRICT_MATCH_DISABLED: &str = "no";

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Serde(serde_json::Error),
    NoConfigDirectory,
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serde(err)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Configuration I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "Configuration file format error: {e}"),
            ConfigError::NoConfigDirectory => {
                write!(f, "Could not determine a directory for the configuration file")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Serde(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

// Effective settings for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub folder_path: PathBuf,
    pub file_extension: String,
    pub strict_match: bool,
}

impl Settings {
    pub fn match_policy(&self) -> MatchPolicy {
        MatchPolicy::from_strict_flag(self.strict_match)
    }
}

impl Default for Settings {
    fn default() -> Self {
        SettingsFile::default().into()
    }
}

/*
 * On-disk shape of the settings. Every key is optional on read; a missing key
 * takes its default. The strict flag is stored as text: "yes" in any letter case
 * enables strict matching, anything else disables it.
 */
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct SettingsFile {
    folder_path: PathBuf,
    file_extension: String,
    use_strict_match: String,
}

impl Default for SettingsFile {
    fn default() -> Self {
        SettingsFile {
            folder_path: path_utils::default_catalog_folder(),
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
            use_strict_match: STRICT_MATCH_DISABLED.to_string(),
        }
    }
}

impl From<SettingsFile> for Settings {
    fn from(file: SettingsFile) -> Self {
        Settings {
            folder_path: file.folder_path,
            file_extension: file.file_extension,
            strict_match: file
                .use_strict_match
                .trim()
                .eq_ignore_ascii_case(STRICT_MATCH_ENABLED),
        }
    }
}

pub trait ConfigManagerOperations: Send + Sync {
    /*
     * Writes a configuration file with default values at `config_path` if no file
     * exists there yet. Returns `true` when a file was created.
     */
    fn ensure_defaults(&self, config_path: &Path) -> Result<bool>;

    fn load_settings(&self, config_path: &Path) -> Result<Settings>;
}

pub struct CoreConfigManager {}

impl CoreConfigManager {
    pub fn new() -> Self {
        CoreConfigManager {}
    }

    // Location used when the user does not name a configuration file.
    pub fn default_config_path(app_name: &str) -> Result<PathBuf> {
        path_utils::default_config_file_path(app_name).ok_or(ConfigError::NoConfigDirectory)
    }
}

impl Default for CoreConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManagerOperations for CoreConfigManager {
    fn ensure_defaults(&self, config_path: &Path) -> Result<bool> {
        if config_path.exists() {
            log::trace!("CoreConfigManager: Configuration {config_path:?} already exists.");
            return Ok(false);
        }
        if let Some(parent) = config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(config_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &SettingsFile::default())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        log::info!("CoreConfigManager: Wrote default configuration to {config_path:?}.");
        Ok(true)
    }

    fn load_settings(&self, config_path: &Path) -> Result<Settings> {
        log::trace!("CoreConfigManager: Loading settings from {config_path:?}");
        let file = File::open(config_path)?;
        let raw: SettingsFile = serde_json::from_reader(BufReader::new(file))?;
        let settings = Settings::from(raw);
        log::debug!("CoreConfigManager: Loaded settings {settings:?} from {config_path:?}.");
        Ok(settings)
    }
}
