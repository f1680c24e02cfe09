/*
 * This module provides utility functions for locating the application's
 * directories: where its configuration file lives by default, and which
 * folder is searched when no configuration says otherwise.
 */
use directories::{ProjectDirs, UserDirs};
use std::fs;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

// Subfolder of the user's documents directory searched by default.
const DEFAULT_CATALOG_SUBFOLDER: &str = "codes";

/*
 * Retrieves the application's local configuration directory, creating it if
 * necessary. The path is derived without an organization qualifier, directly
 * under the user's local application data directory (e.g., AppData/Local on
 * Windows, ~/.config on Linux).
 *
 * Returns `None` if no home directory can be determined or the directory
 * cannot be created.
 */
pub fn get_base_app_config_local_dir(app_name: &str) -> Option<PathBuf> {
    log::trace!("PathUtils: Attempting to get base app config local dir for '{app_name}'");
    let proj_dirs = ProjectDirs::from("", "", app_name)?;
    let config_path = proj_dirs.config_local_dir();
    if !config_path.exists() {
        if let Err(e) = fs::create_dir_all(config_path) {
            log::error!(
                "PathUtils: Failed to create base app config directory {config_path:?}: {e}"
            );
            return None;
        }
        log::debug!("PathUtils: Created base app config directory: {config_path:?}");
    }
    Some(config_path.to_path_buf())
}

pub fn default_config_file_path(app_name: &str) -> Option<PathBuf> {
    get_base_app_config_local_dir(app_name).map(|dir| dir.join(CONFIG_FILE_NAME))
}

/*
 * The folder searched when the configuration does not name one: `codes` inside
 * the user's documents directory, or `codes` relative to the working directory
 * when the platform reports no documents directory.
 */
pub fn default_catalog_folder() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(|d| d.join(DEFAULT_CATALOG_SUBFOLDER)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_SUBFOLDER))
}
