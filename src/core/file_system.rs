use super::models::CatalogEntry;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/*
 * This module provides the catalog scanner: a read-only recursive walk of the
 * configured root directory that collects every file whose name ends with the
 * configured extension. It defines errors specific to scanning, a trait
 * `CatalogScannerOperations` for abstracting the walk, and a concrete
 * implementation `CoreCatalogScanner`. Nothing is cached between scans.
 */

/*
 * Defines custom error types for catalog scanning.
 * Only failures that make the whole scan meaningless are reported here; problems
 * with individual entries below the root are logged and skipped.
 */
#[derive(Debug)]
pub enum CatalogError {
    Io(io::Error),
    InvalidRoot(PathBuf),
}

impl From<io::Error> for CatalogError {
    fn from(err: io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "I/O error: {e}"),
            CatalogError::InvalidRoot(p) => {
                write!(f, "Folder {} does not exist or is not a directory", p.display())
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/*
 * Defines the operations for building the catalog of candidate documents.
 * Implementations visit `root_path` and all of its subdirectories and return every
 * file whose name ends with `extension` (a literal, case-sensitive suffix, not a glob).
 * Callers must not depend on the order of the returned entries for correctness.
 */
pub trait CatalogScannerOperations: Send + Sync {
    fn scan_catalog(&self, root_path: &Path, extension: &str) -> Result<Vec<CatalogEntry>>;
}

/*
 * The core implementation of `CatalogScannerOperations`, backed by `walkdir`.
 * Symbolic links are not followed, so a link cycle cannot make the walk run forever.
 */
pub struct CoreCatalogScanner {}

impl CoreCatalogScanner {
    pub fn new() -> Self {
        CoreCatalogScanner {}
    }
}

impl Default for CoreCatalogScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogScannerOperations for CoreCatalogScanner {
    fn scan_catalog(&self, root_path: &Path, extension: &str) -> Result<Vec<CatalogEntry>> {
        // Catalog paths are absolute even when the configured root is relative.
        let root = std::path::absolute(root_path)?;
        if !root.is_dir() {
            log::warn!("CatalogScanner: Root {root:?} is not a readable directory.");
            return Err(CatalogError::InvalidRoot(root_path.to_path_buf()));
        }
        log::debug!("CatalogScanner: Scanning {root:?} for files ending in '{extension}'.");

        // The root itself was verified above; make sure it can actually be listed.
        std::fs::read_dir(&root)?;

        let mut entries = Vec::new();
        for entry_result in WalkDir::new(&root).follow_links(false) {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("CatalogScanner: Skipping unreadable entry: {err}");
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }

            let Some(catalog_entry) = CatalogEntry::from_path(entry.path()) else {
                log::warn!(
                    "CatalogScanner: Skipping {:?}, its name is not valid UTF-8.",
                    entry.path()
                );
                continue;
            };
            if !catalog_entry.file_name.ends_with(extension) {
                continue;
            }

            log::trace!("CatalogScanner: Catalog entry {:?}", catalog_entry.path);
            entries.push(catalog_entry);
        }

        log::debug!(
            "CatalogScanner: Scan complete. Found {} entries under {:?}.",
            entries.len(),
            root
        );
        Ok(entries)
    }
}
