/*
 * This module consolidates the core, platform-agnostic logic of the application.
 * It re-exports the key data structures and the abstractions used by the
 * presenter (`CatalogScannerOperations`, `ConfigManagerOperations`,
 * `FileOpenerOperations`) together with the pure fragment matcher and the
 * category slot table.
 */
pub mod categories;
pub mod config;
pub mod file_opener;
pub mod file_system;
pub mod matcher;
pub mod models;
pub mod path_utils;

// Re-export key structures
pub use models::{CATEGORY_SLOT_COUNT, CatalogEntry, FragmentList, SlotSelection};

pub use categories::CATEGORY_SLOTS;

// Re-export catalog scanning items
pub use file_system::{CatalogScannerOperations, CoreCatalogScanner};

pub use matcher::{base_name, filter_catalog};

// Re-export config related items
pub use config::{ConfigManagerOperations, CoreConfigManager, Settings};

pub use file_opener::{CoreFileOpener, FileOpenerOperations};
