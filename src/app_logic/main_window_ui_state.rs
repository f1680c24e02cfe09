/*
 * This module defines the MainWindowUiState struct.
 * MainWindowUiState holds the presentation state of the search window: the
 * entries currently listed as results, so that activating a row resolves to
 * exactly the file that was shown rather than to another file with the same name.
 */
use crate::core::{CatalogEntry, Settings, base_name};

#[derive(Debug, Default)]
pub struct MainWindowUiState {
    /* Entries behind the rows of the result list, in display order. */
    results: Vec<CatalogEntry>,
}

impl MainWindowUiState {
    pub fn new() -> Self {
        log::debug!("MainWindowUiState::new called");
        MainWindowUiState::default()
    }

    pub fn set_results(&mut self, results: Vec<CatalogEntry>) {
        self.results = results;
    }

    #[cfg(test)]
    pub fn results(&self) -> &[CatalogEntry] {
        &self.results
    }

    pub fn result_at(&self, index: usize) -> Option<&CatalogEntry> {
        self.results.get(index)
    }

    // Row texts for the result list: base filenames with the extension stripped.
    pub fn result_display_names(&self, extension: &str) -> Vec<String> {
        self.results
            .iter()
            .map(|entry| base_name(&entry.file_name, extension).to_string())
            .collect()
    }

    pub fn compose_status_text(settings: &Settings) -> String {
        format!(
            "Folder: {} | File Type: {}",
            settings.folder_path.display(),
            settings.file_extension
        )
    }
}
