use crate::app_logic::{MainWindowUiState, ui_constants};
use crate::core::{
    CatalogEntry, CatalogScannerOperations, FileOpenerOperations, FragmentList, Settings,
    base_name, filter_catalog,
};
use crate::platform_layer::{AppEvent, MessageSeverity, PlatformCommand, PlatformEventHandler};
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Arc;

/*
 * Manages the application state and UI logic in a platform-agnostic manner.
 * It processes UI events received from the platform layer and queues commands
 * to update the UI. Core work is delegated to a `CatalogScannerOperations`
 * (building the catalog on every search) and a `FileOpenerOperations`
 * (launching a confirmed document). Every core failure is turned into a
 * message box here; none escapes to the platform's event loop.
 */
pub struct SearchAppLogic {
    settings: Settings,
    scanner: Arc<dyn CatalogScannerOperations>,
    opener: Arc<dyn FileOpenerOperations>,
    pub(crate) ui_state: MainWindowUiState,
    synchronous_command_queue: VecDeque<PlatformCommand>,
}

impl SearchAppLogic {
    pub fn new(
        settings: Settings,
        scanner: Arc<dyn CatalogScannerOperations>,
        opener: Arc<dyn FileOpenerOperations>,
    ) -> Self {
        SearchAppLogic {
            settings,
            scanner,
            opener,
            ui_state: MainWindowUiState::new(),
            synchronous_command_queue: VecDeque::new(),
        }
    }

    fn enqueue(&mut self, command: PlatformCommand) {
        self.synchronous_command_queue.push_back(command);
    }

    fn enqueue_message(&mut self, title: &str, message: String, severity: MessageSeverity) {
        self.enqueue(PlatformCommand::ShowMessageBox {
            title: title.to_string(),
            message,
            severity,
        });
    }

    fn handle_main_window_ready(&mut self) {
        let text = MainWindowUiState::compose_status_text(&self.settings);
        self.enqueue(PlatformCommand::UpdateStatusText { text });
    }

    /*
     * Scans the configured folder and filters it with the active match policy.
     * A scan failure is reported and treated as an empty catalog, so the search
     * still completes and ends in "No Match".
     */
    fn search(&mut self, fragments: &FragmentList) -> Vec<CatalogEntry> {
        let catalog = match self
            .scanner
            .scan_catalog(&self.settings.folder_path, &self.settings.file_extension)
        {
            Ok(catalog) => catalog,
            Err(e) => {
                log::warn!(
                    "AppLogic: Scan of {:?} failed: {e}",
                    self.settings.folder_path
                );
                self.enqueue_message(
                    ui_constants::TITLE_SEARCH_ERROR,
                    format!("An error occurred while searching: {e}"),
                    MessageSeverity::Warning,
                );
                Vec::new()
            }
        };
        filter_catalog(
            fragments,
            catalog,
            &self.settings.file_extension,
            self.settings.match_policy(),
        )
    }

    fn handle_search_requested(&mut self, fragments: FragmentList) {
        log::debug!("AppLogic: Search requested with {:?}", fragments.as_slice());
        if fragments.is_unconstrained() {
            log::debug!("AppLogic: Search requested without any fragment.");
        }
        let matches = self.search(&fragments);
        self.ui_state.set_results(matches);

        let items = self
            .ui_state
            .result_display_names(&self.settings.file_extension);
        if items.is_empty() {
            self.enqueue(PlatformCommand::ClearResults);
            self.enqueue_message(
                ui_constants::TITLE_NO_MATCH,
                ui_constants::MSG_NO_MATCH.to_string(),
                MessageSeverity::Information,
            );
        } else {
            log::info!("AppLogic: Search found {} matching files.", items.len());
            self.enqueue(PlatformCommand::ShowSearchResults { items });
        }
    }

    fn handle_result_activated(&mut self, index: usize) {
        let Some(entry) = self.ui_state.result_at(index) else {
            log::warn!("AppLogic: Result row {index} activated, but no such row exists.");
            self.enqueue_message(
                ui_constants::TITLE_ERROR,
                format!("Could not open file: there is no result number {}.", index + 1),
                MessageSeverity::Error,
            );
            return;
        };
        let path = entry.path.clone();
        let display_name = base_name(&entry.file_name, &self.settings.file_extension).to_string();
        self.enqueue(PlatformCommand::ShowOpenConfirmation { path, display_name });
    }

    fn handle_open_confirmation(&mut self, path: &Path, confirmed: bool) {
        if !confirmed {
            log::debug!("AppLogic: User declined to open {path:?}.");
            return;
        }
        if let Err(e) = self.opener.open(path) {
            self.enqueue_message(
                ui_constants::TITLE_OPEN_ERROR,
                format!("Failed to open file: {e}"),
                MessageSeverity::Error,
            );
        }
    }
}

impl PlatformEventHandler for SearchAppLogic {
    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::MainWindowReady => self.handle_main_window_ready(),
            AppEvent::SearchRequested { fragments } => self.handle_search_requested(fragments),
            AppEvent::ResultActivated { index } => self.handle_result_activated(index),
            AppEvent::OpenConfirmationCompleted { path, confirmed } => {
                self.handle_open_confirmation(&path, confirmed)
            }
        }
    }

    fn try_dequeue_command(&mut self) -> Option<PlatformCommand> {
        self.synchronous_command_queue.pop_front()
    }
}
