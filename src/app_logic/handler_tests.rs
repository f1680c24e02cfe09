use super::handler::*;
use crate::app_logic::ui_constants;

use crate::core::{
    CatalogEntry, CatalogScannerOperations, CoreCatalogScanner,
    FileOpenerOperations, FragmentList, Settings,
};
use crate::core::file_opener::OpenError;
use crate::core::file_system::CatalogError;
use crate::platform_layer::{AppEvent, MessageSeverity, PlatformCommand, PlatformEventHandler};

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

/*
 * This module contains unit tests for `SearchAppLogic` from the `super::handler` module.
 * It utilizes mock implementations of the core dependencies (`CatalogScannerOperations`,
 * `FileOpenerOperations`) to isolate the presenter's behavior, plus a few tests against
 * the real scanner on a temporary directory. Tests focus on event handling, the
 * commands queued in response, and error paths.
 */

// --- Mock Structures (CatalogScanner, FileOpener) ---
struct MockCatalogScanner {
    scan_result: Mutex<Result<Vec<CatalogEntry>, CatalogError>>,
    scan_calls: Mutex<Vec<(PathBuf, String)>>,
}

impl MockCatalogScanner {
    fn new(entries: Vec<CatalogEntry>) -> Self {
        MockCatalogScanner {
            scan_result: Mutex::new(Ok(entries)),
            scan_calls: Mutex::new(Vec::new()),
        }
    }

    fn set_scan_result(&self, result: Result<Vec<CatalogEntry>, CatalogError>) {
        *self.scan_result.lock().unwrap() = result;
    }

    fn get_scan_calls(&self) -> Vec<(PathBuf, String)> {
        self.scan_calls.lock().unwrap().clone()
    }
}

impl CatalogScannerOperations for MockCatalogScanner {
    fn scan_catalog(
        &self,
        root_path: &Path,
        extension: &str,
    ) -> Result<Vec<CatalogEntry>, CatalogError> {
        self.scan_calls
            .lock()
            .unwrap()
            .push((root_path.to_path_buf(), extension.to_string()));
        match &*self.scan_result.lock().unwrap() {
            Ok(entries) => Ok(entries.clone()),
            Err(CatalogError::InvalidRoot(p)) => Err(CatalogError::InvalidRoot(p.clone())),
            Err(CatalogError::Io(e)) => Err(CatalogError::Io(io::Error::new(
                e.kind(),
                "mocked io error",
            ))),
        }
    }
}

struct MockFileOpener {
    fail: Mutex<bool>,
    opened: Mutex<Vec<PathBuf>>,
}

impl MockFileOpener {
    fn new() -> Self {
        MockFileOpener {
            fail: Mutex::new(false),
            opened: Mutex::new(Vec::new()),
        }
    }

    fn set_fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    fn get_opened(&self) -> Vec<PathBuf> {
        self.opened.lock().unwrap().clone()
    }
}

impl FileOpenerOperations for MockFileOpener {
    fn open(&self, path: &Path) -> Result<(), OpenError> {
        if *self.fail.lock().unwrap() {
            return Err(OpenError::NotFound(path.to_path_buf()));
        }
        self.opened.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}
// --- End Mocks ---

fn test_settings(strict_match: bool) -> Settings {
    Settings {
        folder_path: PathBuf::from("/mock/codes"),
        file_extension: ".txt".to_string(),
        strict_match,
    }
}

fn entry(relative: &str) -> CatalogEntry {
    CatalogEntry::from_path(&Path::new("/mock/codes").join(relative)).unwrap()
}

fn sample_catalog() -> Vec<CatalogEntry> {
    vec![
        entry("6314-FP3SS-B14B-TENV.txt"),
        entry("2023/6314-FP2SS-B14B-TENV.txt"),
    ]
}

fn fragments(parts: &[&str]) -> FragmentList {
    parts.iter().copied().collect()
}

fn setup_logic(
    strict_match: bool,
    catalog: Vec<CatalogEntry>,
) -> (SearchAppLogic, Arc<MockCatalogScanner>, Arc<MockFileOpener>) {
    let scanner = Arc::new(MockCatalogScanner::new(catalog));
    let opener = Arc::new(MockFileOpener::new());
    let logic = SearchAppLogic::new(test_settings(strict_match), scanner.clone(), opener.clone());
    (logic, scanner, opener)
}

fn drain_commands(logic: &mut SearchAppLogic) -> Vec<PlatformCommand> {
    let mut commands = Vec::new();
    while let Some(cmd) = logic.try_dequeue_command() {
        commands.push(cmd);
    }
    commands
}

fn no_match_commands() -> Vec<PlatformCommand> {
    vec![
        PlatformCommand::ClearResults,
        PlatformCommand::ShowMessageBox {
            title: ui_constants::TITLE_NO_MATCH.to_string(),
            message: ui_constants::MSG_NO_MATCH.to_string(),
            severity: MessageSeverity::Information,
        },
    ]
}

#[test]
fn test_main_window_ready_shows_status_text() {
    let (mut logic, _, _) = setup_logic(false, Vec::new());

    logic.handle_event(AppEvent::MainWindowReady);

    assert_eq!(
        drain_commands(&mut logic),
        vec![PlatformCommand::UpdateStatusText {
            text: "Folder: /mock/codes | File Type: .txt".to_string()
        }]
    );
}

#[test]
fn test_ordered_search_lists_matching_base_names() {
    let (mut logic, scanner, _) = setup_logic(false, sample_catalog());

    logic.handle_event(AppEvent::SearchRequested {
        fragments: fragments(&["FP3SS", "", "B14B", "", "TENV", ""]),
    });

    assert_eq!(
        drain_commands(&mut logic),
        vec![PlatformCommand::ShowSearchResults {
            items: vec!["6314-FP3SS-B14B-TENV".to_string()]
        }]
    );
    assert_eq!(
        scanner.get_scan_calls(),
        vec![(PathBuf::from("/mock/codes"), ".txt".to_string())]
    );
}

#[test]
fn test_unconstrained_search_lists_everything_in_scan_order() {
    let (mut logic, _, _) = setup_logic(false, sample_catalog());

    logic.handle_event(AppEvent::SearchRequested {
        fragments: fragments(&["", "", "", "", "", ""]),
    });

    assert_eq!(
        drain_commands(&mut logic),
        vec![PlatformCommand::ShowSearchResults {
            items: vec![
                "6314-FP3SS-B14B-TENV".to_string(),
                "6314-FP2SS-B14B-TENV".to_string()
            ]
        }]
    );
}

#[test]
fn test_strict_search_without_exact_name_reports_no_match() {
    let (mut logic, _, _) = setup_logic(true, sample_catalog());

    logic.handle_event(AppEvent::SearchRequested {
        fragments: fragments(&["FP3SS", "6314", "", "B14B", "TENV", ""]),
    });

    assert_eq!(drain_commands(&mut logic), no_match_commands());
    assert!(logic.ui_state.results().is_empty());
}

#[test]
fn test_strict_search_with_exact_concatenation_matches() {
    let (mut logic, _, _) = setup_logic(true, sample_catalog());

    logic.handle_event(AppEvent::SearchRequested {
        fragments: fragments(&["6314-", "FP2SS", "-B14B", "", "-TENV", ""]),
    });

    assert_eq!(
        drain_commands(&mut logic),
        vec![PlatformCommand::ShowSearchResults {
            items: vec!["6314-FP2SS-B14B-TENV".to_string()]
        }]
    );
}

#[test]
fn test_scan_failure_reports_and_degrades_to_no_match() {
    let (mut logic, scanner, _) = setup_logic(false, Vec::new());
    scanner.set_scan_result(Err(CatalogError::InvalidRoot(PathBuf::from("/mock/codes"))));

    logic.handle_event(AppEvent::SearchRequested {
        fragments: fragments(&["FP3SS"]),
    });

    let commands = drain_commands(&mut logic);
    assert_eq!(commands.len(), 3, "Got: {commands:?}");
    match &commands[0] {
        PlatformCommand::ShowMessageBox {
            title, severity, ..
        } => {
            assert_eq!(title, ui_constants::TITLE_SEARCH_ERROR);
            assert_eq!(*severity, MessageSeverity::Warning);
        }
        other => panic!("Expected a search error message box, got {other:?}"),
    }
    assert_eq!(&commands[1..], no_match_commands().as_slice());
}

#[test]
fn test_new_search_replaces_previous_results() {
    let (mut logic, _, _) = setup_logic(false, sample_catalog());

    logic.handle_event(AppEvent::SearchRequested {
        fragments: fragments(&["FP2SS"]),
    });
    drain_commands(&mut logic);
    assert_eq!(logic.ui_state.results().len(), 1);

    logic.handle_event(AppEvent::SearchRequested {
        fragments: fragments(&["XYZ"]),
    });
    drain_commands(&mut logic);
    assert!(logic.ui_state.results().is_empty());
}

#[test]
fn test_result_activation_asks_to_open_exact_listed_path() {
    let (mut logic, _, _) = setup_logic(false, sample_catalog());
    logic.handle_event(AppEvent::SearchRequested {
        fragments: fragments(&["6314"]),
    });
    drain_commands(&mut logic);

    logic.handle_event(AppEvent::ResultActivated { index: 1 });

    assert_eq!(
        drain_commands(&mut logic),
        vec![PlatformCommand::ShowOpenConfirmation {
            path: PathBuf::from("/mock/codes/2023/6314-FP2SS-B14B-TENV.txt"),
            display_name: "6314-FP2SS-B14B-TENV".to_string(),
        }]
    );
}

#[test]
fn test_result_activation_out_of_range_reports_error() {
    let (mut logic, _, opener) = setup_logic(false, sample_catalog());

    logic.handle_event(AppEvent::ResultActivated { index: 0 });

    let commands = drain_commands(&mut logic);
    assert!(matches!(
        commands.as_slice(),
        [PlatformCommand::ShowMessageBox {
            severity: MessageSeverity::Error,
            ..
        }]
    ));
    assert!(opener.get_opened().is_empty());
}

#[test]
fn test_confirmed_open_calls_opener() {
    let (mut logic, _, opener) = setup_logic(false, sample_catalog());
    let path = PathBuf::from("/mock/codes/6314-FP3SS-B14B-TENV.txt");

    logic.handle_event(AppEvent::OpenConfirmationCompleted {
        path: path.clone(),
        confirmed: true,
    });

    assert!(drain_commands(&mut logic).is_empty());
    assert_eq!(opener.get_opened(), vec![path]);
}

#[test]
fn test_declined_open_does_nothing() {
    let (mut logic, _, opener) = setup_logic(false, sample_catalog());

    logic.handle_event(AppEvent::OpenConfirmationCompleted {
        path: PathBuf::from("/mock/codes/6314-FP3SS-B14B-TENV.txt"),
        confirmed: false,
    });

    assert!(drain_commands(&mut logic).is_empty());
    assert!(opener.get_opened().is_empty());
}

#[test]
fn test_open_failure_reports_error_and_keeps_results() {
    let (mut logic, _, opener) = setup_logic(false, sample_catalog());
    opener.set_fail(true);
    logic.handle_event(AppEvent::SearchRequested {
        fragments: fragments(&["6314"]),
    });
    drain_commands(&mut logic);

    logic.handle_event(AppEvent::OpenConfirmationCompleted {
        path: PathBuf::from("/mock/codes/6314-FP3SS-B14B-TENV.txt"),
        confirmed: true,
    });

    let commands = drain_commands(&mut logic);
    match commands.as_slice() {
        [PlatformCommand::ShowMessageBox {
            title,
            message,
            severity: MessageSeverity::Error,
        }] => {
            assert_eq!(title, ui_constants::TITLE_OPEN_ERROR);
            assert!(message.starts_with("Failed to open file:"));
        }
        other => panic!("Expected one open error message box, got {other:?}"),
    }
    assert_eq!(logic.ui_state.results().len(), 2);
}

// --- Tests against the real scanner ---

#[test]
fn test_search_with_real_scanner_on_temp_dir() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("sub")).unwrap();
    File::create(dir.path().join("6314-FP3SS-B14B-TENV.txt")).unwrap();
    File::create(dir.path().join("sub/7100-FP3SS-B3-TEFC.txt")).unwrap();
    File::create(dir.path().join("sub/6314-FP3SS-B14B-TENV.md")).unwrap();

    let settings = Settings {
        folder_path: dir.path().to_path_buf(),
        file_extension: ".txt".to_string(),
        strict_match: false,
    };
    let mut logic = SearchAppLogic::new(
        settings,
        Arc::new(CoreCatalogScanner::new()),
        Arc::new(MockFileOpener::new()),
    );

    logic.handle_event(AppEvent::SearchRequested {
        fragments: fragments(&["FP3SS", "", "", "", "TE", ""]),
    });

    match drain_commands(&mut logic).as_slice() {
        [PlatformCommand::ShowSearchResults { items }] => {
            let mut items = items.clone();
            items.sort();
            assert_eq!(items, vec!["6314-FP3SS-B14B-TENV", "7100-FP3SS-B3-TEFC"]);
        }
        other => panic!("Expected search results, got {other:?}"),
    }
}

#[test]
fn test_missing_root_with_real_scanner_reports_no_match() {
    let dir = tempdir().unwrap();
    let settings = Settings {
        folder_path: dir.path().join("missing"),
        file_extension: ".txt".to_string(),
        strict_match: false,
    };
    let mut logic = SearchAppLogic::new(
        settings,
        Arc::new(CoreCatalogScanner::new()),
        Arc::new(MockFileOpener::new()),
    );

    logic.handle_event(AppEvent::SearchRequested {
        fragments: fragments(&["", "", "", "", "", ""]),
    });

    let commands = drain_commands(&mut logic);
    assert_eq!(commands.len(), 3);
    assert_eq!(&commands[1..], no_match_commands().as_slice());
}
