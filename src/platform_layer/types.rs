/*
 * This module defines the data types used for communication between the
 * application logic and the platform layer: platform-agnostic events
 * (`AppEvent`), commands for the platform layer (`PlatformCommand`), severity
 * levels for messages (`MessageSeverity`), and the `PlatformEventHandler`
 * trait that the application logic must implement.
 */

use crate::core::FragmentList;
use std::path::PathBuf;

// --- Events from Platform to App Logic ---

/*
 * Represents user interactions, translated by the platform layer into
 * platform-agnostic form and sent to the application logic for handling.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // Signals that the front end is ready to show its initial state.
    MainWindowReady,
    // The user pressed Search (or Enter) with the given fragments.
    SearchRequested {
        fragments: FragmentList,
    },
    // The user picked a row of the result list. The index is 0-based into the last results shown.
    ResultActivated {
        index: usize,
    },
    // Signals the answer to a `ShowOpenConfirmation` prompt.
    OpenConfirmationCompleted {
        path: PathBuf,
        confirmed: bool,
    },
}

// Defines the severity of a message to be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MessageSeverity {
    Information,
    Warning,
    Error,
}

// Represents platform-agnostic commands sent from the application logic to the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCommand {
    // Replaces the result list with these rows, in order.
    ShowSearchResults {
        items: Vec<String>,
    },
    ClearResults,
    ShowMessageBox {
        title: String,
        message: String,
        severity: MessageSeverity,
    },
    // Asks the user whether to open `path`. Answered with `AppEvent::OpenConfirmationCompleted`.
    ShowOpenConfirmation {
        path: PathBuf,
        display_name: String,
    },
    UpdateStatusText {
        text: String,
    },
}

// --- Trait for App Logic to Handle Events ---

// A trait to be implemented by the application logic layer to handle UI events.
pub trait PlatformEventHandler {
    // Called by the platform layer for every event. The implementor should handle
    // the event and enqueue `PlatformCommand`s for the platform layer to execute.
    fn handle_event(&mut self, event: AppEvent);

    // Attempts to dequeue a single `PlatformCommand` from the internal queue.
    fn try_dequeue_command(&mut self) -> Option<PlatformCommand>;
}
