/*
 * This module provides the application logic layer, centered around
 * `SearchAppLogic` which acts as the Presenter/Controller. It also includes
 * `MainWindowUiState` for the UI-specific state of the search window.
 * Unit tests for `SearchAppLogic` are in `handler_tests.rs`.
 */
pub mod handler;
pub mod main_window_ui_state;
pub mod ui_constants;

#[cfg(test)]
mod handler_tests;

pub use handler::SearchAppLogic;
pub use main_window_ui_state::MainWindowUiState;
