/*
 * Defines the user-visible texts shared by the presenter and its tests:
 * message box titles and the fixed message bodies.
 */

pub const APP_NAME: &str = "OrderCodeFinder";

pub const TITLE_SEARCH_ERROR: &str = "Search Error";
pub const TITLE_NO_MATCH: &str = "No Match";
pub const TITLE_OPEN_ERROR: &str = "Open Error";
pub const TITLE_ERROR: &str = "Error";

pub const MSG_NO_MATCH: &str = "No exact match found.";
