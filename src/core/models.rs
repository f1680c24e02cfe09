use std::path::{Path, PathBuf};

// Number of fixed category slots offered by the front end, ahead of the free-text fragment.
pub const CATEGORY_SLOT_COUNT: usize = 5;

/*
 * A file discovered by the catalog scanner.
 * The path is the full path as produced by the directory walk; `file_name` is its
 * final component, guaranteed to be valid UTF-8 and to end with the configured extension.
 * Entries are transient: a new set is produced for every search.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub path: PathBuf,
    pub file_name: String,
}

impl CatalogEntry {
    pub fn new(path: PathBuf, file_name: String) -> Self {
        CatalogEntry { path, file_name }
    }

    /*
     * Builds an entry from a path alone, taking the file name from its last component.
     * Returns `None` when the path has no file name or the name is not valid UTF-8.
     */
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?.to_string();
        Some(CatalogEntry::new(path.to_path_buf(), file_name))
    }
}

/*
 * The selections made in the five category slots plus the free-text input,
 * exactly as the user supplied them (untrimmed, possibly empty).
 */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotSelection {
    pub slots: [String; CATEGORY_SLOT_COUNT],
    pub free_text: String,
}

impl SlotSelection {
    pub fn new(slots: [String; CATEGORY_SLOT_COUNT], free_text: String) -> Self {
        SlotSelection { slots, free_text }
    }
}

/*
 * An ordered list of text fragments used as matching constraints.
 * Order matters for ordered (non-strict) matching. Empty fragments are kept so
 * that the list mirrors the slot layout, but they never constrain a match.
 */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentList {
    fragments: Vec<String>,
}

impl FragmentList {
    pub fn new(fragments: Vec<String>) -> Self {
        FragmentList { fragments }
    }

    // Slots first, in slot order, then the free text. Every fragment is trimmed.
    pub fn from_selection(selection: &SlotSelection) -> Self {
        let fragments = selection
            .slots
            .iter()
            .chain(std::iter::once(&selection.free_text))
            .map(|s| s.trim().to_string())
            .collect();
        FragmentList { fragments }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.fragments
    }

    pub fn non_empty(&self) -> impl Iterator<Item = &str> {
        self.fragments
            .iter()
            .map(String::as_str)
            .filter(|f| !f.is_empty())
    }

    pub fn is_unconstrained(&self) -> bool {
        self.non_empty().next().is_none()
    }
}

impl<S: Into<String>> FromIterator<S> for FragmentList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        FragmentList::new(iter.into_iter().map(Into::into).collect())
    }
}
