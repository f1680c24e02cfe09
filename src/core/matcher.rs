/*
 * The sequential fragment matcher. Given an ordered fragment list and a catalog,
 * it keeps the entries whose base filename (the file name with the configured
 * extension stripped once) satisfies the active policy:
 *
 * - `Strict`: the base filename equals the concatenation of all non-empty fragments.
 * - `Ordered`: every non-empty fragment occurs in the base filename, in order and
 *   without overlap. The scan is a single leftmost-greedy pass: each fragment is
 *   taken at its first occurrence at or after the cursor and never reconsidered.
 *
 * All comparisons are case-sensitive. The matcher is pure and cannot fail.
 */
use super::models::{CatalogEntry, FragmentList};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    Strict,
    #[default]
    Ordered,
}

impl MatchPolicy {
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            MatchPolicy::Strict
        } else {
            MatchPolicy::Ordered
        }
    }
}

// Strips `extension` once, and only when it is a literal suffix of `file_name`.
pub fn base_name<'a>(file_name: &'a str, extension: &str) -> &'a str {
    if extension.is_empty() {
        return file_name;
    }
    file_name.strip_suffix(extension).unwrap_or(file_name)
}

pub fn matches_strict(fragments: &FragmentList, base: &str) -> bool {
    let target: String = fragments.non_empty().collect();
    base == target
}

pub fn matches_ordered(fragments: &FragmentList, base: &str) -> bool {
    let mut cursor = 0;
    for fragment in fragments.non_empty() {
        match base[cursor..].find(fragment) {
            Some(offset) => cursor += offset + fragment.len(),
            None => return false,
        }
    }
    true
}

pub fn base_name_matches(fragments: &FragmentList, base: &str, policy: MatchPolicy) -> bool {
    match policy {
        MatchPolicy::Strict => matches_strict(fragments, base),
        MatchPolicy::Ordered => matches_ordered(fragments, base),
    }
}

pub fn entry_matches(
    fragments: &FragmentList,
    entry: &CatalogEntry,
    extension: &str,
    policy: MatchPolicy,
) -> bool {
    base_name_matches(fragments, base_name(&entry.file_name, extension), policy)
}

/*
 * Filters `catalog` down to the entries matching `fragments` under `policy`.
 * The relative order of the catalog is preserved.
 */
pub fn filter_catalog(
    fragments: &FragmentList,
    catalog: Vec<CatalogEntry>,
    extension: &str,
    policy: MatchPolicy,
) -> Vec<CatalogEntry> {
    let total = catalog.len();
    let matches: Vec<CatalogEntry> = catalog
        .into_iter()
        .filter(|entry| entry_matches(fragments, entry, extension, policy))
        .collect();
    log::debug!(
        "Matcher: {} of {} entries match {:?} ({policy:?}).",
        matches.len(),
        total,
        fragments.as_slice()
    );
    matches
}
