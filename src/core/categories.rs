/*
 * The fixed category slots that make up the first part of an order code.
 * Each slot has a display label and the set of codes a user may pick for it.
 * Picking nothing (the empty string) is always allowed and leaves the slot
 * unconstrained during matching.
 */
use super::models::CATEGORY_SLOT_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySlot {
    pub label: &'static str,
    pub codes: &'static [&'static str],
}

pub const CATEGORY_SLOTS: [CategorySlot; CATEGORY_SLOT_COUNT] = [
    CategorySlot {
        label: "Engine Type",
        codes: &["FP2SS", "FP3SS", "xx"],
    },
    CategorySlot {
        label: "Engine Size",
        codes: &["63", "71", "80", "90", "100"],
    },
    CategorySlot {
        label: "Engine Size cont.",
        codes: &["B3", "B5", "B14A", "B5T1"],
    },
    CategorySlot {
        label: "Execution Type",
        codes: &["B5T1", "B3", "B5", "B14A"],
    },
    CategorySlot {
        label: "Cooling Type",
        codes: &["TENV", "TEFC", "TEWC"],
    },
];

impl CategorySlot {
    pub fn accepts(&self, value: &str) -> bool {
        let value = value.trim();
        value.is_empty() || self.codes.contains(&value)
    }
}

/*
 * Checks whether `value` is an allowed choice for the slot at `slot_index`.
 * Unknown slot indices accept nothing.
 */
pub fn slot_accepts(slot_index: usize, value: &str) -> bool {
    CATEGORY_SLOTS
        .get(slot_index)
        .is_some_and(|slot| slot.accepts(value))
}

// Resolves a slot choice typed in an interactive session: either a code or its 1-based position.
pub fn resolve_choice(slot_index: usize, input: &str) -> Option<String> {
    let slot = CATEGORY_SLOTS.get(slot_index)?;
    let input = input.trim();
    if slot_accepts(slot_index, input) {
        return Some(input.to_string());
    }
    input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| slot.codes.get(i))
        .map(|code| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_choice_is_always_accepted() {
        for i in 0..CATEGORY_SLOT_COUNT {
            assert!(slot_accepts(i, ""), "slot {i} should accept empty");
            assert!(slot_accepts(i, "   "));
        }
    }

    #[test]
    fn test_slot_accepts_known_codes_only() {
        assert!(slot_accepts(0, "FP3SS"));
        assert!(!slot_accepts(0, "fp3ss"));
        assert!(slot_accepts(4, "TEWC"));
        assert!(!slot_accepts(4, "B3"));
        assert!(!slot_accepts(CATEGORY_SLOT_COUNT, ""));
    }

    #[test]
    fn test_resolve_choice_by_code_or_position() {
        assert_eq!(resolve_choice(1, "80"), Some("80".to_string()));
        assert_eq!(resolve_choice(1, "2"), Some("71".to_string()));
        assert_eq!(resolve_choice(2, ""), Some(String::new()));
        assert_eq!(resolve_choice(2, "0"), None);
        assert_eq!(resolve_choice(2, "B99"), None);
    }
}
