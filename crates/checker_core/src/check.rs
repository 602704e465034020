use std::collections::HashSet;

/// Three-way outcome assigned to a checked input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Duplicate,
    QueryMarker,
    FragmentMarker,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    pub is_duplicate: bool,
    pub classification: Classification,
    /// Whether the value was inserted into the seen set by this check.
    pub tracked: bool,
}

/// Normalizes a value for seen-set membership per the case toggle.
pub fn normalize_value(text: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        text.to_owned()
    } else {
        text.to_lowercase()
    }
}

/// Checks one value against the page-lifetime seen set.
///
/// Empty and whitespace-only values reset to neutral and are never tracked.
/// Repeats are reported as duplicates without re-insertion; the marker
/// classifications run only on the first sighting of a value.
pub fn check_value(seen: &mut HashSet<String>, text: &str, case_sensitive: bool) -> CheckOutcome {
    if text.trim().is_empty() {
        return CheckOutcome {
            is_duplicate: false,
            classification: Classification::Neutral,
            tracked: false,
        };
    }

    let value = normalize_value(text, case_sensitive);
    if seen.contains(&value) {
        return CheckOutcome {
            is_duplicate: true,
            classification: Classification::Duplicate,
            tracked: false,
        };
    }

    let classification = if value.contains('?') {
        Classification::QueryMarker
    } else if value.contains('#') {
        Classification::FragmentMarker
    } else {
        Classification::Neutral
    };
    seen.insert(value);

    CheckOutcome {
        is_duplicate: false,
        classification,
        tracked: true,
    }
}
