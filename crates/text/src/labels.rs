//! Human-readable label handling: uniquefying display names and mapping
//! enum values to and from their labels.

use commons_core::{Error, Result};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Split a label into its base and an existing ` (n)` counter, if any.
fn split_counter(label: &str) -> (&str, Option<u32>) {
    if let Some(open) = label.rfind(" (") {
        if let Some(inner) = label[open + 2..].strip_suffix(')') {
            if !inner.is_empty() && inner.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(n) = inner.parse() {
                    return (&label[..open], Some(n));
                }
            }
        }
    }
    (label, None)
}

/// Make `candidate` unique against `taken` by appending ` (2)`, ` (3)`, …
///
/// A candidate that already carries a counter is incremented rather than
/// given a second one: "draft (2)" collides into "draft (3)", not
/// "draft (2) (2)".
pub fn uniquify(candidate: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(candidate) {
        return candidate.to_string();
    }
    let (base, counter) = split_counter(candidate);
    let mut n = counter.unwrap_or(1) + 1;
    loop {
        let attempt = format!("{base} ({n})");
        if !taken.contains(&attempt) {
            return attempt;
        }
        n += 1;
    }
}

/// Enum-to-label mapping for types with a fixed set of values.
///
/// Implementors list every value in `ALL`; `from_label` performs a
/// case-insensitive lookup over that list.
pub trait Labeled: Sized + Copy + PartialEq + 'static {
    /// Every value of the type, in display order.
    const ALL: &'static [Self];

    /// The human-readable label for this value.
    fn label(&self) -> &'static str;

    /// Find the value whose label matches, ignoring ASCII case and
    /// surrounding whitespace.
    fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.label().eq_ignore_ascii_case(wanted))
    }

    /// All labels, in display order.
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(Labeled::label).collect()
    }
}

/// Bidirectional value ↔ label map for dynamic registrations.
///
/// Both directions are unique: registering a second label for the same
/// value, or the same label (ignoring case) for a second value, is an error.
#[derive(Debug, Clone, Default)]
pub struct LabelMap<T> {
    by_value: HashMap<T, String>,
    by_label: HashMap<String, T>,
}

impl<T: Eq + Hash + Clone> LabelMap<T> {
    pub fn new() -> Self {
        Self {
            by_value: HashMap::new(),
            by_label: HashMap::new(),
        }
    }

    /// Register a value with its label.
    pub fn register(&mut self, value: T, label: impl Into<String>) -> Result<()> {
        let label = label.into();
        let key = label.to_ascii_lowercase();
        if self.by_value.contains_key(&value) {
            return Err(Error::label(label, "value is already registered"));
        }
        match self.by_label.entry(key) {
            Entry::Occupied(_) => Err(Error::label(label, "label is already registered")),
            Entry::Vacant(slot) => {
                slot.insert(value.clone());
                self.by_value.insert(value, label);
                Ok(())
            }
        }
    }

    /// The label registered for `value`.
    pub fn label_of(&self, value: &T) -> Option<&str> {
        self.by_value.get(value).map(String::as_str)
    }

    /// The value registered under `label`, ignoring ASCII case.
    pub fn value_of(&self, label: &str) -> Option<&T> {
        self.by_label.get(&label.trim().to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.by_value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_value.is_empty()
    }

    /// All registered labels, in arbitrary order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.by_value.values().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniquify_no_collision() {
        let taken = HashSet::new();
        assert_eq!(uniquify("report", &taken), "report");
    }

    #[test]
    fn test_uniquify_appends_counter() {
        let taken: HashSet<String> = ["report".to_string()].into();
        assert_eq!(uniquify("report", &taken), "report (2)");
    }

    #[test]
    fn test_uniquify_skips_taken_counters() {
        let taken: HashSet<String> = ["report".into(), "report (2)".into(), "report (3)".into()]
            .into_iter()
            .collect();
        assert_eq!(uniquify("report", &taken), "report (4)");
    }

    #[test]
    fn test_uniquify_increments_existing_counter() {
        let taken: HashSet<String> = ["draft (2)".into()].into_iter().collect();
        assert_eq!(uniquify("draft (2)", &taken), "draft (3)");
    }

    #[test]
    fn test_uniquify_counter_lookalikes_left_alone() {
        // "(x)" is not a counter, so a fresh one is appended
        let taken: HashSet<String> = ["note (x)".into()].into_iter().collect();
        assert_eq!(uniquify("note (x)", &taken), "note (x) (2)");
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Severity {
        Low,
        High,
    }

    impl Labeled for Severity {
        const ALL: &'static [Self] = &[Severity::Low, Severity::High];

        fn label(&self) -> &'static str {
            match self {
                Severity::Low => "Low",
                Severity::High => "High",
            }
        }
    }

    #[test]
    fn test_labeled_round_trip() {
        assert_eq!(Severity::from_label("high"), Some(Severity::High));
        assert_eq!(Severity::from_label("  LOW "), Some(Severity::Low));
        assert_eq!(Severity::from_label("medium"), None);
        assert_eq!(Severity::labels(), vec!["Low", "High"]);
    }

    #[test]
    fn test_label_map() {
        let mut map = LabelMap::new();
        map.register(1u32, "One").unwrap();
        map.register(2u32, "Two").unwrap();

        assert_eq!(map.label_of(&1), Some("One"));
        assert_eq!(map.value_of("one"), Some(&1));
        assert_eq!(map.value_of(" TWO "), Some(&2));
        assert_eq!(map.len(), 2);

        // Duplicate label (case-insensitive) and duplicate value both fail
        assert!(map.register(3u32, "ONE").is_err());
        assert!(map.register(1u32, "Uno").is_err());
        assert_eq!(map.len(), 2);
    }
}
