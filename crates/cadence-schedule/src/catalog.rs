//! Named schedule presets.
//!
//! The preset picker and exact-match recognition both read the same static
//! table, so a preset shown in the picker is always recognized when typed.

use serde::Serialize;

/// A named schedule with a hand-written description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetEntry {
    /// Label shown in the preset picker.
    pub label: &'static str,
    /// Canonical schedule string, stored exactly as written.
    pub cron: &'static str,
    /// Curated description shown instead of a synthesized one.
    pub description: &'static str,
}

/// Built-in presets, in picker order.
pub static BUILTIN_PRESETS: &[PresetEntry] = &[
    PresetEntry {
        label: "Every hour",
        cron: "0 * * * *",
        description: "At minute 0 of every hour",
    },
    PresetEntry {
        label: "Every 6 hours",
        cron: "0 */6 * * *",
        description: "Every 6 hours at minute 0",
    },
    PresetEntry {
        label: "Daily at 03:00",
        cron: "0 3 * * *",
        description: "Every day at 3:00 AM",
    },
    PresetEntry {
        label: "Daily at midnight",
        cron: "0 0 * * *",
        description: "Every day at midnight",
    },
    PresetEntry {
        label: "Twice daily",
        cron: "0 3,15 * * *",
        description: "Every day at 3:00 AM and 3:00 PM",
    },
    PresetEntry {
        label: "Weekly (Sun 03:00)",
        cron: "0 3 * * 0",
        description: "Every Sunday at 3:00 AM",
    },
    PresetEntry {
        label: "Weekly (Mon 03:00)",
        cron: "0 3 * * 1",
        description: "Every Monday at 3:00 AM",
    },
    PresetEntry {
        label: "Monthly (1st, 03:00)",
        cron: "0 3 1 * *",
        description: "1st of every month at 3:00 AM",
    },
    PresetEntry {
        label: "Quarterly",
        cron: "0 3 1 */3 *",
        description: "1st of every 3rd month at 3:00 AM",
    },
];

/// An immutable, ordered preset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    entries: &'static [PresetEntry],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Wrap a static preset table.
    pub const fn new(entries: &'static [PresetEntry]) -> Self {
        Self { entries }
    }

    /// The built-in preset table.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_PRESETS)
    }

    /// All presets, in picker order.
    pub fn entries(&self) -> &'static [PresetEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the preset whose schedule string equals `cron` byte-for-byte.
    ///
    /// No normalization happens: `00 03 * * *` does not match `0 3 * * *`.
    pub fn find(&self, cron: &str) -> Option<&'static PresetEntry> {
        self.entries.iter().find(|entry| entry.cron == cron)
    }

    pub fn contains(&self, cron: &str) -> bool {
        self.find(cron).is_some()
    }

    /// Find a preset by its picker label.
    pub fn find_by_label(&self, label: &str) -> Option<&'static PresetEntry> {
        self.entries.iter().find(|entry| entry.label == label)
    }

    /// Preset at a zero-based picker position.
    pub fn get(&self, index: usize) -> Option<&'static PresetEntry> {
        self.entries.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_covers_common_cadences() {
        let catalog = Catalog::builtin();
        for cron in [
            "0 * * * *",
            "0 */6 * * *",
            "0 3 * * *",
            "0 0 * * *",
            "0 3,15 * * *",
            "0 3 * * 0",
            "0 3 * * 1",
            "0 3 1 * *",
            "0 3 1 */3 *",
        ] {
            assert!(catalog.contains(cron), "missing preset for {cron}");
        }
    }

    #[test]
    fn test_labels_and_schedules_are_unique() {
        let labels: HashSet<_> = BUILTIN_PRESETS.iter().map(|p| p.label).collect();
        let crons: HashSet<_> = BUILTIN_PRESETS.iter().map(|p| p.cron).collect();
        assert_eq!(labels.len(), BUILTIN_PRESETS.len());
        assert_eq!(crons.len(), BUILTIN_PRESETS.len());
    }

    #[test]
    fn test_find_is_exact() {
        let catalog = Catalog::builtin();
        assert!(catalog.find("0 3 * * *").is_some());
        assert!(catalog.find("00 03 * * *").is_none());
        assert!(catalog.find("0  3 * * *").is_none());
        assert!(catalog.find(" 0 3 * * *").is_none());
    }

    #[test]
    fn test_find_by_label() {
        let catalog = Catalog::builtin();
        let preset = catalog.find_by_label("Quarterly").unwrap();
        assert_eq!(preset.cron, "0 3 1 */3 *");
        assert!(catalog.find_by_label("quarterly").is_none());
    }

    #[test]
    fn test_get_matches_entries() {
        let catalog = Catalog::builtin();
        for (i, entry) in catalog.entries().iter().enumerate() {
            assert_eq!(catalog.get(i), Some(entry));
            assert_eq!(catalog.find(entry.cron), Some(entry));
        }
        assert_eq!(catalog.get(catalog.len()), None);
    }

    #[test]
    fn test_custom_table() {
        static ONLY: &[PresetEntry] = &[PresetEntry {
            label: "Nightly",
            cron: "30 1 * * *",
            description: "Every night at 1:30 AM",
        }];
        let catalog = Catalog::new(ONLY);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("30 1 * * *"));
        assert!(!catalog.contains("0 3 * * *"));
    }
}
