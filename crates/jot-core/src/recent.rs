//! Recently saved notes, most recent first.

use std::collections::VecDeque;

use crate::NoteRecord;

/// Number of entries kept by default.
pub const RECENT_NOTES_CAPACITY: usize = 10;

/// Bounded in-memory list of the latest plaintext saves.
///
/// New entries go to the front; once full, the oldest entry falls off the
/// back. Nothing is persisted, so a fresh process always starts empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentNotes {
    entries: VecDeque<NoteRecord>,
    capacity: usize,
}

impl RecentNotes {
    /// Create an empty list holding at most `capacity` entries (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a save, evicting the oldest entry on overflow.
    pub fn push(&mut self, record: NoteRecord) {
        self.entries.push_front(record);
        self.entries.truncate(self.capacity);
    }

    pub fn iter(&self) -> impl Iterator<Item = &NoteRecord> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RecentNotes {
    fn default() -> Self {
        Self::with_capacity(RECENT_NOTES_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn record(index: u32) -> NoteRecord {
        let saved_at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, index)
            .unwrap();
        NoteRecord::new(format!("note-{index}.txt"), saved_at)
    }

    fn names(recent: &RecentNotes) -> Vec<String> {
        recent.iter().map(|r| r.file_name.clone()).collect()
    }

    #[test]
    fn starts_empty() {
        let recent = RecentNotes::default();
        assert!(recent.is_empty());
        assert_eq!(recent.capacity(), RECENT_NOTES_CAPACITY);
    }

    #[test]
    fn newest_entry_comes_first() {
        let mut recent = RecentNotes::default();
        recent.push(record(0));
        recent.push(record(1));
        recent.push(record(2));

        assert_eq!(names(&recent), vec!["note-2.txt", "note-1.txt", "note-0.txt"]);
    }

    #[test]
    fn eleventh_save_evicts_the_first() {
        let mut recent = RecentNotes::default();
        for index in 0..11 {
            recent.push(record(index));
            assert!(recent.len() <= RECENT_NOTES_CAPACITY);
        }

        assert_eq!(recent.len(), 10);
        let names = names(&recent);
        assert!(!names.contains(&"note-0.txt".to_string()));
        assert_eq!(names.first().map(String::as_str), Some("note-10.txt"));
        assert_eq!(names.last().map(String::as_str), Some("note-1.txt"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn stays_capped_with_newest_first(pushes in 0u32..40, capacity in 1usize..15) {
            let mut recent = RecentNotes::with_capacity(capacity);
            for index in 0..pushes {
                recent.push(record(index));
                prop_assert!(recent.len() <= capacity);
            }

            let expected: Vec<String> = (0..pushes)
                .rev()
                .take(capacity)
                .map(|index| format!("note-{index}.txt"))
                .collect();
            prop_assert_eq!(names(&recent), expected);
        }
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut recent = RecentNotes::with_capacity(0);
        recent.push(record(0));
        recent.push(record(1));
        assert_eq!(names(&recent), vec!["note-1.txt"]);
    }
}
