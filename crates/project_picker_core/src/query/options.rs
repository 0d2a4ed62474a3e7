//! Filter option lists derived from current entries.
//!
//! Filter widgets offer only values that some entry actually carries, unlike
//! the add/edit selectors which offer the full `Level::ALL` range.

use crate::model::entry::Entry;
use crate::model::level::Level;
use std::collections::BTreeSet;

/// Sorted distinct money levels present in `entries`.
pub fn money_options(entries: &[Entry]) -> Vec<Level> {
    distinct_levels(entries, |entry| &entry.money_level)
}

/// Sorted distinct time levels present in `entries`.
pub fn time_options(entries: &[Entry]) -> Vec<Level> {
    distinct_levels(entries, |entry| &entry.time_level)
}

/// Number of entries carrying `category`.
pub fn category_usage(entries: &[Entry], category: &str) -> usize {
    entries
        .iter()
        .filter(|entry| entry.has_category(category))
        .count()
}

fn distinct_levels<F>(entries: &[Entry], field: F) -> Vec<Level>
where
    F: Fn(&Entry) -> &BTreeSet<Level>,
{
    entries
        .iter()
        .flat_map(|entry| field(entry).iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{category_usage, money_options, time_options};
    use crate::model::entry::{Entry, EntryDraft};
    use crate::model::level::Level;

    #[test]
    fn options_reflect_only_present_values() {
        let entries = vec![
            Entry::new(
                EntryDraft::new("A")
                    .with_money([Level::Three])
                    .with_categories(["IT"]),
            ),
            Entry::new(EntryDraft::new("B").with_money([Level::One, Level::Three])),
        ];
        assert_eq!(money_options(&entries), vec![Level::One, Level::Three]);
        assert!(time_options(&entries).is_empty());
        assert_eq!(category_usage(&entries, "IT"), 1);
        assert_eq!(category_usage(&entries, "Marketing"), 0);
    }
}
