//! Tag Filter — keeps entries relevant to the requested audience.

use std::collections::BTreeSet;

use crate::models::Entry;

/// Returns the entries whose tags intersect `requested`, in input order.
///
/// An empty `requested` set disables filtering and returns every entry.
pub fn filter_by_tags(entries: &[Entry], requested: &BTreeSet<String>) -> Vec<Entry> {
    if requested.is_empty() {
        return entries.to_vec();
    }

    entries
        .iter()
        .filter(|entry| entry.has_any_tag(requested))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::fixtures::{job, project};
    use proptest::prelude::*;

    fn tags(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty_request_returns_everything() {
        let entries = vec![job("a", (2020, 1), &["rust"]), project("b", (2019, 1), &["ml"])];
        assert_eq!(filter_by_tags(&entries, &BTreeSet::new()), entries);
    }

    #[test]
    fn test_keeps_only_intersecting_entries_in_order() {
        let entries = vec![
            job("a", (2022, 1), &["rust", "backend"]),
            job("b", (2021, 1), &["frontend"]),
            project("c", (2020, 1), &["backend"]),
            project("d", (2019, 1), &["ml"]),
        ];
        let kept = filter_by_tags(&entries, &tags(&["backend", "ml"]));
        let titles: Vec<_> = kept.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let entries = vec![job("a", (2022, 1), &["rust"])];
        assert!(filter_by_tags(&entries, &tags(&["cobol"])).is_empty());
    }

    #[test]
    fn test_source_entries_untouched() {
        let entries = vec![job("a", (2022, 1), &["rust"]), job("b", (2021, 1), &["go"])];
        let before = entries.clone();
        let _ = filter_by_tags(&entries, &tags(&["go"]));
        assert_eq!(entries, before);
    }

    const TAG_POOL: &[&str] = &["rust", "go", "ml", "web", "infra"];

    fn arb_entries() -> impl Strategy<Value = Vec<Entry>> {
        prop::collection::vec(
            (any::<bool>(), prop::sample::subsequence(TAG_POOL, 1..=3)),
            0..12,
        )
        .prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (is_job, tag_list))| {
                    let title = format!("entry-{i}");
                    if is_job {
                        job(&title, (2020, 1), &tag_list)
                    } else {
                        project(&title, (2020, 1), &tag_list)
                    }
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_result_is_ordered_subset_with_matching_tags(
            entries in arb_entries(),
            requested in prop::sample::subsequence(TAG_POOL, 1..=2),
        ) {
            let requested = tags(&requested);
            let kept = filter_by_tags(&entries, &requested);

            prop_assert!(kept.iter().all(|e| e.has_any_tag(&requested)));

            // Order-preserving subsequence of the input.
            let mut cursor = entries.iter();
            for k in &kept {
                prop_assert!(cursor.any(|e| e == k));
            }
        }

        #[test]
        fn prop_empty_request_is_identity(entries in arb_entries()) {
            prop_assert_eq!(filter_by_tags(&entries, &BTreeSet::new()), entries);
        }
    }
}
