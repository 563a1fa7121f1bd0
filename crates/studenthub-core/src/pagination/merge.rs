//! Merge-by-id and end-of-list detection.

use std::collections::HashSet;
use std::hash::Hash;

/// Combine a fetched page with the current list.
///
/// With `append == false` the page replaces the list as-is. With
/// `append == true` existing items keep their order and each page item is
/// added only if its key has not been seen yet, so the result never holds
/// two entries with the same key.
pub fn merge_page<T, K, F>(existing: Vec<T>, page: Vec<T>, append: bool, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    if !append {
        return page;
    }

    let mut seen: HashSet<K> = existing.iter().map(&key).collect();
    let mut merged = existing;
    merged.reserve(page.len());
    merged.extend(page.into_iter().filter(|item| seen.insert(key(item))));
    merged
}

/// Heuristic end-of-list check: a full page suggests more pages follow.
///
/// A final page that happens to be exactly full reports `true`; the
/// following fetch then comes back short and settles it.
pub fn has_more(page_len: usize, page_size: usize) -> bool {
    page_size > 0 && page_len == page_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        label: &'static str,
    }

    fn rows(ids: &[u32]) -> Vec<Row> {
        ids.iter().map(|&id| Row { id, label: "" }).collect()
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn append_keeps_existing_then_new_unique() {
        let merged = merge_page(rows(&[1, 2]), rows(&[2, 3]), true, |r| r.id);
        assert_eq!(ids(&merged), vec![1, 2, 3]);
        assert!(!has_more(2, 20));
    }

    #[test]
    fn append_keeps_the_existing_copy_of_a_duplicate() {
        let existing = vec![Row { id: 7, label: "old" }];
        let page = vec![Row { id: 7, label: "new" }, Row { id: 8, label: "new" }];
        let merged = merge_page(existing, page, true, |r| r.id);
        assert_eq!(merged[0].label, "old");
        assert_eq!(ids(&merged), vec![7, 8]);
    }

    #[test]
    fn append_collapses_duplicates_inside_the_page() {
        let merged = merge_page(rows(&[1]), rows(&[4, 3, 4, 1, 5]), true, |r| r.id);
        assert_eq!(ids(&merged), vec![1, 4, 3, 5]);
    }

    #[test]
    fn replace_returns_page_verbatim() {
        let merged = merge_page(rows(&[1, 2, 3]), rows(&[9, 2]), false, |r| r.id);
        assert_eq!(ids(&merged), vec![9, 2]);

        let merged = merge_page(rows(&[1]), Vec::new(), false, |r| r.id);
        assert!(merged.is_empty());
    }

    #[test]
    fn append_to_empty() {
        let merged = merge_page(Vec::new(), rows(&[3, 1]), true, |r| r.id);
        assert_eq!(ids(&merged), vec![3, 1]);
    }

    #[test]
    fn full_page_means_more() {
        assert!(has_more(20, 20));
        assert!(has_more(10, 10));
        assert!(!has_more(9, 10));
        assert!(!has_more(0, 20));
        assert!(!has_more(0, 0));
    }
}
