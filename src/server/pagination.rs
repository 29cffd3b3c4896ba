pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the `page`-th (1-based) window of `page_size` items. Pages before the first
/// or past the last give an empty slice.
pub fn paginate<T>(items: &[T], page: i64, page_size: usize) -> &[T] {
    let Ok(index) = usize::try_from(page.saturating_sub(1)) else {
        return &[];
    };
    let start = index.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn first_page_is_full_when_enough_items() {
        let items = items(25);
        assert_eq!(paginate(&items, 1, 10), &items[0..10]);
        assert_eq!(paginate(&items, 2, 10), &items[10..20]);
    }

    #[test]
    fn last_page_is_partial() {
        let items = items(12);
        assert_eq!(paginate(&items, 2, 10), &[10, 11]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items = items(12);
        assert!(paginate(&items, 3, 10).is_empty());
        assert!(paginate(&items, i64::MAX, 10).is_empty());
    }

    #[test]
    fn pages_below_one_are_empty() {
        let items = items(12);
        assert!(paginate(&items, 0, 10).is_empty());
        assert!(paginate(&items, -3, 10).is_empty());
    }

    #[test]
    fn empty_input() {
        let items: Vec<usize> = vec![];
        assert!(paginate(&items, 1, QUESTIONS_PER_PAGE).is_empty());
    }
}
