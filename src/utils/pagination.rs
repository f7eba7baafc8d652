use serde::Deserialize;

/// Fixed page size for every paginated listing.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// `?page=N` query parameter. Missing or non-numeric means page 1.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// 1-based page number. Zero, negative and unparsable pages are clamped to 1.
    pub fn page(&self) -> usize {
        match self.page.as_deref().map(str::trim).map(str::parse::<i64>) {
            Some(Ok(p)) if p > 0 => p as usize,
            _ => 1,
        }
    }
}

/// Returns the items of `page` (1-based) from `items`.
///
/// Out-of-range pages yield an empty slice, never an error.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_holds_at_most_ten() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(&items, 1), &items[0..10]);
        assert_eq!(paginate(&items, 2), &items[10..20]);
        assert_eq!(paginate(&items, 3), &items[20..25]);
    }

    #[test]
    fn pages_past_the_end_are_empty() {
        for len in [0usize, 1, 9, 10, 11, 20, 37] {
            let items: Vec<usize> = (0..len).collect();
            let last = len.div_ceil(QUESTIONS_PER_PAGE);
            for page in 1..=last + 2 {
                let slice = paginate(&items, page);
                assert!(slice.len() <= QUESTIONS_PER_PAGE);
                if page > last {
                    assert!(slice.is_empty(), "len={len} page={page}");
                }
            }
        }
    }

    fn params(page: Option<&str>) -> PageParams {
        PageParams { page: page.map(str::to_string) }
    }

    #[test]
    fn non_positive_page_clamps_to_first() {
        assert_eq!(params(Some("0")).page(), 1);
        assert_eq!(params(Some("-4")).page(), 1);
        assert_eq!(params(None).page(), 1);
        assert_eq!(params(Some("3")).page(), 3);

        let items: Vec<u32> = (0..15).collect();
        assert_eq!(paginate(&items, 0), paginate(&items, 1));
    }

    #[test]
    fn non_numeric_page_falls_back_to_first() {
        assert_eq!(params(Some("abc")).page(), 1);
        assert_eq!(params(Some("")).page(), 1);
        assert_eq!(params(Some("2.5")).page(), 1);
        assert_eq!(params(Some(" 2 ")).page(), 2);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let items = vec![1, 2, 3];
        assert!(paginate(&items, usize::MAX).is_empty());
    }
}
