use crate::error::{CommentError, Result};
use std::env;

pub const DEFAULT_MAX_PAGES: usize = 50;

/// Get the page scan limit from environment variable or default
pub fn get_max_pages() -> usize {
    env::var("PR_COMMENT_MAX_PAGES")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_MAX_PAGES)
}

/// Walk 1-based pages in order and return the first item matching `predicate`
///
/// Stops at the first match or at an empty or short page. Running out of
/// `max_pages` while pages are still full is `PageLimitReached`.
pub fn find_in_pages<T, F, P>(
    mut fetch_page: F,
    page_size: usize,
    max_pages: usize,
    mut predicate: P,
) -> Result<Option<T>>
where
    F: FnMut(usize, usize) -> Result<Vec<T>>,
    P: FnMut(&T) -> bool,
{
    for page in 1..=max_pages {
        let items = fetch_page(page, page_size)?;
        let page_len = items.len();

        if let Some(found) = items.into_iter().find(|item| predicate(item)) {
            return Ok(Some(found));
        }

        if page_len < page_size {
            return Ok(None);
        }
    }

    Err(CommentError::PageLimitReached { pages: max_pages })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paged(data: &[i32]) -> impl FnMut(usize, usize) -> Result<Vec<i32>> + '_ {
        move |page, size| {
            Ok(data
                .iter()
                .copied()
                .skip((page - 1) * size)
                .take(size)
                .collect())
        }
    }

    #[test]
    fn finds_match_on_first_page() {
        let data = [1, 2, 3];
        let result = find_in_pages(paged(&data), 10, 5, |&n| n == 2).unwrap();
        assert_eq!(result, Some(2));
    }

    #[test]
    fn returns_first_match_in_listing_order() {
        let data: Vec<i32> = (1..=25).collect();
        let result = find_in_pages(paged(&data), 10, 5, |&n| n % 7 == 0).unwrap();
        assert_eq!(result, Some(7));
    }

    #[test]
    fn finds_match_on_later_page() {
        let data: Vec<i32> = (1..=25).collect();
        let mut pages_seen = Vec::new();
        let mut fetch = paged(&data);
        let result = find_in_pages(
            |page, size| {
                pages_seen.push(page);
                fetch(page, size)
            },
            10,
            5,
            |&n| n == 23,
        )
        .unwrap();
        assert_eq!(result, Some(23));
        assert_eq!(pages_seen, vec![1, 2, 3]);
    }

    #[test]
    fn stops_on_short_page_without_match() {
        let data: Vec<i32> = (1..=15).collect();
        let mut calls = 0;
        let mut fetch = paged(&data);
        let result = find_in_pages(
            |page, size| {
                calls += 1;
                fetch(page, size)
            },
            10,
            5,
            |&n| n == 99,
        )
        .unwrap();
        assert_eq!(result, None);
        assert_eq!(calls, 2);
    }

    #[test]
    fn stops_on_empty_first_page() {
        let result: Option<i32> = find_in_pages(|_, _| Ok(vec![]), 10, 5, |_| true).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn page_limit_on_full_pages_is_an_error() {
        // Every page is full, so only the cap ends the scan
        let mut calls = 0;
        let result = find_in_pages(
            |_, size| {
                calls += 1;
                Ok(vec![0; size])
            },
            10,
            3,
            |&n| n == 1,
        );
        assert!(matches!(result, Err(CommentError::PageLimitReached { pages: 3 })));
        assert_eq!(calls, 3);
    }

    #[test]
    fn short_last_page_at_limit_is_not_found() {
        let data: Vec<i32> = (1..=25).collect();
        let result = find_in_pages(paged(&data), 10, 3, |&n| n == 99).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn match_on_last_allowed_page_is_found() {
        let data: Vec<i32> = (1..=100).collect();
        let result = find_in_pages(paged(&data), 10, 3, |&n| n == 30).unwrap();
        assert_eq!(result, Some(30));
    }

    #[test]
    fn propagates_error() {
        let mut call_count = 0;
        let result: Result<Option<i32>> = find_in_pages(
            |_, _| {
                call_count += 1;
                if call_count == 1 {
                    Ok(vec![1, 2, 3, 4, 5])
                } else {
                    Err(CommentError::Api {
                        status: 500,
                        message: "Server error".to_string(),
                    })
                }
            },
            5,
            5,
            |&n| n == 9,
        );
        assert!(result.is_err());
    }
}
