//! Pagination utilities
//!
//! Pages are 1-indexed. A request below page 1 is treated as page 1; a
//! request past the last page is kept as-is and yields an empty slice.

/// Pagination window calculated from the requested page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: i64,
    /// Rows per page
    pub page_size: i64,
    /// Offset for SQL LIMIT/OFFSET query
    pub offset: i64,
}

/// Calculate the LIMIT/OFFSET window for a requested page
///
/// The offset saturates at `i64::MAX`, so an absurdly large page still
/// yields an empty slice instead of overflowing.
///
/// # Examples
/// ```
/// use fsnd_common::pagination::calculate_pagination;
///
/// let p = calculate_pagination(2, 10);
/// assert_eq!(p.page, 2);
/// assert_eq!(p.offset, 10);
///
/// // Past the end: offset lands beyond the data, so the page is empty
/// let p = calculate_pagination(9, 10);
/// assert_eq!(p.offset, 80);
/// ```
pub fn calculate_pagination(requested_page: i64, page_size: i64) -> Pagination {
    let page_size = page_size.max(1);
    let page = requested_page.max(1);
    let offset = (page - 1).saturating_mul(page_size);

    Pagination {
        page,
        page_size,
        offset,
    }
}

impl Pagination {
    /// This page's window of rows already loaded in full
    pub fn slice<T>(&self, rows: Vec<T>) -> Vec<T> {
        let skip = usize::try_from(self.offset).unwrap_or(usize::MAX);
        let take = usize::try_from(self.page_size).unwrap_or(usize::MAX);
        rows.into_iter().skip(skip).take(take).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_normal() {
        let p = calculate_pagination(2, 10);
        assert_eq!(p.page, 2);
        assert_eq!(p.offset, 10);
    }

    #[test]
    fn test_pagination_first_page() {
        let p = calculate_pagination(1, 10);
        assert_eq!(p.page, 1);
        assert_eq!(p.offset, 0);
    }

    #[test]
    fn test_pagination_out_of_bounds_low() {
        let p = calculate_pagination(0, 10);
        assert_eq!(p.page, 1);
        assert_eq!(p.offset, 0);

        let p = calculate_pagination(i64::MIN, 10);
        assert_eq!(p.page, 1);
        assert_eq!(p.offset, 0);
    }

    #[test]
    fn test_pagination_past_end_is_not_clamped() {
        let p = calculate_pagination(5, 10);
        assert_eq!(p.page, 5);
        assert_eq!(p.offset, 40);
    }

    #[test]
    fn test_pagination_huge_page_saturates() {
        let p = calculate_pagination(i64::MAX, 10);
        assert_eq!(p.page, i64::MAX);
        assert_eq!(p.offset, i64::MAX);
    }

    #[test]
    fn test_slice_windows() {
        let rows: Vec<i64> = (1..=25).collect();
        assert_eq!(calculate_pagination(3, 10).slice(rows.clone()), vec![21, 22, 23, 24, 25]);
        assert!(calculate_pagination(4, 10).slice(rows.clone()).is_empty());
        assert!(calculate_pagination(i64::MAX, 10).slice(rows).is_empty());
    }

    #[test]
    fn test_pagination_zero_page_size() {
        let p = calculate_pagination(3, 0);
        assert_eq!(p.page_size, 1);
        assert_eq!(p.offset, 2);
    }
}
