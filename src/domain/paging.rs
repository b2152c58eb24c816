//! Pagination protocol
//!
//! One listing shape is shared by the users, reviews and complaints
//! collections. A listing is either *complete* (an email filter was
//! supplied: the caller gets every matching record, page and limit are
//! ignored and no counting happens — self-scoped views are always whole)
//! or *paged* (skip/limit plus a filtered total count).

use mongodb::bson::Document;

/// Raw `page`/`limit` query input resolved against per-resource defaults
///
/// Both parameters arrive as free-form strings; anything unparsable
/// falls back to the default rather than rejecting the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u64,
    pub limit: u64,
}

impl PageParams {
    /// Resolves raw query values. `page` defaults to 1; `limit` defaults
    /// to the per-resource value (10 for users, 20 for reviews and
    /// complaints).
    pub fn from_raw(page: Option<&str>, limit: Option<&str>, default_limit: u64) -> Self {
        Self {
            page: page.and_then(|p| p.parse().ok()).unwrap_or(1),
            limit: limit.and_then(|l| l.parse().ok()).unwrap_or(default_limit),
        }
    }

    /// Number of records to skip before the requested page starts.
    ///
    /// Saturating: an absurdly large page asks to skip past everything
    /// instead of wrapping.
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// Computes the page count for a filtered total, rounding up.
pub fn total_pages(total_count: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    total_count.div_ceil(limit)
}

/// One page of records plus the count arithmetic for the same filter
#[derive(Debug, Clone)]
pub struct PagedResult {
    pub records: Vec<Document>,
    pub total_count: u64,
    pub current_page: u64,
    pub total_pages: u64,
}

/// Outcome of a listing query
#[derive(Debug, Clone)]
pub enum Listing {
    /// Email-scoped view: every matching record, no totals
    Complete(Vec<Document>),
    /// Filtered, paginated view
    Paged(PagedResult),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_when_params_missing() {
        let params = PageParams::from_raw(None, None, 20);
        assert_eq!(params, PageParams { page: 1, limit: 20 });
    }

    #[test]
    fn test_unparsable_params_fall_back() {
        let params = PageParams::from_raw(Some("abc"), Some(""), 10);
        assert_eq!(params, PageParams { page: 1, limit: 10 });
    }

    #[test]
    fn test_skip_arithmetic() {
        // 25 matching records, limit 10, page 2 → records 11-20
        let params = PageParams::from_raw(Some("2"), Some("10"), 20);
        assert_eq!(params.skip(), 10);
        assert_eq!(total_pages(25, params.limit), 3);
    }

    #[test]
    fn test_first_page_skips_nothing() {
        let params = PageParams::from_raw(Some("1"), Some("10"), 10);
        assert_eq!(params.skip(), 0);

        // page=0 must not underflow
        let params = PageParams::from_raw(Some("0"), Some("10"), 10);
        assert_eq!(params.skip(), 0);
    }

    #[test]
    fn test_exact_multiple_of_limit() {
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(21, 10), 3);
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn test_zero_limit_yields_zero_pages() {
        assert_eq!(total_pages(25, 0), 0);
    }

    #[test]
    fn test_extreme_page_saturates_instead_of_overflowing() {
        // page = u64::MAX is a well-formed query string; skipping must
        // saturate, not wrap.
        let params = PageParams::from_raw(Some("18446744073709551615"), Some("20"), 20);
        assert_eq!(params.skip(), u64::MAX);

        let params = PageParams::from_raw(Some("2"), Some("18446744073709551615"), 20);
        assert_eq!(params.skip(), u64::MAX);
    }
}
