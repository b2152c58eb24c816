//! Generic paginated listing query
//!
//! One algorithm serves the users, reviews and complaints listings; the
//! resources differ only in their filter field names and default page
//! size.
//!
//! Two branches, both deliberate:
//!
//! 1. An `email` filter returns **all** matching records, unpaginated.
//!    `page`/`limit` are ignored and no count is computed — self-scoped
//!    views are always complete.
//! 2. Otherwise the supplied field filters combine as an implicit AND,
//!    one page of records is fetched with skip/limit, and the total for
//!    the *same filter* (not the whole collection) is counted
//!    separately.

use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

use crate::domain::paging::{total_pages, Listing, PagedResult, PageParams};
use crate::errors::{AppError, AppResult};

/// Builder for one filtered, paginated listing
#[derive(Debug, Clone)]
pub struct PagedQuery {
    filter: Document,
    params: PageParams,
}

impl PagedQuery {
    pub fn new(params: PageParams) -> Self {
        Self {
            filter: Document::new(),
            params,
        }
    }

    /// Adds an exact-match filter if a value was supplied.
    ///
    /// Empty strings count as absent, like empty query parameters do.
    pub fn filter_eq(mut self, field: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            if !value.is_empty() {
                self.filter.insert(field, value);
            }
        }
        self
    }

    /// Runs the paged branch: one page of records plus the filtered
    /// total and page count.
    pub async fn fetch(self, coll: &Collection<Document>) -> AppResult<PagedResult> {
        let records = coll
            .find(self.filter.clone())
            .skip(self.params.skip())
            // Clamped: a u64 limit past i64::MAX must not turn negative.
            .limit(i64::try_from(self.params.limit).unwrap_or(i64::MAX))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect::<Vec<Document>>()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let total_count = coll
            .count_documents(self.filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(PagedResult {
            records,
            total_count,
            current_page: self.params.page,
            total_pages: total_pages(total_count, self.params.limit),
        })
    }

    #[cfg(test)]
    fn filter(&self) -> &Document {
        &self.filter
    }
}

/// Decides which listing branch an `email` query value selects.
///
/// A present, non-empty email scopes the listing to the complete
/// matching set; a missing or empty value falls through to the paged
/// branch, like every other empty query parameter.
fn email_scope(email: Option<&str>) -> Option<&str> {
    email.filter(|e| !e.is_empty())
}

/// Runs a listing query: the complete email-scoped branch when an email
/// filter is present, the paged branch otherwise.
pub async fn list(
    coll: &Collection<Document>,
    email: Option<&str>,
    query: PagedQuery,
) -> AppResult<Listing> {
    if let Some(email) = email_scope(email) {
        let records = coll
            .find(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect::<Vec<Document>>()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        return Ok(Listing::Complete(records));
    }

    Ok(Listing::Paged(query.fetch(coll).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplied_filters_combine_as_and() {
        let query = PagedQuery::new(PageParams { page: 1, limit: 20 })
            .filter_eq("division", Some("Dhaka"))
            .filter_eq("district", Some("Gazipur"))
            .filter_eq("subDistrict", None)
            .filter_eq("problem", Some("electricity"));

        assert_eq!(
            query.filter(),
            &doc! {
                "division": "Dhaka",
                "district": "Gazipur",
                "problem": "electricity",
            }
        );
    }

    #[test]
    fn test_empty_values_do_not_filter() {
        let query = PagedQuery::new(PageParams { page: 1, limit: 20 })
            .filter_eq("division", Some(""))
            .filter_eq("district", None);

        assert_eq!(query.filter(), &Document::new());
    }

    #[test]
    fn test_email_filter_selects_the_complete_branch() {
        // Self-scoped views come back whole; page/limit never apply.
        assert_eq!(email_scope(Some("citizen@example.com")), Some("citizen@example.com"));
    }

    #[test]
    fn test_missing_or_empty_email_stays_paged() {
        assert_eq!(email_scope(None), None);
        assert_eq!(email_scope(Some("")), None);
    }
}
