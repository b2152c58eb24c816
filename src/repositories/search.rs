//! Identity search
//!
//! Exact-match OR-search across the two identifying fields of a
//! collection: the national identifier (`nid`) and the email. One raw
//! string, all matching documents, scoped to a single collection.

use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

use crate::errors::{AppError, AppResult};

/// Returns every document whose `nid` or `email` exactly equals the
/// query string.
pub async fn find_by_nid_or_email(
    coll: &Collection<Document>,
    query: &str,
) -> AppResult<Vec<Document>> {
    coll.find(identity_filter(query))
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .try_collect::<Vec<Document>>()
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))
}

fn identity_filter(query: &str) -> Document {
    doc! {
        "$or": [
            { "nid": query },
            { "email": query },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches_either_identity_field() {
        assert_eq!(
            identity_filter("1990123456789"),
            doc! {
                "$or": [
                    { "nid": "1990123456789" },
                    { "email": "1990123456789" },
                ]
            }
        );
    }
}
