//! Review handlers
//!
//! | Method | Path | Guard |
//! |--------|------|-------|
//! | `POST` | `/reviews` | — |
//! | `GET` | `/reviews` | — |
//! | `GET` | `/reviews/{id}` | — |
//! | `PUT` | `/reviews/{id}` | — |
//! | `DELETE` | `/reviews/{id}` | — |

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db::Database;
use crate::domain::paging::{Listing, PageParams};
use crate::errors::AppResult;
use crate::handlers::{body_to_document, delete_body, insert_body, update_body};
use crate::repositories::{reviews_repo, ReviewsRepository};

#[derive(Debug, Deserialize)]
pub struct ReviewListQuery {
    email: Option<String>,
    page: Option<String>,
    limit: Option<String>,
}

/// `POST /reviews` — stores a review document as-is.
pub async fn create_review(
    db: web::Data<Database>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let review = body_to_document(body.into_inner())?;
    let result = ReviewsRepository::new(db.get_ref()).insert(review).await?;

    Ok(HttpResponse::Ok().json(insert_body(&result)))
}

/// `GET /reviews` — complete set for an email filter, one page plus
/// totals otherwise (default limit 20).
pub async fn list_reviews(
    db: web::Data<Database>,
    query: web::Query<ReviewListQuery>,
) -> AppResult<HttpResponse> {
    let params = PageParams::from_raw(
        query.page.as_deref(),
        query.limit.as_deref(),
        reviews_repo::DEFAULT_PAGE_SIZE,
    );

    let listing = ReviewsRepository::new(db.get_ref())
        .list(query.email.as_deref(), params)
        .await?;

    Ok(match listing {
        Listing::Complete(reviews) => HttpResponse::Ok().json(reviews),
        Listing::Paged(page) => HttpResponse::Ok().json(json!({
            "reviews": page.records,
            "totalReview": page.total_count,
            "currentPage": page.current_page,
            "totalPages": page.total_pages,
        })),
    })
}

/// `GET /reviews/{id}` — single record, `null` when the id is unknown.
pub async fn get_review(db: web::Data<Database>, id: web::Path<String>) -> AppResult<HttpResponse> {
    let review = ReviewsRepository::new(db.get_ref()).find_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(review))
}

/// `PUT /reviews/{id}` — replaces `comments` and `rating`, upserting.
pub async fn update_review(
    db: web::Data<Database>,
    id: web::Path<String>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let body = body_to_document(body.into_inner())?;
    let result = ReviewsRepository::new(db.get_ref())
        .update_feedback(&id, &body)
        .await?;

    Ok(HttpResponse::Ok().json(update_body(&result)))
}

/// `DELETE /reviews/{id}` — unconditional delete.
pub async fn delete_review(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let result = ReviewsRepository::new(db.get_ref()).delete_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(delete_body(&result)))
}
