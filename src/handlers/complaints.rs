//! Complaint handlers
//!
//! | Method | Path | Guard |
//! |--------|------|-------|
//! | `POST` | `/complains` | — |
//! | `GET` | `/complains` | — |
//! | `PATCH` | `/complains/received/{id}` | — |
//! | `DELETE` | `/complains/{id}` | — |
//! | `GET` | `/search/{query}` | — |

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db::Database;
use crate::domain::paging::{Listing, PageParams};
use crate::errors::AppResult;
use crate::handlers::{body_to_document, delete_body, insert_body, update_body};
use crate::repositories::complaints_repo::{ComplaintFilters, DEFAULT_PAGE_SIZE};
use crate::repositories::ComplaintsRepository;

/// Complaint listing parameters: the shared email/page/limit trio plus
/// the four location/problem field filters.
#[derive(Debug, Deserialize)]
pub struct ComplaintListQuery {
    email: Option<String>,
    page: Option<String>,
    limit: Option<String>,
    division: Option<String>,
    district: Option<String>,
    #[serde(rename = "subDistrict")]
    sub_district: Option<String>,
    problem: Option<String>,
}

/// `POST /complains` — stores a complaint document as-is; `status`
/// stays unset until staff acknowledge it.
pub async fn create_complaint(
    db: web::Data<Database>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let complaint = body_to_document(body.into_inner())?;
    let result = ComplaintsRepository::new(db.get_ref())
        .insert(complaint)
        .await?;

    Ok(HttpResponse::Ok().json(insert_body(&result)))
}

/// `GET /complains` — complete set for an email filter; otherwise the
/// supplied field filters AND together over one page (default limit 20).
pub async fn list_complaints(
    db: web::Data<Database>,
    query: web::Query<ComplaintListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let params = PageParams::from_raw(query.page.as_deref(), query.limit.as_deref(), DEFAULT_PAGE_SIZE);
    let filters = ComplaintFilters {
        division: query.division,
        district: query.district,
        sub_district: query.sub_district,
        problem: query.problem,
    };

    let listing = ComplaintsRepository::new(db.get_ref())
        .list(query.email.as_deref(), &filters, params)
        .await?;

    Ok(match listing {
        Listing::Complete(complains) => HttpResponse::Ok().json(complains),
        Listing::Paged(page) => HttpResponse::Ok().json(json!({
            "complains": page.records,
            "totalComplains": page.total_count,
            "currentPage": page.current_page,
            "totalPages": page.total_pages,
        })),
    })
}

/// `PATCH /complains/received/{id}` — acknowledges the complaint.
/// Idempotent; an already-received complaint still reports success.
pub async fn mark_received(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let result = ComplaintsRepository::new(db.get_ref())
        .mark_received(&id)
        .await?;

    Ok(HttpResponse::Ok().json(update_body(&result)))
}

/// `DELETE /complains/{id}` — unconditional delete.
pub async fn delete_complaint(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let result = ComplaintsRepository::new(db.get_ref())
        .delete_by_id(&id)
        .await?;

    Ok(HttpResponse::Ok().json(delete_body(&result)))
}

/// `GET /search/{query}` — exact nid/email search over complaints.
pub async fn search_complaints(
    db: web::Data<Database>,
    query: web::Path<String>,
) -> AppResult<HttpResponse> {
    let complains = ComplaintsRepository::new(db.get_ref()).search(&query).await?;

    Ok(HttpResponse::Ok().json(complains))
}
