//! Dashboard statistics handler

use actix_web::{web, HttpResponse};

use crate::db::Database;
use crate::errors::AppResult;
use crate::repositories::StatsRepository;

/// `GET /admin-stats` — estimated record counts for the five
/// collections. Unauthenticated and unfiltered, dashboard use only.
pub async fn admin_stats(db: web::Data<Database>) -> AppResult<HttpResponse> {
    let stats = StatsRepository::new(db.get_ref()).overview().await?;

    Ok(HttpResponse::Ok().json(stats))
}
