//! Reference data handlers

use actix_web::{web, HttpResponse};

use crate::db::Database;
use crate::errors::AppResult;
use crate::repositories::LookupsRepository;

/// `GET /hotlines` — the emergency hotline directory.
pub async fn list_hotlines(db: web::Data<Database>) -> AppResult<HttpResponse> {
    let hotlines = LookupsRepository::new(db.get_ref()).hotlines().await?;

    Ok(HttpResponse::Ok().json(hotlines))
}

/// `GET /homereview` — reviews featured on the portal's home page.
pub async fn list_home_reviews(db: web::Data<Database>) -> AppResult<HttpResponse> {
    let reviews = LookupsRepository::new(db.get_ref()).home_reviews().await?;

    Ok(HttpResponse::Ok().json(reviews))
}
