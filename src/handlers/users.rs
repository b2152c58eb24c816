//! User management handlers
//!
//! | Method | Path | Guard |
//! |--------|------|-------|
//! | `GET` | `/users` | auth + admin guard |
//! | `GET` | `/users/{id}` | — |
//! | `POST` | `/users` | — |
//! | `PUT` | `/users/{id}` | — |
//! | `DELETE` | `/users/{id}` | — |
//! | `GET` | `/users/admin/{email}` | auth, self-check |
//! | `PATCH` | `/users/admin/{id}` | — |
//! | `GET` | `/search/users/{query}` | — |

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db::Database;
use crate::domain::paging::{Listing, PageParams};
use crate::domain::Claims;
use crate::errors::{AppError, AppResult};
use crate::handlers::{body_to_document, delete_body, insert_body, update_body};
use crate::repositories::{users_repo, UsersRepository};

/// Listing query parameters; page/limit arrive as free-form strings and
/// resolve against the users default (10).
#[derive(Debug, Deserialize)]
pub struct UserListQuery {
    email: Option<String>,
    page: Option<String>,
    limit: Option<String>,
}

/// `GET /users` — admin-guarded listing.
///
/// With an `email` filter the complete matching set comes back as a bare
/// array; otherwise one page plus totals.
pub async fn list_users(
    db: web::Data<Database>,
    query: web::Query<UserListQuery>,
) -> AppResult<HttpResponse> {
    let params = PageParams::from_raw(
        query.page.as_deref(),
        query.limit.as_deref(),
        users_repo::DEFAULT_PAGE_SIZE,
    );

    let listing = UsersRepository::new(db.get_ref())
        .list(query.email.as_deref(), params)
        .await?;

    Ok(match listing {
        Listing::Complete(users) => HttpResponse::Ok().json(users),
        Listing::Paged(page) => HttpResponse::Ok().json(json!({
            "users": page.records,
            "totalResults": page.total_count,
            "currentPage": page.current_page,
            "totalPages": page.total_pages,
        })),
    })
}

/// `GET /users/{id}` — single record, `null` when the id is unknown.
pub async fn get_user(db: web::Data<Database>, id: web::Path<String>) -> AppResult<HttpResponse> {
    let user = UsersRepository::new(db.get_ref()).find_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// `POST /users` — registration with check-then-insert duplicate
/// prevention on the email.
pub async fn create_user(
    db: web::Data<Database>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let user = body_to_document(body.into_inner())?;

    match UsersRepository::new(db.get_ref()).create_if_absent(user).await? {
        Some(result) => Ok(HttpResponse::Ok().json(insert_body(&result))),
        None => Ok(HttpResponse::Ok().json(json!({ "message": "user already exists!" }))),
    }
}

/// `PUT /users/{id}` — partial update with upsert semantics.
pub async fn update_user(
    db: web::Data<Database>,
    id: web::Path<String>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let fields = body_to_document(body.into_inner())?;
    let result = UsersRepository::new(db.get_ref())
        .upsert_by_id(&id, fields)
        .await?;

    Ok(HttpResponse::Ok().json(update_body(&result)))
}

/// `DELETE /users/{id}` — unconditional delete, except for the protected
/// super-admin record (403).
pub async fn delete_user(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let result = UsersRepository::new(db.get_ref()).delete_guarded(&id).await?;

    Ok(HttpResponse::Ok().json(delete_body(&result)))
}

/// `GET /users/admin/{email}` — asks whether that email holds the admin
/// role.
///
/// The caller may only ask about themselves: a path email different from
/// the token email is rejected with 403, before any lookup.
pub async fn check_admin(
    db: web::Data<Database>,
    claims: Claims,
    email: web::Path<String>,
) -> AppResult<HttpResponse> {
    let email = email.into_inner();

    if claims.email.as_deref() != Some(email.as_str()) {
        return Err(AppError::AuthorizationError("forbidden access".to_string()));
    }

    let admin = UsersRepository::new(db.get_ref()).is_admin(&email).await?;

    Ok(HttpResponse::Ok().json(json!({ "admin": admin })))
}

/// `PATCH /users/admin/{id}` — promotes the user to the admin role.
/// Upserting and one-way; no demotion path exists.
pub async fn promote_admin(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let result = UsersRepository::new(db.get_ref()).promote_admin(&id).await?;

    Ok(HttpResponse::Ok().json(update_body(&result)))
}

/// `GET /search/users/{query}` — exact nid/email search over users.
pub async fn search_users(
    db: web::Data<Database>,
    query: web::Path<String>,
) -> AppResult<HttpResponse> {
    let users = UsersRepository::new(db.get_ref()).search(&query).await?;

    Ok(HttpResponse::Ok().json(users))
}
