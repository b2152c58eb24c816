//! Token issuance handler

use actix_web::{web, HttpResponse};
use serde_json::{json, Value};

use crate::errors::AppResult;
use crate::services::auth::TokenService;

/// `POST /jwt` — signs an access token over the posted claim object.
///
/// Whatever object arrives is signed verbatim (no whitelist); the
/// response carries the compact token string.
pub async fn issue_token(
    tokens: web::Data<TokenService>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let token = tokens.issue(body.into_inner())?;

    Ok(HttpResponse::Ok().json(json!({ "token": token })))
}
