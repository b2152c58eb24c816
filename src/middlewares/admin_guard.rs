//! Admin authorization guard
//!
//! Runs after `AuthMiddleware` on admin-scoped listings. Looks up the
//! caller's stored record by the token email and admits the request if
//! the record carries the admin role, or if the request's own `email`
//! query parameter equals the token email (self-access). Everything else
//! fails with 403.
//!
//! The self branch is a check against the request *parameter*, not
//! against the owner of any record being returned — see
//! [`AccessDecision`](crate::domain::AccessDecision).

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use serde::Deserialize;

use crate::db::Database;
use crate::domain::{AccessDecision, Claims};
use crate::errors::AppError;
use crate::repositories::users_repo::UsersRepository;

/// Admin-or-self authorization middleware
pub struct AdminGuard;

impl AdminGuard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AdminGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for AdminGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AdminGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminGuardService {
            service: Rc::new(service),
        }))
    }
}

/// The `email` listing filter, as far as this guard cares about it
#[derive(Debug, Deserialize)]
struct EmailParam {
    email: Option<String>,
}

/// Service performing the authorization decision
pub struct AdminGuardService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AdminGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            // Claims must have been attached by AuthMiddleware.
            let claims = req.extensions().get::<Claims>().cloned();
            let Some(claims) = claims else {
                return Ok(reject(
                    req,
                    &AppError::AuthenticationError("unauthorized access".to_string()),
                ));
            };

            let Some(db) = req.app_data::<web::Data<Database>>().cloned() else {
                return Ok(reject(
                    req,
                    &AppError::InternalError("database not configured".to_string()),
                ));
            };

            let token_email = claims.email.clone().unwrap_or_default();
            let is_admin = match UsersRepository::new(db.get_ref()).is_admin(&token_email).await {
                Ok(is_admin) => is_admin,
                Err(err) => return Ok(reject(req, &err)),
            };

            let requested_email = web::Query::<EmailParam>::from_query(req.query_string())
                .map(|q| q.into_inner().email)
                .unwrap_or(None);

            match AccessDecision::decide(is_admin, claims.email.as_deref(), requested_email.as_deref())
            {
                Some(decision) => {
                    log::debug!("listing authorized: {:?} ({})", decision, token_email);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                None => {
                    log::warn!(
                        "listing denied: caller {} requested email filter {:?}",
                        token_email,
                        requested_email
                    );
                    Ok(reject(
                        req,
                        &AppError::AuthorizationError("forbidden access".to_string()),
                    ))
                }
            }
        })
    }
}

/// Terminates the request with the error's HTTP response.
fn reject<B>(req: ServiceRequest, err: &AppError) -> ServiceResponse<EitherBody<B>> {
    let response = err.error_response();
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}
