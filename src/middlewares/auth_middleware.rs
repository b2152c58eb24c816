//! JWT authentication middleware
//!
//! Validates the bearer token of inbound requests and attaches the
//! decoded [`Claims`](crate::domain::Claims) to the request extensions.
//! Runs before any guarded handler; there is no optional mode, no retry
//! and no refresh — a failed verification terminates the request with
//! 401 and the caller must re-authenticate.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT authentication middleware
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// Creates the middleware for routes that require a valid token.
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};
    use serde_json::json;

    use crate::domain::Claims;
    use crate::services::auth::TokenService;

    async fn echo_claims(claims: Claims) -> HttpResponse {
        HttpResponse::Ok().json(claims)
    }

    macro_rules! guarded_app {
        ($tokens:expr) => {
            test::init_service(
                App::new().app_data(web::Data::new($tokens)).service(
                    web::resource("/guarded").route(
                        web::get()
                            .to(echo_claims)
                            .wrap(AuthMiddleware::required()),
                    ),
                ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let app = guarded_app!(TokenService::new("s3cret"));

        let req = test::TestRequest::get().uri("/guarded").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_garbage_token_is_unauthorized() {
        let app = guarded_app!(TokenService::new("s3cret"));

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", "Bearer not.a.token"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler_with_claims() {
        let tokens = TokenService::new("s3cret");
        let token = tokens.issue(json!({ "email": "a@x.com" })).unwrap();
        let app = guarded_app!(tokens);

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["email"], json!("a@x.com"));
    }

    #[actix_web::test]
    async fn test_token_signed_elsewhere_is_unauthorized() {
        let foreign = TokenService::new("other-secret");
        let token = foreign.issue(json!({ "email": "a@x.com" })).unwrap();
        let app = guarded_app!(TokenService::new("s3cret"));

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }
}
