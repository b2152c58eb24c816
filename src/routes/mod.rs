//! API route table
//!
//! Every (method, path) pair of the portal is registered exactly once,
//! in this one function. The source system this portal descends from
//! once registered two handlers on the same search path so that only one
//! of them was ever reachable; keeping the whole table in a single place
//! is what prevents that class of bug, so route registration never
//! happens anywhere else.
//!
//! Guarded routes attach their middleware per route. The **last** `wrap`
//! is outermost and executes first, so the token verifier always runs
//! before the admin guard:
//!
//! ```rust,ignore
//! web::get()
//!     .to(handlers::users::list_users)
//!     .wrap(AdminGuard::new())
//!     .wrap(AuthMiddleware::required())
//! ```
//!
//! Ordering note: `/users/admin/{email}` is registered before
//! `/users/{id}` so the more specific path wins.

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::handlers;
use crate::middlewares::{AdminGuard, AuthMiddleware};

/// Registers the complete route table.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Liveness
    cfg.service(web::resource("/").route(web::get().to(banner)));
    cfg.service(web::resource("/health").route(web::get().to(health_check)));

    // Token issuance
    cfg.service(web::resource("/jwt").route(web::post().to(handlers::tokens::issue_token)));

    // Users — admin check / promotion before the catch-all id route
    cfg.service(
        web::resource("/users/admin/{email}")
            .route(
                web::get()
                    .to(handlers::users::check_admin)
                    .wrap(AuthMiddleware::required()),
            )
            .route(web::patch().to(handlers::users::promote_admin)),
    );
    cfg.service(
        web::resource("/users")
            .route(
                web::get()
                    .to(handlers::users::list_users)
                    .wrap(AdminGuard::new())
                    .wrap(AuthMiddleware::required()),
            )
            .route(web::post().to(handlers::users::create_user)),
    );
    cfg.service(
        web::resource("/users/{id}")
            .route(web::get().to(handlers::users::get_user))
            .route(web::put().to(handlers::users::update_user))
            .route(web::delete().to(handlers::users::delete_user)),
    );

    // Reviews
    cfg.service(
        web::resource("/reviews")
            .route(web::get().to(handlers::reviews::list_reviews))
            .route(web::post().to(handlers::reviews::create_review)),
    );
    cfg.service(
        web::resource("/reviews/{id}")
            .route(web::get().to(handlers::reviews::get_review))
            .route(web::put().to(handlers::reviews::update_review))
            .route(web::delete().to(handlers::reviews::delete_review)),
    );

    // Complaints
    cfg.service(
        web::resource("/complains")
            .route(web::get().to(handlers::complaints::list_complaints))
            .route(web::post().to(handlers::complaints::create_complaint)),
    );
    cfg.service(
        web::resource("/complains/received/{id}")
            .route(web::patch().to(handlers::complaints::mark_received)),
    );
    cfg.service(
        web::resource("/complains/{id}")
            .route(web::delete().to(handlers::complaints::delete_complaint)),
    );

    // Identity search — one collection per path
    cfg.service(
        web::resource("/search/users/{query}")
            .route(web::get().to(handlers::users::search_users)),
    );
    cfg.service(
        web::resource("/search/{query}")
            .route(web::get().to(handlers::complaints::search_complaints)),
    );

    // Reference data and dashboard
    cfg.service(web::resource("/hotlines").route(web::get().to(handlers::lookups::list_hotlines)));
    cfg.service(
        web::resource("/homereview").route(web::get().to(handlers::lookups::list_home_reviews)),
    );
    cfg.service(web::resource("/admin-stats").route(web::get().to(handlers::stats::admin_stats)));
}

/// Root banner, kept for uptime probes pointed at `/`.
async fn banner() -> HttpResponse {
    HttpResponse::Ok().body("complain portal running")
}

/// Health check endpoint for load balancers and monitoring.
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "complain_portal_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    use crate::services::auth::TokenService;

    #[actix_web::test]
    async fn test_banner_and_health_respond() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert!(res.status().is_success());

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert!(res.status().is_success());
    }

    #[actix_web::test]
    async fn test_jwt_issues_token_for_any_claims() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(TokenService::new("s3cret")))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/jwt")
            .set_json(json!({ "email": "a@x.com", "anything": true }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert!(body["token"].is_string());
    }

    #[actix_web::test]
    async fn test_guarded_listing_rejects_anonymous_callers() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(TokenService::new("s3cret")))
                .configure(configure_all_routes),
        )
        .await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;
        assert_eq!(res.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }
}
