//! Middleware module
//!
//! Request-pipeline guards for the portal:
//!
//! - [`AuthMiddleware`] verifies the bearer token and stores the decoded
//!   claims in the request extensions
//! - [`AdminGuard`] authorizes admin-scoped listings: admin role, or
//!   self-access via the request's own `email` query parameter
//!
//! Both attach per route. `AdminGuard` assumes `AuthMiddleware` already
//! ran, so registration order matters:
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! // The last wrap is outermost and executes first.
//! web::resource("/users")
//!     .route(
//!         web::get()
//!             .to(handlers::users::list_users)
//!             .wrap(AdminGuard::new())
//!             .wrap(AuthMiddleware::required()),
//!     )
//! ```

pub mod admin_guard;
mod auth_inner;
pub mod auth_middleware;

pub use admin_guard::AdminGuard;
pub use auth_middleware::AuthMiddleware;
