//! Complain portal backend
//!
//! Backend service for a citizen complaint portal: citizens register,
//! submit complaints and reviews, and staff administer them. Provides
//! stateless JWT authentication, role-based authorization and paginated
//! resource listings on top of MongoDB.
//!
//! # Features
//!
//! - **JWT auth**: signed access tokens with a fixed 12-hour lifetime,
//!   verified without any server-side session lookup
//! - **Role-based access**: admin role or self-access by email filter
//! - **Generic listings**: one filter/paginate/count algorithm shared by
//!   the users, reviews and complaints collections
//! - **MongoDB**: loosely-typed document storage, no schema layer
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← explicit (method, path) table
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Middlewares   │ ← token verification, admin guard
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← request/response shaping
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← data access (paged queries, search, stats)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← document store
//! └─────────────────┘
//! ```
//!
//! Shared state (the database handle and the token service holding the
//! signing secret) is loaded once at startup and injected with
//! `actix_web::web::Data`; nothing lives in process-wide globals.

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
