//! Domain types
//!
//! Transient per-request types: decoded token claims, the authorization
//! decision and the pagination protocol. Stored records stay loosely
//! typed (`bson::Document`) all the way through; the store owns them.

pub mod identity;
pub mod paging;

pub use identity::{AccessDecision, Claims};
pub use paging::{Listing, PagedResult, PageParams};
