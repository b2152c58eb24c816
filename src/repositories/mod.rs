//! Data access layer
//!
//! Concrete repositories over the MongoDB collections. Each repository
//! is a thin handle around a `Collection<Document>`; construction is
//! cheap and per-request. The generic listing algorithm lives in
//! [`paged_query`], the nid/email OR-search in [`search`].

pub mod complaints_repo;
pub mod lookups_repo;
pub mod paged_query;
pub mod reviews_repo;
pub mod search;
pub mod stats_repo;
pub mod users_repo;

pub use complaints_repo::ComplaintsRepository;
pub use lookups_repo::LookupsRepository;
pub use reviews_repo::ReviewsRepository;
pub use stats_repo::StatsRepository;
pub use users_repo::UsersRepository;
