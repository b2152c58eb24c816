//! Database connection management module
//!
//! Wraps the pooled MongoDB client and hands out collection handles. All
//! collections are accessed as loosely-typed `bson::Document`s; the
//! portal deliberately carries no schema layer on top of the store.
//!
//! # Basic usage
//!
//! ```rust,ignore
//! use complain_portal_backend::config::AppConfig;
//! use complain_portal_backend::db::{collections, Database};
//!
//! let config = AppConfig::from_env();
//! let database = Database::new(&config.db).await?;
//! let users = database.collection(collections::USERS);
//! ```

use log::info;
use mongodb::bson::Document;
use mongodb::{options::ClientOptions, Client, Collection};

use crate::config::DbConfig;

/// Names of the five portal collections.
pub mod collections {
    pub const USERS: &str = "users";
    pub const COMPLAINTS: &str = "complains";
    pub const REVIEWS: &str = "reviews";
    pub const HOTLINES: &str = "hotlines";
    pub const HOME_REVIEWS: &str = "homeReview";
}

/// MongoDB connection wrapper
///
/// Holds the pooled client and the database name; cloning is cheap and
/// the handle is safe to share across workers.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// Connects to MongoDB and verifies the connection with a ping.
    pub async fn new(config: &DbConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        // Shows up in server logs and monitoring
        client_options.app_name = Some("complain_portal".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB connected: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// Returns the `mongodb::Database` this service works against.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// Returns a handle to one of the portal collections.
    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.get_database().collection::<Document>(name)
    }
}
