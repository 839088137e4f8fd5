//! Wire contract of the Waitline profile endpoints.
//!
//! Models the profile aggregate the backend serves, resolves fetch selectors
//! to concrete endpoints, and provides the HTTP client the profile store
//! drives.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod target;

pub use client::ProfileClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{AggregateSetting, Character, CharacterId, ProfileAggregate, UserId};
pub use target::{FetchSelector, FetchTarget};
