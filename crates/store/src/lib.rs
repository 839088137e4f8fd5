//! Profile data store for Waitline.
//!
//! Owns the profile aggregate fetched from the backend, tracks the fetch
//! lifecycle on a small status envelope, and applies optimistic
//! aggregate-setting updates, keeping the denormalized active character in
//! lockstep with the character list.

pub mod state;
pub mod store;

pub use state::{FetchStatus, ProfileState, StoreAction};
pub use store::ProfileStore;
