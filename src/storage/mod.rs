//! In-memory storage layer for roster.
//!
//! Users live in process memory only; every change is lost on restart.
//!
//! ## Components
//!
//! - [`UserCollection`]: The ordered collection and its id counter
//! - [`UserStore`]: Shared, lock-guarded handle used by the resolvers

mod user_store;

pub use user_store::{UserCollection, UserStore, default_seed};
