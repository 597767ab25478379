//! Data models for roster.
//!
//! - [`User`]: A directory entry with a store-assigned id
//! - [`NewUser`]: Creation input, every field optional
//! - [`MutationEnvelope`]: The uniform result of every mutation

mod envelope;
mod user;

pub use envelope::{CODE_NOT_FOUND, CODE_OK, MutationEnvelope};
pub use user::{NewUser, User};
