//! # Roster - an in-memory user directory over GraphQL
//!
//! Roster keeps a list of users in process memory and exposes it through a
//! GraphQL API: a `users` query, add/delete/update mutations, and a couple of
//! test queries. Nothing is persisted; every restart begins from the seed.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server on http://localhost:4000
//! roster serve
//!
//! # Run a one-off query against a freshly seeded store
//! roster query '{ users { id name email } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema and HTTP server
//! - [`model`]: Data models (User, NewUser, MutationEnvelope)
//! - [`resolvers`]: Behaviour behind each query and mutation
//! - [`storage`]: The in-memory user store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.roster.yml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `RosterError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, root resolvers and server.
///
/// Provides the async-graphql schema and its axum HTTP endpoint.
pub mod graphql;

pub mod logging;

/// Data models for roster.
pub mod model;

pub mod resolvers;

/// In-memory storage layer.
///
/// Holds users and assigns their ids.
pub mod storage;
