//! GraphQL schema, resolvers and HTTP server for roster.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! roster serve --port 4000
//!
//! # Execute a query from CLI
//! roster query '{ users { id name email } }'
//!
//! # Execute a mutation from CLI
//! roster mutate 'addUser(user: { name: "Ada", email: "ada@x" }) { code user { id } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `users`, `test`, `repeat`
//! - **Mutations**: `addUser`, `deleteUser`, `updateUserEmail`, `updateUserName`

mod schema;
mod server;
mod types;

pub use schema::{RosterSchema, build_schema, execute};
pub use server::{router, run_server};
pub use types::*;
