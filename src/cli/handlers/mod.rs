mod init;
mod mutate;
mod query;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use serve::handle_serve;

use crate::config::RosterConfig;
use crate::graphql::{RosterSchema, build_schema, execute};
use crate::storage::UserStore;
use anyhow::{Result, bail};
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: RosterConfig,
    pub store: Arc<UserStore>,
}

impl CommandContext {
    pub fn new(config: RosterConfig) -> Self {
        let store = Arc::new(UserStore::seeded(config.store.seed.clone()));
        Self { config, store }
    }

    pub fn schema(&self) -> RosterSchema {
        build_schema(Arc::clone(&self.store))
    }
}

/// Run a request to completion on a fresh runtime and print the JSON response.
///
/// Fails after printing when the response carries GraphQL errors.
fn execute_and_print(ctx: &CommandContext, query: &str, variables: Option<&str>) -> Result<()> {
    let schema = ctx.schema();
    let response = tokio::runtime::Runtime::new()?.block_on(execute(&schema, query, variables))?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    if !response.errors.is_empty() {
        bail!("GraphQL request returned {} error(s)", response.errors.len());
    }
    Ok(())
}
