use anyhow::Result;

use super::{CommandContext, execute_and_print};

pub fn handle_query(ctx: &CommandContext, query: &str, variables: Option<&str>) -> Result<()> {
    execute_and_print(ctx, query, variables)
}
