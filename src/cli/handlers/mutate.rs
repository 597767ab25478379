use anyhow::Result;

use super::{CommandContext, execute_and_print};

pub fn handle_mutate(ctx: &CommandContext, mutation: &str, variables: Option<&str>) -> Result<()> {
    execute_and_print(ctx, &wrap_mutation(mutation), variables)
}

/// Wrap a bare selection in `mutation { }`; full operations pass through so
/// they can declare variables.
fn wrap_mutation(body: &str) -> String {
    let trimmed = body.trim_start();
    let is_operation = trimmed
        .strip_prefix("mutation")
        .is_some_and(|rest| !rest.starts_with(|c: char| c.is_alphanumeric() || c == '_'));

    if is_operation {
        body.to_string()
    } else {
        format!("mutation {{ {} }}", body)
    }
}
