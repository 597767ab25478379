use std::net::IpAddr;

use anyhow::{Context, Result};

use crate::graphql::run_server;

use super::CommandContext;

pub fn handle_serve(ctx: &CommandContext, host: Option<IpAddr>, port: Option<u16>) -> Result<()> {
    let mut settings = ctx.config.server.clone();
    if let Some(h) = host {
        settings.host = h;
    }
    if let Some(p) = port {
        settings.port = p;
    }
    let addr = settings.socket_addr();

    println!("Starting GraphQL server on http://{}", addr);
    if settings.graphiql {
        println!("GraphiQL: http://{}", addr);
    }
    tracing::info!(users = ctx.store.len(), "Store seeded");

    tokio::runtime::Runtime::new()?
        .block_on(run_server(ctx.schema(), addr, settings.graphiql))
        .with_context(|| format!("GraphQL server on {} failed", addr))?;
    Ok(())
}
