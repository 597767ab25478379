use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roster")]
#[command(
    author,
    version,
    about = "An in-memory user directory served over GraphQL"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .roster.yml by default)
    #[arg(long, global = true, env = "ROSTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, env = "ROSTER_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .roster.yml to the current directory
    Init,

    /// Start GraphQL HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long, env = "ROSTER_HOST")]
        host: Option<std::net::IpAddr>,

        /// Port to listen on (overrides config)
        #[arg(short, long, env = "ROSTER_PORT")]
        port: Option<u16>,
    },

    /// Execute a GraphQL query against a freshly seeded store
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (wraps a bare body in 'mutation { }')
    Mutate {
        /// Mutation body, or a full 'mutation(...) { }' operation when using variables
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },
}
