use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::{get, post_service},
};
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::RosterSchema;

/// HTTP routes: `POST /` executes requests, `GET /` serves GraphiQL if enabled.
pub fn router(schema: RosterSchema, graphiql: bool) -> Router {
    let service = GraphQL::new(schema);
    if graphiql {
        Router::new().route("/", get(graphiql_page).post_service(service))
    } else {
        Router::new().route("/", post_service(service))
    }
}

async fn graphiql_page() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

pub async fn run_server(
    schema: RosterSchema,
    addr: SocketAddr,
    graphiql: bool,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, schema, graphiql).await
}

/// Serve on an already bound listener until Ctrl-C.
pub(crate) async fn serve(
    listener: TcpListener,
    schema: RosterSchema,
    graphiql: bool,
) -> std::io::Result<()> {
    info!(addr = %listener.local_addr()?, graphiql, "GraphQL server listening");
    axum::serve(listener, router(schema, graphiql))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
