//! Health Lambda - Reports process and environment state for deploy debugging.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use tracing::info;
use tracing_subscriber::EnvFilter;

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    info!(method = %event.method(), path = event.uri().path(), "Health check");
    shared::health::health_response(|key| std::env::var(key).ok())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    run(service_fn(handler)).await
}
