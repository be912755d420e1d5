use crate::config::Config;
use anyhow::Context;
use axum::http::Uri;
use axum::response::IntoResponse;
use axum::{body::Body, http::Request, Router};
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_request_id::{RequestId, RequestIdLayer};
use tracing::info_span;

/// Defines a common error type to use for all request handlers
mod error;

/// Contains all the routes of the application
mod routes;

pub use error::{Error, Result};

use tower_http::trace::TraceLayer;

/// Shared state handed to every request handler.
///
/// `PgPool` is reference-counted internally, so cloning the context is cheap.
/// No current route touches the pool; it is carried here for the handlers
/// that will query it.
#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<Config>,
    pub db: PgPool,
}

/// Assembles the application router: the public routes, a JSON 404 fallback,
/// and the middleware stack (request IDs, per-request tracing spans,
/// unrestricted CORS).
pub fn app(context: ApiContext) -> Router {
    Router::<ApiContext>::new()
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(RequestIdLayer)
                .layer(
                    TraceLayer::new_for_http().make_span_with(move |request: &Request<Body>| {
                        let request_id = request
                            .extensions()
                            .get::<RequestId>()
                            .map(ToString::to_string)
                            .unwrap_or_else(|| "unknown".into());

                        info_span!(
                            "request",
                            id = %request_id,
                            method = %request.method(),
                            uri = %request.uri()
                        )
                    }),
                )
                .layer(CorsLayer::permissive()),
        )
        .fallback(not_found_handler)
        .with_state(context)
}

pub async fn serve(config: Config, db: PgPool) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let app = app(ApiContext {
        config: Arc::new(config),
        db,
    });

    tracing::info!("backend listening on {addr}");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .context("error running HTTP server")
}

async fn not_found_handler(_: Uri) -> impl IntoResponse {
    Error::NotFound
}
