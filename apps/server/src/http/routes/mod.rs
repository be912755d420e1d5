mod health_check;
mod index;

use axum::Router;

use super::ApiContext;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .merge(index::router())
        .merge(health_check::router())
}
