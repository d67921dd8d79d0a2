use axum::{
    Router,
    http::{HeaderValue, StatusCode},
    middleware,
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{Config, ServerConfig};
use crate::db::Store;
use crate::services::{
    CartRepository, MovieRepository, RepositoryError, SeaOrmCartRepository,
    SeaOrmMovieRepository,
};

mod cart;
mod error;
mod movies;
mod observability;
mod system;
mod types;

pub use error::ApiError;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<dyn MovieRepository>,

    pub cart: Arc<dyn CartRepository>,

    pub server: ServerConfig,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    /// State over arbitrary repository implementations.
    #[must_use]
    pub fn with_repositories(
        movies: Arc<dyn MovieRepository>,
        cart: Arc<dyn CartRepository>,
        server: ServerConfig,
    ) -> Self {
        Self {
            movies,
            cart,
            server,
            prometheus_handle: None,
        }
    }

    #[must_use]
    pub fn repository_error(&self, err: RepositoryError) -> ApiError {
        ApiError::repository(err, self.server.expose_error_details)
    }
}

#[must_use]
pub fn create_app_state(
    store: Store,
    config: &Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    let movies = Arc::new(SeaOrmMovieRepository::new(store.clone()));
    let cart = Arc::new(SeaOrmCartRepository::new(
        store,
        config.cart.movie_reference,
    ));

    Arc::new(AppState {
        movies,
        cart,
        server: config.server.clone(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: &Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_url,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;
    Ok(create_app_state(store, config, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = &state.server.cors_allowed_origins;
    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };
    let timeout_seconds = state.server.request_timeout_seconds;

    let routes = Router::new()
        .route("/hello", get(system::hello))
        .route("/movies", get(movies::list_movies))
        .route("/movies/filter", get(movies::list_movies))
        .route("/movies/{id}", get(movies::get_movie))
        .route("/cart", post(cart::add_to_cart))
        .route("/cart/{user_id}", get(cart::view_cart))
        .route("/metrics", get(observability::get_metrics))
        .with_state(state);

    // Dropping a timed-out handler future drops its in-flight query.
    let routes = if timeout_seconds > 0 {
        routes.layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(timeout_seconds),
        ))
    } else {
        routes
    };

    routes
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::track_metrics))
}
