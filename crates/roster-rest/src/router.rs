//! Main application router.

use crate::{
    controllers::{health_controller, user_controller},
    middleware::{logging_middleware, preflight_middleware, PreflightPolicy},
    responses::not_found,
    state::AppState,
};
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, StatusCode},
    middleware, Router,
};
use roster_config::{AppConfig, CorsConfig, ServerConfig};
use roster_service::UserService;
use shaku::{HasComponent, Module};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Creates the main application router from a Shaku module.
///
/// The module must provide the `UserService` component.
pub fn create_router<M>(module: &M, config: &AppConfig) -> Router
where
    M: Module + HasComponent<dyn UserService>,
{
    create_router_with_state(AppState::from_module(module), config)
}

/// Creates the main application router around an existing state.
pub fn create_router_with_state(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        .merge(user_controller::router())
        .merge(health_controller::router())
        .fallback(not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(timeout_layer(&config.server));

    if config.cors.enabled {
        router = router
            .layer(create_cors_layer(&config.cors))
            .layer(middleware::from_fn_with_state(
                PreflightPolicy::from_config(&config.cors),
                preflight_middleware,
            ));
    }

    if config.observability.tracing_enabled {
        router = router.layer(TraceLayer::new_for_http());
    }

    let router = router.layer(middleware::from_fn(logging_middleware));

    info!(
        "Router created with /users and /health (cors: {}, timeout: {}s)",
        config.cors.enabled, config.server.request_timeout_secs
    );
    router
}

/// Creates the request timeout layer, answering 408 when it fires.
pub fn timeout_layer(config: &ServerConfig) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, config.request_timeout())
}

/// Creates the CORS layer for non-preflight responses.
fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|name| match Method::from_bytes(name.to_uppercase().as_bytes()) {
            Ok(method) => Some(method),
            Err(_) => {
                warn!("Ignoring invalid CORS method: {}", name);
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(methods);

    if config.allows_any_origin() {
        layer.allow_origin(Any)
    } else {
        let origins = config
            .allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect::<Vec<_>>();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
