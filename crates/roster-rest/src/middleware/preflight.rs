//! CORS preflight middleware.
//!
//! Every `OPTIONS` request is answered here with `204 No Content` and the
//! configured CORS headers, whether or not it carries
//! `Access-Control-Request-Method`. The request never reaches the router.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use roster_config::CorsConfig;
use tracing::{debug, warn};

const DEFAULT_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

/// Which origins a preflight may be granted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// `Access-Control-Allow-Origin: *`.
    Any,
    /// Only these origins, echoed back when they match the request.
    List(Vec<HeaderValue>),
}

/// Headers sent in answer to a preflight request.
#[derive(Debug, Clone)]
pub struct PreflightPolicy {
    origins: AllowedOrigins,
    methods: HeaderValue,
}

impl PreflightPolicy {
    /// Builds the policy from CORS configuration.
    ///
    /// Origins that are not valid header values are skipped.
    pub fn from_config(config: &CorsConfig) -> Self {
        let origins = if config.allows_any_origin() {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(
                config
                    .allowed_origins
                    .iter()
                    .filter_map(|origin| match HeaderValue::from_str(origin) {
                        Ok(value) => Some(value),
                        Err(_) => {
                            warn!("Ignoring invalid CORS origin: {}", origin);
                            None
                        }
                    })
                    .collect(),
            )
        };

        let methods = HeaderValue::from_str(&config.allowed_methods.join(","))
            .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_METHODS));

        Self { origins, methods }
    }

    /// Returns the `Access-Control-Allow-Origin` value for a request origin.
    pub fn allow_origin(&self, request_origin: Option<&HeaderValue>) -> Option<HeaderValue> {
        match &self.origins {
            AllowedOrigins::Any => Some(HeaderValue::from_static("*")),
            AllowedOrigins::List(list) => {
                request_origin.filter(|origin| list.contains(origin)).cloned()
            }
        }
    }

    /// Builds the `204` preflight response for the given request headers.
    pub fn respond(&self, request_headers: &HeaderMap) -> Response {
        let mut response = StatusCode::NO_CONTENT.into_response();
        let headers = response.headers_mut();

        if let Some(origin) = self.allow_origin(request_headers.get(header::ORIGIN)) {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        }
        headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, self.methods.clone());
        if let Some(requested) = request_headers.get(header::ACCESS_CONTROL_REQUEST_HEADERS) {
            headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, requested.clone());
            headers.append(
                header::VARY,
                HeaderValue::from_static("Access-Control-Request-Headers"),
            );
        }
        if matches!(self.origins, AllowedOrigins::List(_)) {
            headers.append(header::VARY, HeaderValue::from_static("Origin"));
        }

        response
    }
}

/// Answers `OPTIONS` requests; everything else passes through.
pub async fn preflight_middleware(
    State(policy): State<PreflightPolicy>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() != Method::OPTIONS {
        return next.run(request).await;
    }

    debug!("Answering preflight for {}", request.uri());
    policy.respond(request.headers())
}
