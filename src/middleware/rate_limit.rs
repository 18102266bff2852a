use axum::{
    body::Body,
    extract::{ConnectInfo, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Per-IP rate limiting layer applied in front of every route
pub type IpGovernorLayer = GovernorLayer<
    tower_governor::key_extractor::PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware<governor::clock::QuantaInstant>,
    Body,
>;

/// Build the per-IP governor from config.
/// One token is replenished every `rate_limit_per_ms` milliseconds, up to
/// `rate_limit_burst` requests in a burst. Requires the router to be served
/// with `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn create_ip_governor(config: &Config) -> AppResult<IpGovernorLayer> {
    let governor_config = GovernorConfigBuilder::default()
        .per_millisecond(config.rate_limit_per_ms)
        .burst_size(config.rate_limit_burst)
        .finish()
        .ok_or_else(|| {
            AppError::Config(format!(
                "rate limit needs a non-zero period and burst, got {}ms / {}",
                config.rate_limit_per_ms, config.rate_limit_burst
            ))
        })?;

    Ok(GovernorLayer::new(Arc::new(governor_config)))
}

/// Request log wrapped around the whole stack, so governor rejections are
/// seen here too. Failures and 429s go out at warn level.
pub async fn log_request(request: Request, next: Next) -> Response {
    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match status {
        StatusCode::TOO_MANY_REQUESTS => {
            tracing::warn!(%client_ip, %method, %path, "Rate limited");
        }
        s if s.is_client_error() || s.is_server_error() => {
            tracing::warn!(%client_ip, %method, %path, status = s.as_u16(), elapsed_ms, "Request failed");
        }
        s => {
            tracing::debug!(%client_ip, %method, %path, status = s.as_u16(), elapsed_ms, "Request completed");
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_governor_builds_from_defaults() {
        assert!(create_ip_governor(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_burst_is_config_error() {
        let config = Config {
            rate_limit_burst: 0,
            ..Config::default()
        };
        assert!(matches!(create_ip_governor(&config), Err(AppError::Config(_))));
    }
}
