// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

type IpRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

fn build_layer(replenish_every_secs: u64, burst: u32) -> IpRateLimitLayer {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(replenish_every_secs);
    builder.burst_size(burst);
    let config = builder
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .expect("valid rate limit configuration");

    GovernorLayer::new(config)
}

/// Credential guessing guard: a burst of 5 attempts, then one every 6 seconds per IP.
pub fn login_rate_limit_layer() -> IpRateLimitLayer {
    static LIMITER: OnceLock<IpRateLimitLayer> = OnceLock::new();
    LIMITER.get_or_init(|| build_layer(6, 5)).clone()
}

/// Contact form spam guard: a burst of 3 submissions, then one per minute per IP.
pub fn contact_rate_limit_layer() -> IpRateLimitLayer {
    static LIMITER: OnceLock<IpRateLimitLayer> = OnceLock::new();
    LIMITER.get_or_init(|| build_layer(60, 3)).clone()
}
