//! 银行产品推荐卡片

pub mod handler;
pub mod markup;
pub mod model;
pub mod service;
pub mod view;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
use handler::AppState;

/// 构建产品卡片路由
pub fn router(state: AppState, timeout: Duration) -> Router {
    Router::new()
        .route("/", get(handler::index))
        .route("/api/products", get(handler::list_products))
        .route("/api/product-list/render", post(handler::render_products))
        .route("/health", get(handler::health_check))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(timeout))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
