//! 产品推荐卡片处理器

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use tracing::{error, info};

use super::{
    model::{Product, ProductsInput},
    service::ProductListService,
};
use crate::core::{error::CoreError, response::ApiResponse};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductListService,
}

/// 主页：渲染目录中的产品卡片
///
/// 目录读取失败时记录错误并按空目录处理，页面照常返回。
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let card = match state.product_service.render_catalog().await {
        Ok(node) => node.map(|node| node.to_html()).unwrap_or_default(),
        Err(e) => {
            error!("加载产品目录失败: {}", e);
            String::new()
        }
    };
    Html(page(&card))
}

/// 获取目录中的产品
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Product>>, CoreError> {
    let products = state.product_service.list_products().await?;
    Ok(ApiResponse::success(products))
}

/// 渲染请求体中的产品集合
///
/// 空集合、`null` 或省略 `products` 时返回 204。
pub async fn render_products(
    State(state): State<AppState>,
    Json(input): Json<Option<ProductsInput>>,
) -> Response {
    let products = input.and_then(ProductsInput::into_products);

    match state.product_service.render(products.as_deref()) {
        Some(node) => {
            info!("渲染了 {} 个产品", products.as_ref().map_or(0, Vec::len));
            Html(node.to_html()).into_response()
        }
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// 健康检查
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn page(card: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="id">
<head>
    <meta charset="UTF-8">
    <title>Rekomendasi Produk</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 40px; background: #f5f5f5; }}
        .product-list {{ max-width: 800px; margin: 0 auto; background: white; padding: 24px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }}
        .product-list__items {{ list-style: none; padding: 0; }}
        .product-item {{ padding: 12px 0; border-bottom: 1px solid #e5e7eb; }}
        .product-item:last-child {{ border-bottom: none; }}
        .product-name {{ margin: 0 0 4px; }}
        .product-description {{ margin: 0 0 4px; color: #374151; }}
        .product-note {{ margin: 0 0 4px; font-size: 0.9em; }}
        .product-link {{ color: #0b5cab; text-decoration: none; }}
        .product-link:hover {{ text-decoration: underline; }}
    </style>
</head>
<body>
{card}
</body>
</html>
"#
    )
}
