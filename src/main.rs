//! 产品推荐卡片 HTTP 服务

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

use bjb_product_card::app::product_list::{
    self,
    handler::AppState,
    service::{ProductCatalog, ProductListService, StaticCatalog},
};
use bjb_product_card::config::{self, CatalogSource, Config};
use bjb_product_card::infrastructure::logger::Logger;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load_config().context("加载配置失败")?;
    Logger::init(&config.logging.level);

    info!("启动产品推荐卡片服务...");

    let catalog = build_catalog(&config).await?;
    let state = AppState {
        product_service: ProductListService::new(catalog),
    };
    let app = product_list::router(state, Duration::from_secs(config.http.timeout_seconds));

    let address = config.socket_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("无法绑定到 {}", address))?;

    info!("🚀 服务器运行在 http://{}", address);
    info!("📖 API 端点:");
    info!("   GET  /                        - 产品推荐卡片页面");
    info!("   GET  /api/products            - 产品目录");
    info!("   POST /api/product-list/render - 渲染产品卡片片段");
    info!("   GET  /health                  - 健康检查");

    axum::serve(listener, app).await.context("服务器运行失败")?;
    Ok(())
}

async fn build_catalog(config: &Config) -> Result<Arc<dyn ProductCatalog>> {
    match config.catalog.source {
        CatalogSource::Static => {
            let catalog = match &config.catalog.products_file {
                Some(path) => StaticCatalog::from_json_file(path)
                    .with_context(|| format!("无法加载产品文件 {}", path.display()))?,
                None => {
                    info!("未配置产品文件，目录为空");
                    StaticCatalog::empty()
                }
            };
            Ok(Arc::new(catalog))
        }
        CatalogSource::Database => database_catalog(config).await,
    }
}

#[cfg(feature = "database")]
async fn database_catalog(config: &Config) -> Result<Arc<dyn ProductCatalog>> {
    use bjb_product_card::app::product_list::service::PgCatalog;
    use bjb_product_card::infrastructure::database::DatabaseManager;

    let manager = match (&config.catalog.database, config.catalog.database_url.as_deref()) {
        (Some(params), _) => DatabaseManager::from_params(params).await,
        (None, Some(url)) => DatabaseManager::new(url).await,
        (None, None) => anyhow::bail!("缺少数据库连接配置"),
    }
    .context("数据库连接失败")?;
    Ok(Arc::new(PgCatalog::new(manager.into_pool())))
}

#[cfg(not(feature = "database"))]
async fn database_catalog(_config: &Config) -> Result<Arc<dyn ProductCatalog>> {
    anyhow::bail!("未启用 database 特性，无法使用数据库目录")
}
