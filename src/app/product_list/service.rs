//! 产品目录与卡片渲染服务

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use super::{markup::Node, model::Product, view};
use crate::core::error::CoreError;

/// 产品集合的来源
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, CoreError>;
}

/// 内存中的产品目录
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// 从 JSON 数组文件加载，保持文件中的顺序
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let products: Vec<Product> = serde_json::from_str(&content).map_err(|e| {
            CoreError::InternalServerError(format!(
                "无法解析产品文件 {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        info!("从 {} 加载了 {} 个产品", path.as_ref().display(), products.len());
        Ok(Self::new(products))
    }
}

#[async_trait]
impl ProductCatalog for StaticCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, CoreError> {
        Ok(self.products.clone())
    }
}

/// PostgreSQL 产品目录，只返回未删除的产品
#[cfg(feature = "database")]
#[derive(Clone)]
pub struct PgCatalog {
    pool: sqlx::PgPool,
}

#[cfg(feature = "database")]
impl PgCatalog {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[cfg(feature = "database")]
#[async_trait]
impl ProductCatalog for PgCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, CoreError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id::BIGINT AS id, COALESCE(name, '') AS name,
                   description, note, priority, link
            FROM products
            WHERE deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("数据库返回 {} 个产品", products.len());
        Ok(products)
    }
}

/// 产品推荐卡片服务
#[derive(Clone)]
pub struct ProductListService {
    catalog: Arc<dyn ProductCatalog>,
}

impl ProductListService {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, CoreError> {
        self.catalog.list_products().await
    }

    /// 渲染调用方提供的产品集合
    pub fn render(&self, products: Option<&[Product]>) -> Option<Node> {
        let node = view::render(products);
        debug!(
            items = products.map_or(0, |p| p.len()),
            rendered = node.is_some(),
            "渲染产品卡片"
        );
        node
    }

    /// 渲染目录中的全部产品
    pub async fn render_catalog(&self) -> Result<Option<Node>, CoreError> {
        let products = self.list_products().await?;
        Ok(self.render(Some(products.as_slice())))
    }
}
