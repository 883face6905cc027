//! # BJB 产品推荐卡片
//!
//! 将银行产品推荐列表渲染为卡片：
//! - `app::product_list::view` 纯渲染，输入产品集合，输出视觉树或空结果
//! - `app::product_list::markup` 视觉树与 HTML 序列化
//! - `app::product_list::service` 产品目录（静态 JSON 或 PostgreSQL）
//! - HTTP 服务、配置与日志基础设施

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::product_list::markup::{Element, Node};
pub use app::product_list::model::Product;
pub use app::product_list::view::{render, render_html};
