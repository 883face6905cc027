//! 命令行渲染产品卡片
//!
//! 用法: render_card [products.json]
//! 未指定文件时从标准输入读取。输入可以是产品数组，也可以是
//! `{"products": [...]}`。无内容时不输出任何内容。

use anyhow::{Context, Result};
use std::io::Read;

use bjb_product_card::app::product_list::model::ProductsInput;
use bjb_product_card::render_html;

fn main() -> Result<()> {
    let content = match std::env::args().nth(1) {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("无法读取 {}", path))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("无法读取标准输入")?;
            buffer
        }
    };

    let input: Option<ProductsInput> =
        serde_json::from_str(&content).context("无法解析产品 JSON")?;
    let products = input.and_then(ProductsInput::into_products);

    let html = render_html(products.as_deref());
    if !html.is_empty() {
        println!("{}", html);
    }
    Ok(())
}
