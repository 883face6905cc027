//! 产品推荐卡片视图
//!
//! 纯函数：输入产品集合，输出视觉树或空结果，不排序、不过滤、不校验。

use super::markup::{Element, Node};
use super::model::Product;

pub const HEADING: &str = "Rekomendasi Produk Bank BJB";
pub const LINK_LABEL: &str = "Lihat produk →";

/// 渲染产品列表面板
///
/// `products` 为 `None` 或空切片时不渲染任何内容。
/// 调用方需保证集合内 `id` 唯一，列表项以 `data-key` 携带该键。
pub fn render(products: Option<&[Product]>) -> Option<Node> {
    let products = match products {
        Some(products) if !products.is_empty() => products,
        _ => return None,
    };

    let list = Element::new("ol")
        .class("product-list__items")
        .children(products.iter().map(render_item));

    Some(
        Element::new("section")
            .class("product-list")
            .child(Element::new("h3").class("product-list__heading").text(HEADING))
            .child(list)
            .into(),
    )
}

/// 渲染为 HTML 片段，无内容时返回空字符串
pub fn render_html(products: Option<&[Product]>) -> String {
    render(products).map(|node| node.to_html()).unwrap_or_default()
}

fn render_item(product: &Product) -> Node {
    let mut item = Element::new("li")
        .class("product-item")
        .attr("data-key", product.id.to_string())
        .child(Element::new("h4").class("product-name").text(product.name.as_str()));

    if let Some(description) = product.description_text() {
        item = item.child(Element::new("p").class("product-description").text(description));
    }

    if let Some(note) = product.note_text() {
        item = item.child(
            Element::new("p")
                .class("product-note")
                .attr("style", "font-style: italic; color: #6b7280;")
                .text(note),
        );
    }

    if let Some(link) = product.link_target() {
        item = item.child(
            Element::new("a")
                .class("product-link")
                .attr("href", link)
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .text(LINK_LABEL),
        );
    }

    item.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(item: &Element) -> Vec<&str> {
        item.child_elements()
            .filter_map(|child| child.attribute("class"))
            .collect()
    }

    #[test]
    fn test_absent_or_empty_renders_nothing() {
        assert_eq!(render(None), None);
        assert_eq!(render(Some(&[][..])), None);
        assert_eq!(render_html(None), "");
    }

    #[test]
    fn test_item_without_optional_fields_has_only_name() {
        let products = vec![Product::new(1, "Tabungan Emas")];
        let panel = render(Some(products.as_slice())).unwrap();
        let items = panel.as_element().unwrap().find_all_by_tag("li");
        assert_eq!(items.len(), 1);
        assert_eq!(classes(items[0]), vec!["product-name"]);
        assert_eq!(items[0].text_content(), "Tabungan Emas");
    }

    #[test]
    fn test_note_follows_name_when_description_missing() {
        let products = vec![Product::new(4, "Deposito").with_note("Promo berakhir bulan ini")];
        let panel = render(Some(products.as_slice())).unwrap();
        let items = panel.as_element().unwrap().find_all_by_tag("li");
        assert_eq!(classes(items[0]), vec!["product-name", "product-note"]);
    }

    #[test]
    fn test_priority_does_not_change_output() {
        let plain = vec![Product::new(5, "Giro Korporasi")];
        let flagged = vec![Product::new(5, "Giro Korporasi").with_priority(true)];
        assert_eq!(render(Some(plain.as_slice())), render(Some(flagged.as_slice())));
    }
}
