use bjb_product_card::app::product_list::view::{HEADING, LINK_LABEL};
use bjb_product_card::{render, render_html, Element, Node, Product};

fn panel(products: &[Product]) -> Node {
    render(Some(products)).expect("非空集合应渲染面板")
}

fn items(node: &Node) -> Vec<&Element> {
    node.as_element().unwrap().find_all_by_tag("li")
}

fn child_classes(item: &Element) -> Vec<&str> {
    item.child_elements()
        .filter_map(|child| child.attribute("class"))
        .collect()
}

fn sample_products() -> Vec<Product> {
    vec![
        Product::new(1, "Tabungan Emas"),
        Product::new(2, "KPR BJB")
            .with_description("Kredit rumah")
            .with_link("https://bjb.co.id/kpr"),
        Product::new(3, "Giro Korporasi")
            .with_description("Rekening giro untuk badan usaha")
            .with_note("Khusus perusahaan menengah dan besar")
            .with_priority(true),
        Product::new(4, "Deposito").with_note("Promo berakhir bulan ini"),
    ]
}

#[test]
fn test_empty_input_renders_nothing() {
    assert!(render(None).is_none());
    assert!(render(Some(&[][..])).is_none());
    assert_eq!(render_html(None), "");
    assert_eq!(render_html(Some(&[][..])), "");
}

#[test]
fn test_single_product_with_name_only() {
    let products = vec![Product::new(1, "Tabungan Emas")];
    let node = panel(&products);
    let root = node.as_element().unwrap();

    assert_eq!(root.tag, "section");
    assert_eq!(root.find_all_by_tag("h3")[0].text_content(), HEADING);

    let items = items(&node);
    assert_eq!(items.len(), 1);
    assert_eq!(child_classes(items[0]), vec!["product-name"]);
    assert_eq!(items[0].text_content(), "Tabungan Emas");
    assert!(items[0].find_all_by_tag("a").is_empty());
}

#[test]
fn test_product_with_description_and_link() {
    let products = vec![Product::new(2, "KPR BJB")
        .with_description("Kredit rumah")
        .with_link("https://bjb.co.id/kpr")];
    let node = panel(&products);
    let item = items(&node)[0];

    assert_eq!(
        child_classes(item),
        vec!["product-name", "product-description", "product-link"]
    );

    let link = item.find_all_by_tag("a")[0];
    assert_eq!(link.text_content(), LINK_LABEL);
    assert_eq!(link.attribute("href"), Some("https://bjb.co.id/kpr"));
    assert_eq!(link.attribute("target"), Some("_blank"));
    assert_eq!(link.attribute("rel"), Some("noopener noreferrer"));
}

#[test]
fn test_note_without_description_follows_name() {
    let products = vec![
        Product::new(1, "Tabungan Emas"),
        Product::new(4, "Deposito").with_note("Promo berakhir bulan ini"),
    ];
    let node = panel(&products);
    let second = items(&node)[1];

    assert_eq!(child_classes(second), vec!["product-name", "product-note"]);
    let note = second.find_all_by_tag("p")[0];
    assert_eq!(note.text_content(), "Promo berakhir bulan ini");
    assert!(note.attribute("style").unwrap().contains("italic"));
}

#[test]
fn test_items_follow_input_order_and_keys() {
    let products = sample_products();
    let node = panel(&products);
    let items = items(&node);

    assert_eq!(items.len(), products.len());
    let keys: Vec<&str> = items.iter().filter_map(|i| i.attribute("data-key")).collect();
    assert_eq!(keys, vec!["1", "2", "3", "4"]);

    let names: Vec<String> = items
        .iter()
        .map(|i| i.find_all_by_tag("h4")[0].text_content())
        .collect();
    assert_eq!(names, vec!["Tabungan Emas", "KPR BJB", "Giro Korporasi", "Deposito"]);
}

#[test]
fn test_empty_optional_strings_are_omitted() {
    let products = vec![Product::new(5, "Payroll Service")
        .with_description("")
        .with_note("")
        .with_link("")];
    let node = panel(&products);
    assert_eq!(child_classes(items(&node)[0]), vec!["product-name"]);
}

#[test]
fn test_missing_name_renders_empty_heading() {
    let products: Vec<Product> = serde_json::from_str(r#"[{"id": 9}]"#).unwrap();
    let html = render_html(Some(products.as_slice()));
    assert!(html.contains(r#"<h4 class="product-name"></h4>"#));
}

#[test]
fn test_render_is_idempotent() {
    let products = sample_products();
    assert_eq!(render(Some(products.as_slice())), render(Some(products.as_slice())));
    assert_eq!(
        render_html(Some(products.as_slice())),
        render_html(Some(products.as_slice()))
    );
}

#[test]
fn test_html_fragment_shape() {
    let products = vec![Product::new(2, "KPR BJB")
        .with_description("Kredit rumah")
        .with_link("https://bjb.co.id/kpr")];
    let html = render_html(Some(products.as_slice()));

    assert!(html.starts_with(r#"<section class="product-list">"#));
    assert!(html.contains(r#"<ol class="product-list__items">"#));
    assert!(!html.contains("<ul"));
    assert!(html.contains("<h3 class=\"product-list__heading\">Rekomendasi Produk Bank BJB</h3>"));
    assert!(html.contains(
        r#"<a class="product-link" href="https://bjb.co.id/kpr" target="_blank" rel="noopener noreferrer">Lihat produk →</a>"#
    ));
    assert!(html.ends_with("</section>"));
}

#[test]
fn test_user_text_is_escaped() {
    let products = vec![Product::new(1, "<b>Tabungan</b>")
        .with_link("https://bjb.co.id/?a=1&b=\"2\"")];
    let html = render_html(Some(products.as_slice()));

    assert!(html.contains("&lt;b&gt;Tabungan&lt;/b&gt;"));
    assert!(html.contains("href=\"https://bjb.co.id/?a=1&amp;b=&quot;2&quot;\""));
    assert!(!html.contains("<b>"));
}
