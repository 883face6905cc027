//! 产品推荐数据模型

use serde::{
    de::{value::MapAccessDeserializer, MapAccess, SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use std::fmt;

/// 银行产品记录
///
/// 由调用方提供，视图层只读。`id` 在同一次渲染的集合内应唯一，
/// 仅用作列表项的稳定键，不做任何语义解释，也不在内部校验。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Product {
    /// 缺失时为 0
    #[serde(default)]
    pub id: i64,
    /// 缺失或为 null 时按空字符串处理，渲染为空标题
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    /// 保留字段，当前不影响渲染
    #[serde(default)]
    pub priority: Option<bool>,
    #[serde(default)]
    pub link: Option<String>,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            note: None,
            priority: None,
            link: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_priority(mut self, priority: bool) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn description_text(&self) -> Option<&str> {
        present(&self.description)
    }

    pub fn note_text(&self) -> Option<&str> {
        present(&self.note)
    }

    pub fn link_target(&self) -> Option<&str> {
        present(&self.link)
    }
}

/// 可选字段只有在存在且非空时才算“有内容”
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// 渲染请求体，`products` 可以为 null 或省略
#[derive(Debug, Default, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub products: Option<Vec<Product>>,
}

/// 卡片渲染输入：数组按产品列表解析，对象按 `{"products": ...}` 解析
#[derive(Debug)]
pub enum ProductsInput {
    List(Vec<Product>),
    Wrapped(RenderRequest),
}

impl<'de> Deserialize<'de> for ProductsInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct InputVisitor;

        impl<'de> Visitor<'de> for InputVisitor {
            type Value = ProductsInput;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("产品数组或包含 products 字段的对象")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut products = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(product) = seq.next_element::<Product>()? {
                    products.push(product);
                }
                Ok(ProductsInput::List(products))
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                RenderRequest::deserialize(MapAccessDeserializer::new(map)).map(ProductsInput::Wrapped)
            }
        }

        deserializer.deserialize_any(InputVisitor)
    }
}

impl ProductsInput {
    pub fn into_products(self) -> Option<Vec<Product>> {
        match self {
            ProductsInput::List(products) => Some(products),
            ProductsInput::Wrapped(request) => request.products,
        }
    }
}
