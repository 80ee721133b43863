use serde::{Deserialize, Serialize};

/// A catalog entry. The `id` is assigned by the store on creation and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: u32,
}

impl Product {
    pub fn from_fields(id: u64, fields: NewProduct) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            price: fields.price,
            thumbnail: fields.thumbnail,
            code: fields.code,
            stock: fields.stock,
        }
    }
}

/// Caller-supplied fields for a new product, before an id exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: u32,
}

impl NewProduct {
    /// Names of required fields that are empty (strings) or zero (numbers).
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push("title");
        }
        if self.description.is_empty() {
            missing.push("description");
        }
        if self.price == 0.0 || self.price.is_nan() {
            missing.push("price");
        }
        if self.thumbnail.is_empty() {
            missing.push("thumbnail");
        }
        if self.code.is_empty() {
            missing.push("code");
        }
        if self.stock == 0 {
            missing.push("stock");
        }
        missing
    }
}
