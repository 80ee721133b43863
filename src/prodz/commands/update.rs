use crate::commands::{CmdMessage, CmdResult, Outcome, ProductUpdate};
use crate::error::Result;
use crate::model::Product;
use crate::store::CatalogStore;

use super::helpers::{code_taken, position_by_id};

pub fn run<S: CatalogStore>(
    store: &mut S,
    id: u64,
    update: &ProductUpdate,
) -> Result<CmdResult> {
    let mut products = store.load()?;
    let mut result = CmdResult::default();

    let pos = match position_by_id(&products, id) {
        Some(pos) => pos,
        None => {
            result.outcome = Outcome::NotFound(id);
            result.add_message(CmdMessage::error(format!("Product not found: {}", id)));
            return Ok(result);
        }
    };

    if let Some(code) = &update.code {
        if code_taken(&products, code, Some(id)) {
            result.outcome = Outcome::DuplicateCode(code.clone());
            result.add_message(CmdMessage::error(format!("Code already exists: {}", code)));
            return Ok(result);
        }
    }

    apply(&mut products[pos], update);
    let product = products[pos].clone();
    store.save(&products)?;

    result.add_message(CmdMessage::success(format!(
        "Product updated ({}): {}",
        id, product.title
    )));
    result.affected.push(product);
    Ok(result)
}

/// Overlay the populated fields of `update` on `product`. The stored id
/// always wins, even when the update carries one.
fn apply(product: &mut Product, update: &ProductUpdate) {
    if let Some(title) = &update.title {
        product.title = title.clone();
    }
    if let Some(description) = &update.description {
        product.description = description.clone();
    }
    if let Some(price) = update.price {
        product.price = price;
    }
    if let Some(thumbnail) = &update.thumbnail {
        product.thumbnail = thumbnail.clone();
    }
    if let Some(code) = &update.code {
        product.code = code.clone();
    }
    if let Some(stock) = update.stock {
        product.stock = stock;
    }
}
