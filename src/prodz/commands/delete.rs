use crate::commands::{CmdMessage, CmdResult, Outcome};
use crate::error::Result;
use crate::store::CatalogStore;

use super::helpers::position_by_id;

pub fn run<S: CatalogStore>(store: &mut S, id: u64) -> Result<CmdResult> {
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

    let product = products.remove(pos);
    store.save(&products)?;

    result.add_message(CmdMessage::success(format!(
        "Product deleted ({}): {}",
        id, product.title
    )));
    result.affected.push(product);
    Ok(result)
}
