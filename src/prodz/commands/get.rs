use crate::commands::{CmdMessage, CmdResult, Outcome};
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &S, id: u64) -> Result<CmdResult> {
    let products = store.load()?;
    let mut result = CmdResult::default();

    match products.into_iter().find(|p| p.id == id) {
        Some(product) => result.listed.push(product),
        None => {
            result.outcome = Outcome::NotFound(id);
            result.add_message(CmdMessage::info(format!("Product not found: {}", id)));
        }
    }

    Ok(result)
}
