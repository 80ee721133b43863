use crate::commands::{CmdMessage, CmdResult, Outcome};
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &S, limit: i64) -> Result<CmdResult> {
    if limit <= 0 {
        let mut result = CmdResult::default().with_outcome(Outcome::InvalidLimit(limit));
        result.add_message(CmdMessage::error(format!("Invalid limit: {}", limit)));
        return Ok(result);
    }

    let mut products = store.load()?;
    products.truncate(limit as usize);
    Ok(CmdResult::default().with_listed(products))
}
