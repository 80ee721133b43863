use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let products = store.load()?;
    Ok(CmdResult::default().with_listed(products))
}
