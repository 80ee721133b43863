use crate::commands::{CmdMessage, CmdResult, ProdzPaths};
use crate::config::ProdzConfig;
use crate::error::Result;
use crate::store::fs::FileStore;
use std::fs;

pub fn run(paths: &ProdzPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.store_dir)?;
    let config = ProdzConfig::load(&paths.store_dir)?;
    let store = FileStore::open(paths.data_file(&config))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized product store at {}",
        store.path().display()
    )));
    Ok(result)
}
