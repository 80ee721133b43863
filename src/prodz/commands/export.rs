use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ProdzError, Result};
use crate::model::Product;
use crate::store::CatalogStore;
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;

pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    // 1. Load the catalog
    let products = store.load()?;

    if products.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No products to export."));
        return Ok(res);
    }

    // 2. Prepare output file
    let now = Utc::now();
    let filename = format!("prodz-{}.tar.gz", now.format("%Y-%m-%d_%H:%M:%S"));
    let file = File::create(&filename).map_err(ProdzError::Io)?;

    // 3. Write archive
    write_archive(file, &products)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Exported to {}", filename)));
    Ok(result)
}

fn write_archive<W: Write>(writer: W, products: &[Product]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for product in products {
        let entry_name = format!(
            "prodz/{}-{}.json",
            sanitize_filename(&product.code),
            product.id
        );
        let content = serde_json::to_string_pretty(product).map_err(ProdzError::Serialization)?;

        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, entry_name, content.as_bytes())
            .map_err(ProdzError::Io)?;
    }

    tar.finish().map_err(ProdzError::Io)?;
    Ok(())
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}
