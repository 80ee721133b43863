use super::CatalogStore;
use crate::error::{ProdzError, Result};
use crate::model::Product;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open the store backing file at `path`, creating it with an empty
    /// collection if it does not exist. Opening an existing file leaves its
    /// content untouched.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ProdzError::Io)?;
            }
        }

        if !path.exists() {
            let empty = serde_json::to_string_pretty(&Vec::<Product>::new())
                .map_err(ProdzError::Serialization)?;
            fs::write(&path, empty).map_err(ProdzError::Io)?;
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn store_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl CatalogStore for FileStore {
    fn load(&self) -> Result<Vec<Product>> {
        let content = fs::read_to_string(&self.path).map_err(ProdzError::Io)?;
        let products: Vec<Product> =
            serde_json::from_str(&content).map_err(ProdzError::Serialization)?;
        Ok(products)
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        let content =
            serde_json::to_string_pretty(products).map_err(ProdzError::Serialization)?;

        // Atomic write
        let tmp_file = self.store_dir().join(format!(".products-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(ProdzError::Io)?;
        fs::rename(&tmp_file, &self.path).map_err(ProdzError::Io)?;

        Ok(())
    }
}
