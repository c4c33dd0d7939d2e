//! Flat-file persistence of the product catalog.

pub mod codec;

use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::{debug, info, instrument};

use crate::domain::Product;
use crate::error::StoreError;

/// A catalog file on disk. Each call is one full write or one full read.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes every product, replacing any existing content.
    #[instrument(skip(self, products), fields(path = %self.path.display(), products = products.len()))]
    pub fn save(&self, products: &[Rc<Product>]) -> Result<(), StoreError> {
        let data = codec::encode(products)?;
        debug!(bytes = data.len(), "Writing catalog");
        std::fs::write(&self.path, data).map_err(|source| self.io_error(source))?;
        info!("Catalog saved");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Vec<Product>, StoreError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        let products = codec::decode(&text)?;
        info!(products = products.len(), "Catalog loaded");
        Ok(products)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
