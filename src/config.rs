use std::path::PathBuf;

pub const DEFAULT_CATALOG_PATH: &str = "products.txt";
pub const DEFAULT_TOP_N: usize = 3;

/// Settings for a report run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Where the catalog is saved and reloaded from.
    pub catalog_path: PathBuf,
    /// How many products the "most expensive" section lists.
    pub top_n: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            top_n: DEFAULT_TOP_N,
        }
    }
}

#[allow(dead_code)]
impl ReportConfig {
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_overrides() {
        let config = ReportConfig::default();
        assert_eq!(config.catalog_path, PathBuf::from("products.txt"));
        assert_eq!(config.top_n, 3);

        let config = config.with_catalog_path("/tmp/catalog.txt").with_top_n(5);
        assert_eq!(config.catalog_path, PathBuf::from("/tmp/catalog.txt"));
        assert_eq!(config.top_n, 5);
    }
}
