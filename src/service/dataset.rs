//! Bundled demo datasets
//!
//! Both collections are read once at startup and served verbatim.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

const PRODUCT_REVIEWS_FILE: &str = "product_reviews.json";
const MARKET_NEWS_FILE: &str = "market_news.json";

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read-only product-review and market-news collections
#[derive(Debug, Clone)]
pub struct DatasetService {
    product_reviews: Value,
    market_news: Value,
}

impl DatasetService {
    /// Load both collections from `dir`
    pub fn load(dir: &Path) -> Result<Self, DatasetError> {
        let product_reviews = load_json(&dir.join(PRODUCT_REVIEWS_FILE))?;
        let market_news = load_json(&dir.join(MARKET_NEWS_FILE))?;

        let service = Self {
            product_reviews,
            market_news,
        };

        tracing::info!(
            dir = %dir.display(),
            product_reviews = service.product_review_count(),
            market_news = service.market_news_count(),
            "Loaded bundled datasets"
        );

        Ok(service)
    }

    pub fn product_reviews(&self) -> &Value {
        &self.product_reviews
    }

    pub fn market_news(&self) -> &Value {
        &self.market_news
    }

    pub fn product_review_count(&self) -> usize {
        record_count(&self.product_reviews)
    }

    pub fn market_news_count(&self) -> usize {
        record_count(&self.market_news)
    }
}

fn load_json(path: &Path) -> Result<Value, DatasetError> {
    let contents = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Array length, or 1 for any other document
fn record_count(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Null => 0,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_datasets(reviews: &str, news: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PRODUCT_REVIEWS_FILE), reviews).unwrap();
        fs::write(dir.path().join(MARKET_NEWS_FILE), news).unwrap();
        dir
    }

    #[test]
    fn test_load_serves_contents_verbatim() {
        let dir = write_datasets(
            r#"[{"id":"r1","product_name":"イヤホン","rating":4}]"#,
            r#"[{"id":"n1","title":"EV市場"},{"id":"n2","title":"半導体"}]"#,
        );

        let service = DatasetService::load(dir.path()).unwrap();

        assert_eq!(
            service.product_reviews(),
            &json!([{"id":"r1","product_name":"イヤホン","rating":4}])
        );
        assert_eq!(service.product_review_count(), 1);
        assert_eq!(service.market_news_count(), 2);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DatasetService::load(dir.path()).unwrap_err();
        assert!(matches!(err, DatasetError::Read { .. }));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = write_datasets("[]", "{not json");
        let err = DatasetService::load(dir.path()).unwrap_err();
        assert!(matches!(err, DatasetError::Parse { ref path, .. } if path.ends_with(MARKET_NEWS_FILE)));
    }

    #[test]
    fn test_bundled_data_loads() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let service = DatasetService::load(&dir).unwrap();
        assert!(service.product_review_count() > 0);
        assert!(service.market_news_count() > 0);
    }
}
