use std::collections::HashMap;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use serde::Deserialize;
use serde_json::Number;
use thiserror::Error;

#[derive(Clone, Debug, Deserialize)]
pub struct Catalog {
    pub metadata: Metadata,
    pub products: Vec<Product>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub version: String,
    #[serde(default)]
    pub compilation_date: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Product {
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub product_line: Option<String>,
    pub format_type: String,
    #[serde(default)]
    pub temp_min_c: Option<Number>,
    #[serde(default)]
    pub temp_max_c: Option<Number>,
    #[serde(default)]
    pub iron_temp_c: Option<Number>,
    #[serde(default)]
    pub humidity_min: Option<Number>,
    #[serde(default)]
    pub humidity_max: Option<Number>,
    #[serde(default)]
    pub snow_type: Vec<String>,
    pub level: String,
    #[serde(default)]
    pub role: Vec<String>,
    pub eco: bool,
    #[serde(default)]
    pub comment: Option<HashMap<String, Option<String>>>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    /// Comment text for `locale`, if the product carries a non-empty one.
    pub fn comment_for(&self, locale: &str) -> Option<&str> {
        self.comment
            .as_ref()?
            .get(locale)?
            .as_deref()
            .filter(|text| !text.is_empty())
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}

impl Catalog {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(raw)
    }

    /// Distinct brand names in ascending order.
    pub fn brands(&self) -> Vec<&str> {
        self.products
            .iter()
            .map(|p| p.brand.as_str())
            .sorted()
            .dedup()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    pub fn infer_from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "yml" | "yaml" => Self::Yaml,
            _ => Self::Json,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {path}: {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse catalog: {path}: {source}")]
    ParseYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", raw.len(), path.display());

    match CatalogFormat::infer_from_path(path) {
        CatalogFormat::Json => {
            Catalog::from_json_str(&raw).map_err(|source| CatalogError::ParseJson {
                path: path.to_path_buf(),
                source,
            })
        }
        CatalogFormat::Yaml => {
            Catalog::from_yaml_str(&raw).map_err(|source| CatalogError::ParseYaml {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
