//! Symbol-keyed element catalog
//!
//! Reads the periodic table JSON layout (`{"elements": [...]}`) once and
//! answers exact-case symbol lookups afterwards.

use crate::catalog::element::ElementRecord;
use crate::io::error::{PeriodicError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Deserialize)]
struct CatalogFile {
    elements: Vec<ElementRecord>,
}

/// Immutable lookup table from element symbol to record
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    elements: Vec<ElementRecord>,
    by_symbol: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from records; later duplicates of a symbol are ignored
    pub fn from_records(records: impl IntoIterator<Item = ElementRecord>) -> Self {
        let mut elements = Vec::new();
        let mut by_symbol = HashMap::new();

        for record in records {
            if by_symbol.contains_key(&record.symbol) {
                log::warn!("Duplicate catalog entry for {} ignored", record.symbol);
                continue;
            }
            by_symbol.insert(record.symbol.clone(), elements.len());
            elements.push(record);
        }

        Self {
            elements,
            by_symbol,
        }
    }

    /// Parse a catalog from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid catalog document
    pub fn from_json_str(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self::from_records(file.elements))
    }

    /// Load a catalog from a JSON file on disk
    ///
    /// # Errors
    ///
    /// Returns [`PeriodicError::CatalogUnavailable`] if:
    /// - The file cannot be read
    /// - The file is not a valid catalog document
    pub fn load(path: &Path) -> Result<Self> {
        let unavailable = |source: Box<dyn std::error::Error + Send + Sync>| {
            PeriodicError::CatalogUnavailable {
                path: path.to_path_buf(),
                source,
            }
        };

        let json = std::fs::read_to_string(path).map_err(|e| unavailable(Box::new(e)))?;
        let catalog = Self::from_json_str(&json).map_err(|e| unavailable(Box::new(e)))?;
        log::debug!(
            "Loaded {} elements from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Exact-case lookup of an element symbol
    pub fn get(&self, symbol: &str) -> Option<&ElementRecord> {
        self.by_symbol
            .get(symbol)
            .and_then(|&index| self.elements.get(index))
    }

    /// All records in dataset order
    pub fn iter(&self) -> impl Iterator<Item = &ElementRecord> {
        self.elements.iter()
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the catalog holds no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
