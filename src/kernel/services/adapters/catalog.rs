//! Item lists: the built-in deck and JSON catalog files.

use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::kernel::services::ports::Item;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate item id {0}")]
    DuplicateId(u64),
}

pub fn builtin_catalog() -> Vec<Item> {
    vec![
        Item::new(1, "Camping Tent", "⛺", "Perfect for outdoor adventures"),
        Item::new(2, "GoPro Camera", "📹", "Capture life in stunning detail"),
        Item::new(3, "Projector", "📽️", "Big screen entertainment anywhere"),
        Item::new(4, "Electric Scooter", "🛴", "Eco-friendly urban transport"),
        Item::new(5, "Coffee Machine", "☕", "Barista-quality coffee at home"),
        Item::new(6, "Yoga Mat", "🧘‍♀️", "Find your inner peace"),
        Item::new(7, "Gaming Chair", "🎮", "Ultimate comfort for long sessions"),
        Item::new(8, "Bluetooth Speaker", "🔊", "Premium sound on the go"),
    ]
}

/// Parses a JSON array of items, keeping file order. Ids must be unique.
pub fn parse_catalog(data: &str) -> Result<Vec<Item>, CatalogError> {
    let items: Vec<Item> = serde_json::from_str(data)?;
    let mut seen = FxHashSet::default();
    for item in &items {
        if !seen.insert(item.id) {
            return Err(CatalogError::DuplicateId(item.id));
        }
    }
    Ok(items)
}

pub fn load_catalog(path: &Path) -> Result<Vec<Item>, CatalogError> {
    let data = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&data)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/catalog.rs"]
mod tests;
