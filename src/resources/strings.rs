use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::AppError;

pub const APP_NAME_KEY: &str = "app_name";

const BUILTIN_STRINGS: &[(&str, &str)] = &[
    (APP_NAME_KEY, "Art Space"),
    ("artwork_title_1", "The Starry Night"),
    ("artist_year_1", "Vincent van Gogh (1889)"),
    ("artwork_title_2", "The Great Wave off Kanagawa"),
    ("artist_year_2", "Katsushika Hokusai (1831)"),
    ("artwork_title_3", "Girl with a Pearl Earring"),
    ("artist_year_3", "Johannes Vermeer (1665)"),
    ("artwork_title_4", "The Birth of Venus"),
    ("artist_year_4", "Sandro Botticelli (1486)"),
    ("artwork_title_5", "Water Lilies"),
    ("artist_year_5", "Claude Monet (1906)"),
];

/// Display strings keyed by resource id.
#[derive(Debug, Default)]
pub struct StringTable {
    entries: HashMap<String, String>,
    reported_misses: RefCell<HashSet<String>>,
}

impl StringTable {
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_STRINGS
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            reported_misses: RefCell::default(),
        }
    }

    /// Merges a flat `{"key": "text"}` object over the current entries.
    pub fn merge_json_str(&mut self, raw: &str) -> Result<usize, AppError> {
        let overrides: HashMap<String, String> = serde_json::from_str(raw)
            .map_err(|error| AppError::Decode(format!("malformed strings json: {error}")))?;
        let count = overrides.len();
        self.entries.extend(overrides);
        Ok(count)
    }

    pub fn merge_file(&mut self, path: &Path) -> Result<usize, AppError> {
        let raw = fs::read_to_string(path).map_err(|error| {
            AppError::Io(format!("failed to read strings {}: {error}", path.display()))
        })?;
        let count = self.merge_json_str(&raw)?;
        log::info!(
            "[Strings] merged {count} entries from {}",
            path.display()
        );
        Ok(count)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Falls back to the key itself so a missing entry stays visible.
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        match self.get(key) {
            Some(text) => text,
            None => {
                if self.reported_misses.borrow_mut().insert(key.to_string()) {
                    log::warn!("[Strings] no text for resource {key}");
                }
                key
            }
        }
    }
}
