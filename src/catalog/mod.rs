pub mod models;
pub mod observable;
pub mod table;

use std::path::Path;

use crate::error::AppError;
use crate::infra::config::AppConfig;

pub use models::{Artwork, ArtworkRefs, FavoriteChange};
pub use table::Catalog;

/// Builds the catalog once at startup: the configured table file when one is
/// set, the built-in five artworks otherwise.
pub fn load_catalog(config: &AppConfig) -> Result<Catalog, AppError> {
    match config.catalog_path.as_deref() {
        Some(path) => Catalog::load(Path::new(path)),
        None => {
            log::debug!("[Catalog] using built-in artwork table");
            Ok(Catalog::builtin())
        }
    }
}
