use serde::{Deserialize, Serialize};

use crate::catalog::observable::Observable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRefs {
    pub image: String,
    pub title: String,
    pub caption: String,
}

#[derive(Debug)]
pub struct Artwork {
    pub refs: ArtworkRefs,
    pub favorite: Observable<bool>,
}

impl Artwork {
    pub fn new(refs: ArtworkRefs) -> Self {
        Self {
            refs,
            favorite: Observable::new(false),
        }
    }

    pub fn is_favorite(&self) -> bool {
        *self.favorite.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteChange {
    pub index: usize,
    pub is_favorite: bool,
}

/// On-disk shape of a catalog table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub artworks: Vec<ArtworkRefs>,
}
