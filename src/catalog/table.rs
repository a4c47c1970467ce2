use std::cell::RefCell;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use std::rc::Rc;

use crate::catalog::models::{Artwork, ArtworkRefs, CatalogFile, FavoriteChange};
use crate::error::AppError;

pub const BUILTIN_SIZE: usize = 5;

pub type FavoriteListener = Box<dyn FnMut(&FavoriteChange)>;

type SharedListeners = Rc<RefCell<Vec<FavoriteListener>>>;

/// Fixed, ordered artwork table.
///
/// Catalog-level favorite listeners are fed by each artwork's own
/// `favorite` observable, so any change to a flag reaches them with the
/// artwork's index attached.
pub struct Catalog {
    artworks: Vec<Artwork>,
    listeners: SharedListeners,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self::assemble((1..=BUILTIN_SIZE).map(|n| ArtworkRefs {
            image: format!("artwork_{n}"),
            title: format!("artwork_title_{n}"),
            caption: format!("artist_year_{n}"),
        }))
    }

    fn assemble(refs: impl IntoIterator<Item = ArtworkRefs>) -> Self {
        let listeners: SharedListeners = Rc::default();
        let artworks = refs
            .into_iter()
            .enumerate()
            .map(|(index, refs)| {
                let mut artwork = Artwork::new(refs);
                let forward = Rc::clone(&listeners);
                artwork.favorite.subscribe(Box::new(move |is_favorite: &bool| {
                    let change = FavoriteChange {
                        index,
                        is_favorite: *is_favorite,
                    };
                    for listener in forward.borrow_mut().iter_mut() {
                        listener(&change);
                    }
                }));
                artwork
            })
            .collect();
        Self {
            artworks,
            listeners,
        }
    }

    pub fn from_refs(refs: Vec<ArtworkRefs>) -> Result<Self, AppError> {
        if refs.is_empty() {
            return Err(AppError::InvalidCatalog(
                "catalog must contain at least one artwork".to_string(),
            ));
        }

        for (index, entry) in refs.iter().enumerate() {
            for (field, value) in [
                ("image", &entry.image),
                ("title", &entry.title),
                ("caption", &entry.caption),
            ] {
                if value.trim().is_empty() {
                    return Err(AppError::InvalidCatalog(format!(
                        "artwork {index} has an empty {field} reference"
                    )));
                }
            }
        }

        Ok(Self::assemble(refs))
    }

    pub fn from_json_str(raw: &str) -> Result<Self, AppError> {
        let file: CatalogFile = serde_json::from_str(raw)
            .map_err(|error| AppError::InvalidCatalog(format!("malformed catalog json: {error}")))?;
        Self::from_refs(file.artworks)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path).map_err(|error| {
            AppError::Io(format!("failed to read catalog {}: {error}", path.display()))
        })?;
        let catalog = Self::from_json_str(&raw)?;
        log::info!(
            "[Catalog] loaded {} artworks from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn len_nonzero(&self) -> NonZeroUsize {
        // Every constructor rejects an empty table.
        NonZeroUsize::new(self.artworks.len()).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn get(&self, index: usize) -> Option<&Artwork> {
        self.artworks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.artworks.iter()
    }

    pub fn favorites(&self) -> Vec<usize> {
        self.iter()
            .enumerate()
            .filter(|(_, artwork)| artwork.is_favorite())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn toggle_favorite(&mut self, index: usize) -> Result<FavoriteChange, AppError> {
        let len = self.artworks.len();
        let artwork = self
            .artworks
            .get_mut(index)
            .ok_or(AppError::IndexOutOfRange { index, len })?;

        artwork.favorite.update(|value| !value);
        Ok(FavoriteChange {
            index,
            is_favorite: artwork.is_favorite(),
        })
    }

    pub fn subscribe_favorites(&mut self, listener: FavoriteListener) {
        self.listeners.borrow_mut().push(listener);
    }
}

impl std::ops::Index<usize> for Catalog {
    type Output = Artwork;

    fn index(&self, index: usize) -> &Artwork {
        &self.artworks[index]
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("artworks", &self.artworks)
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}
