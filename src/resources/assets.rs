use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::ImageReader;
use walkdir::WalkDir;

use crate::error::AppError;

const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedArtwork {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Image files under the asset directory, keyed by lower-case file stem.
#[derive(Debug, Clone, Default)]
pub struct AssetIndex {
    root: PathBuf,
    by_stem: HashMap<String, PathBuf>,
}

impl AssetIndex {
    pub fn scan(root: &Path) -> Self {
        let mut index = Self {
            root: root.to_path_buf(),
            by_stem: HashMap::new(),
        };

        if !root.is_dir() {
            log::warn!(
                "[Assets] asset directory {} not found, artworks will show placeholders",
                root.display()
            );
            return index;
        }

        let mut scanned = 0_usize;
        for entry in WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }
            scanned += 1;

            let path = entry.path();
            if !is_supported_image(path) {
                continue;
            }
            let Some(key) = stem_key(path) else {
                continue;
            };
            // First match in file-name order wins.
            index.by_stem.entry(key).or_insert_with(|| path.to_path_buf());
        }

        log::info!(
            "[Assets] scanned={} indexed={} root={}",
            scanned,
            index.by_stem.len(),
            root.display()
        );
        index
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.by_stem.len()
    }

    pub fn resolve(&self, image_ref: &str) -> Option<&Path> {
        let key = stem_key(Path::new(image_ref))?;
        self.by_stem.get(&key).map(PathBuf::as_path)
    }

    pub fn decode(&self, image_ref: &str) -> Result<DecodedArtwork, AppError> {
        let path = self.resolve(image_ref).ok_or_else(|| {
            AppError::Io(format!(
                "no image for {image_ref} under {}",
                self.root.display()
            ))
        })?;

        let image = ImageReader::open(path)
            .map_err(|error| AppError::Io(format!("failed to open {}: {error}", path.display())))?
            .with_guessed_format()
            .map_err(|error| {
                AppError::Decode(format!(
                    "failed to detect format of {}: {error}",
                    path.display()
                ))
            })?
            .decode()
            .map_err(|error| {
                AppError::Decode(format!("failed to decode {}: {error}", path.display()))
            })?;

        let rgba = image.to_rgba8();
        Ok(DecodedArtwork {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        })
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn stem_key(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_ascii_lowercase())
        .filter(|stem| !stem.is_empty())
}
