pub mod assets;
pub mod strings;

use std::path::Path;

use crate::error::AppError;
use crate::infra::config::AppConfig;

pub use assets::{AssetIndex, DecodedArtwork};
pub use strings::StringTable;

pub fn load_strings(config: &AppConfig) -> Result<StringTable, AppError> {
    let mut strings = StringTable::builtin();
    if let Some(path) = config.strings_path.as_deref() {
        strings.merge_file(Path::new(path))?;
    }
    Ok(strings)
}
