use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub catalog_path: Option<String>,
    pub strings_path: Option<String>,
    pub assets_dir: String,
    pub favorites_enabled: bool,
    pub transition_ms: u64,
    pub start_index: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            strings_path: None,
            assets_dir: "assets".to_string(),
            favorites_enabled: true,
            transition_ms: 300,
            start_index: 0,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies `ART_SPACE_*` overrides on top of the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(path) = read("ART_SPACE_CATALOG") {
            config.catalog_path = Some(path);
        }
        if let Some(path) = read("ART_SPACE_STRINGS") {
            config.strings_path = Some(path);
        }
        if let Some(dir) = read("ART_SPACE_ASSETS") {
            config.assets_dir = dir;
        }
        if let Some(value) = read("ART_SPACE_FAVORITES") {
            config.favorites_enabled = parse_switch("ART_SPACE_FAVORITES", &value)?;
        }
        if let Some(value) = read("ART_SPACE_TRANSITION_MS") {
            config.transition_ms = value.parse::<u64>().map_err(|_| {
                AppError::Config(format!("ART_SPACE_TRANSITION_MS must be an integer, got {value}"))
            })?;
        }
        if let Some(value) = read("ART_SPACE_START_INDEX") {
            config.start_index = value.parse::<usize>().map_err(|_| {
                AppError::Config(format!("ART_SPACE_START_INDEX must be an index, got {value}"))
            })?;
        }

        Ok(config)
    }
}

fn parse_switch(key: &str, value: &str) -> Result<bool, AppError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(AppError::Config(format!(
            "{key} must be on/off, got {value}"
        ))),
    }
}
