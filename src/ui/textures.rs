use std::collections::HashMap;

use eframe::egui;

use crate::resources::AssetIndex;

/// One GPU texture per catalog index, decoded on first use. A failed load is
/// remembered so it is not retried every frame.
pub struct TextureCache {
    assets: AssetIndex,
    slots: HashMap<usize, Option<egui::TextureHandle>>,
}

impl TextureCache {
    pub fn new(assets: AssetIndex) -> Self {
        Self {
            assets,
            slots: HashMap::new(),
        }
    }

    pub fn texture(
        &mut self,
        ctx: &egui::Context,
        index: usize,
        image_ref: &str,
    ) -> Option<egui::TextureHandle> {
        if let Some(slot) = self.slots.get(&index) {
            return slot.clone();
        }

        let loaded = match self.assets.decode(image_ref) {
            Ok(decoded) => {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [decoded.width as usize, decoded.height as usize],
                    &decoded.rgba,
                );
                log::debug!(
                    "[Textures] artwork {index} loaded {}x{}",
                    decoded.width,
                    decoded.height
                );
                Some(ctx.load_texture(
                    format!("artwork_{index}"),
                    image,
                    egui::TextureOptions::LINEAR,
                ))
            }
            Err(error) => {
                log::warn!("[Textures] artwork {index}: {error}");
                None
            }
        };

        self.slots.insert(index, loaded.clone());
        loaded
    }
}
