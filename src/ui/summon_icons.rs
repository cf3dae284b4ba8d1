use anyhow::Context;
use eframe::egui;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::model::catalog::asset_file_name;

/// Lazily loaded summon portraits. A summon without a usable image is
/// remembered as missing and drawn as plain text.
pub struct SummonIcons {
    dir: PathBuf,
    textures: HashMap<String, Option<egui::TextureHandle>>,
}

impl SummonIcons {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            textures: HashMap::new(),
        }
    }

    pub fn get(&mut self, ctx: &egui::Context, summon: &str) -> Option<&egui::TextureHandle> {
        if !self.textures.contains_key(summon) {
            let path = self.dir.join(asset_file_name(summon));
            let texture = match load_color_image(&path) {
                Ok(image) => Some(ctx.load_texture(
                    format!("summon:{summon}"),
                    image,
                    egui::TextureOptions::LINEAR,
                )),
                Err(err) => {
                    tracing::warn!(summon, "no icon: {err:#}");
                    None
                }
            };
            self.textures.insert(summon.to_string(), texture);
        }

        self.textures.get(summon).and_then(Option::as_ref)
    }
}

fn load_color_image(path: &Path) -> anyhow::Result<egui::ColorImage> {
    let decoded = image::open(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
