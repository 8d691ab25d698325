//! GPU textures for album artwork and transport buttons.
//!
//! Images are decoded once when the window opens. A missing or broken image
//! is logged and left out; the canvas draws a placeholder for it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use eframe::egui::{ColorImage, Context, TextureHandle, TextureOptions};
use tracing::warn;

use crate::catalog::Catalog;
use crate::error::ArtworkError;

use super::ButtonIcon;

pub struct Textures {
    artwork: Vec<Option<TextureHandle>>,
    buttons: HashMap<ButtonIcon, TextureHandle>,
}

impl Textures {
    pub fn load(ctx: &Context, catalog: &Catalog, buttons_dir: &Path) -> Self {
        let artwork = catalog
            .albums()
            .iter()
            .enumerate()
            .map(|(i, album)| load_texture(ctx, &format!("artwork-{i}"), &album.artwork.path))
            .collect();

        let buttons = ButtonIcon::ALL
            .into_iter()
            .filter_map(|icon| {
                let path = buttons_dir.join(icon.file_name());
                load_texture(ctx, icon.file_name(), &path).map(|t| (icon, t))
            })
            .collect();

        Self { artwork, buttons }
    }

    pub fn artwork(&self, album: usize) -> Option<&TextureHandle> {
        self.artwork.get(album).and_then(Option::as_ref)
    }

    pub fn button(&self, icon: ButtonIcon) -> Option<&TextureHandle> {
        self.buttons.get(&icon)
    }
}

fn load_texture(ctx: &Context, name: &str, path: &Path) -> Option<TextureHandle> {
    match decode_image(path) {
        // Nearest filtering keeps pixel-art covers crisp when scaled.
        Ok(image) => Some(ctx.load_texture(name, image, TextureOptions::NEAREST)),
        Err(e) => {
            warn!(error = %e, "image unavailable, drawing placeholder");
            None
        }
    }
}

/// Read and decode an image file into RGBA pixels.
pub(super) fn decode_image(path: &Path) -> Result<ColorImage, ArtworkError> {
    let bytes = fs::read(path).map_err(|source| ArtworkError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let image = image::load_from_memory(&bytes).map_err(|source| ArtworkError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let image = image.to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, &image.into_raw()))
}
