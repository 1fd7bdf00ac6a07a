use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::core::ImageData,
    foundation::error::{SheenError, SheenResult},
    surface::composite::unpremultiply,
};

/// An image-like source that can be drawn onto a [`crate::Surface2d`].
///
/// Pixels are straight-alpha RGBA8, tightly packed, row-major.
pub trait Drawable {
    fn dimensions(&self) -> (u32, u32);
    fn rgba8(&self) -> &[u8];
}

impl Drawable for ImageData {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn rgba8(&self) -> &[u8] {
        &self.data
    }
}

impl Drawable for image::RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        image::RgbaImage::dimensions(self)
    }

    fn rgba8(&self) -> &[u8] {
        self.as_raw()
    }
}

/// A decoded mask image. Only its alpha matters when used with destination-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl MaskImage {
    /// A mask that has not loaded: zero-sized, masks everything away.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            rgba: Vec::new(),
        }
    }

    /// Decode encoded raster bytes (PNG, JPEG, ...).
    pub fn from_image_bytes(bytes: &[u8]) -> SheenResult<Self> {
        let rgba = image::load_from_memory(bytes)
            .context("decode mask image from memory")?
            .to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }

    /// Parse SVG bytes and rasterize them at `width x height`.
    pub fn from_svg_bytes(bytes: &[u8], width: u32, height: u32) -> SheenResult<Self> {
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_data(bytes, &opts).context("parse mask svg tree")?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| SheenError::surface("failed to allocate svg pixmap"))?;
        let sx = (width as f32) / tree.size().width();
        let sy = (height as f32) / tree.size().height();
        let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
        resvg::render(&tree, xform, &mut pixmap.as_mut());

        let mut rgba = pixmap.take();
        for px in rgba.chunks_exact_mut(4) {
            let out = unpremultiply([px[0], px[1], px[2], px[3]]);
            px.copy_from_slice(&out);
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Load a mask from disk. SVG files are rasterized at `svg_size`; raster files keep their
    /// own size.
    pub fn load(path: &Path, svg_size: (u32, u32)) -> SheenResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read mask '{}'", path.display()))?;
        let is_svg = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
        if is_svg {
            Self::from_svg_bytes(&bytes, svg_size.0, svg_size.1)
        } else {
            Self::from_image_bytes(&bytes)
        }
    }
}

impl From<image::RgbaImage> for MaskImage {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            rgba: img.into_raw(),
        }
    }
}

impl Drawable for MaskImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn rgba8(&self) -> &[u8] {
        &self.rgba
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/mask.rs"]
mod tests;
