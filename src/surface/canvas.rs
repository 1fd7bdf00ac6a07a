use image::{RgbaImage, imageops::FilterType};

use crate::{
    foundation::core::{Canvas, ImageData},
    foundation::error::{SheenError, SheenResult},
    surface::composite::{destination_in, source_over},
    surface::mask::Drawable,
};

/// Global composite operation applied by [`Surface2d::draw_image`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositeOp {
    /// Draw the source over the destination.
    #[default]
    SourceOver,
    /// Keep the destination only where the source has alpha; everything the source does not
    /// cover is cleared.
    DestinationIn,
}

/// A 2D drawing surface in the shape of a browser canvas context.
///
/// `put_image_data` and `clear_rect` write pixels directly and ignore the composite operation;
/// only `draw_image` composites.
pub trait Surface2d {
    /// Surface size in pixels.
    fn canvas(&self) -> Canvas;

    /// Allocate a transparent buffer suitable for [`Surface2d::put_image_data`].
    fn create_image_data(&self, width: u32, height: u32) -> SheenResult<ImageData> {
        ImageData::new(width, height)
    }

    /// Copy `data` onto the surface with its top-left corner at `(dx, dy)`, clipped.
    fn put_image_data(&mut self, data: &ImageData, dx: i32, dy: i32) -> SheenResult<()>;

    /// Reset a rectangle to transparent black, clipped.
    fn clear_rect(&mut self, x: i32, y: i32, width: u32, height: u32);

    /// Draw `image` scaled into the destination rectangle using the current composite op.
    fn draw_image(
        &mut self,
        image: &dyn Drawable,
        dx: i32,
        dy: i32,
        dw: u32,
        dh: u32,
    ) -> SheenResult<()>;

    fn composite_op(&self) -> CompositeOp;

    fn set_composite_op(&mut self, op: CompositeOp);

    /// Push the current drawing state.
    fn save(&mut self);

    /// Pop the drawing state; a no-op when nothing was saved.
    fn restore(&mut self);
}

#[derive(Clone, Copy, Debug, Default)]
struct DrawState {
    composite_op: CompositeOp,
}

/// CPU surface storing straight-alpha RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct PixmapSurface {
    pixels: ImageData,
    state: DrawState,
    saved: Vec<DrawState>,
}

impl PixmapSurface {
    /// Create a transparent surface.
    pub fn new(width: u32, height: u32) -> SheenResult<Self> {
        Ok(Self {
            pixels: ImageData::new(width, height)?,
            state: DrawState::default(),
            saved: Vec::new(),
        })
    }

    /// Current pixels (the `getImageData` of the whole surface).
    pub fn image_data(&self) -> &ImageData {
        &self.pixels
    }

    /// Copy the surface into an `image` buffer, e.g. for PNG export.
    pub fn to_rgba_image(&self) -> SheenResult<RgbaImage> {
        RgbaImage::from_raw(
            self.pixels.width,
            self.pixels.height,
            self.pixels.data.clone(),
        )
        .ok_or_else(|| SheenError::surface("surface bytes do not match its dimensions"))
    }

    fn idx(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.pixels.width as usize) + (x as usize)) * 4
    }
}

/// Clip a rectangle at `(x, y)` of size `w x h` against `0..max_w` x `0..max_h`.
fn clip_rect(
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    max_w: u32,
    max_h: u32,
) -> Option<(u32, u32, u32, u32)> {
    let x0 = i64::from(x).max(0);
    let y0 = i64::from(y).max(0);
    let x1 = (i64::from(x) + i64::from(w)).min(i64::from(max_w));
    let y1 = (i64::from(y) + i64::from(h)).min(i64::from(max_h));
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}

/// Resample a drawable to exactly `dw x dh`; `None` when it has no pixels to draw.
fn scaled_source(image: &dyn Drawable, dw: u32, dh: u32) -> SheenResult<Option<RgbaImage>> {
    let (sw, sh) = image.dimensions();
    if sw == 0 || sh == 0 || dw == 0 || dh == 0 {
        return Ok(None);
    }
    let src = RgbaImage::from_raw(sw, sh, image.rgba8().to_vec()).ok_or_else(|| {
        SheenError::surface(format!("drawable bytes do not match its {sw}x{sh} size"))
    })?;
    if (sw, sh) == (dw, dh) {
        return Ok(Some(src));
    }
    Ok(Some(image::imageops::resize(
        &src,
        dw,
        dh,
        FilterType::Triangle,
    )))
}

impl Surface2d for PixmapSurface {
    fn canvas(&self) -> Canvas {
        self.pixels.canvas()
    }

    fn put_image_data(&mut self, data: &ImageData, dx: i32, dy: i32) -> SheenResult<()> {
        if data.data.len() != data.canvas().rgba_len()? {
            return Err(SheenError::surface("put_image_data got a malformed buffer"));
        }
        let Some((x0, y0, x1, y1)) = clip_rect(
            dx,
            dy,
            data.width,
            data.height,
            self.pixels.width,
            self.pixels.height,
        ) else {
            return Ok(());
        };

        let row_bytes = ((x1 - x0) as usize) * 4;
        for y in y0..y1 {
            let sx = (i64::from(x0) - i64::from(dx)) as usize;
            let sy = (i64::from(y) - i64::from(dy)) as usize;
            let src_idx = (sy * (data.width as usize) + sx) * 4;
            let dst_idx = self.idx(x0, y);
            self.pixels.data[dst_idx..dst_idx + row_bytes]
                .copy_from_slice(&data.data[src_idx..src_idx + row_bytes]);
        }
        Ok(())
    }

    fn clear_rect(&mut self, x: i32, y: i32, width: u32, height: u32) {
        let Some((x0, y0, x1, y1)) =
            clip_rect(x, y, width, height, self.pixels.width, self.pixels.height)
        else {
            return;
        };
        for y in y0..y1 {
            let start = self.idx(x0, y);
            let end = self.idx(x1 - 1, y) + 4;
            self.pixels.data[start..end].fill(0);
        }
    }

    fn draw_image(
        &mut self,
        image: &dyn Drawable,
        dx: i32,
        dy: i32,
        dw: u32,
        dh: u32,
    ) -> SheenResult<()> {
        let op = self.state.composite_op;
        let src = scaled_source(image, dw, dh)?;
        if src.is_none() {
            tracing::debug!(?op, "draw_image with an empty source");
        }

        for y in 0..self.pixels.height {
            for x in 0..self.pixels.width {
                let sx = i64::from(x) - i64::from(dx);
                let sy = i64::from(y) - i64::from(dy);
                let src_px = src.as_ref().and_then(|img| {
                    let inside = sx >= 0
                        && sy >= 0
                        && sx < i64::from(img.width())
                        && sy < i64::from(img.height());
                    inside.then(|| img.get_pixel(sx as u32, sy as u32).0)
                });

                let idx = self.idx(x, y);
                let dst = [
                    self.pixels.data[idx],
                    self.pixels.data[idx + 1],
                    self.pixels.data[idx + 2],
                    self.pixels.data[idx + 3],
                ];
                let out = match (op, src_px) {
                    (CompositeOp::SourceOver, Some(s)) => source_over(dst, s),
                    (CompositeOp::SourceOver, None) => continue,
                    (CompositeOp::DestinationIn, s) => destination_in(dst, s.map_or(0, |s| s[3])),
                };
                self.pixels.data[idx..idx + 4].copy_from_slice(&out);
            }
        }
        Ok(())
    }

    fn composite_op(&self) -> CompositeOp {
        self.state.composite_op
    }

    fn set_composite_op(&mut self, op: CompositeOp) {
        self.state.composite_op = op;
    }

    fn save(&mut self) {
        self.saved.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }
}

impl Drawable for PixmapSurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.pixels.width, self.pixels.height)
    }

    fn rgba8(&self) -> &[u8] {
        &self.pixels.data
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/canvas.rs"]
mod tests;
