use crate::foundation::error::{SheenError, SheenResult};

/// Straight (non-premultiplied) RGB color triple.
pub type Rgb8 = [u8; 3];

/// Pixel dimensions of a drawing surface or pixel buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Length in bytes of a tightly packed RGBA8 buffer of this size.
    pub fn rgba_len(self) -> SheenResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| {
                SheenError::invalid_argument(format!(
                    "canvas {}x{} overflows an rgba8 buffer",
                    self.width, self.height
                ))
            })
    }
}

/// A width x height x 4 straight-alpha RGBA8 pixel buffer, row-major.
///
/// This mirrors the browser `ImageData` layout: `data[(y * width + x) * 4 + c]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl ImageData {
    /// Allocate a fully transparent buffer.
    pub fn new(width: u32, height: u32) -> SheenResult<Self> {
        let len = Canvas::new(width, height).rgba_len()?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wrap existing bytes; `data.len()` must equal `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> SheenResult<Self> {
        let expected = Canvas::new(width, height).rgba_len()?;
        if data.len() != expected {
            return Err(SheenError::invalid_argument(format!(
                "image data for {width}x{height} needs {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.data[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }
}
