//! The shine sweep: a diagonal Gaussian band that crosses the canvas once per cycle, masked to
//! an image shape.
//!
//! A cycle of `cycle_duration` ms is split into an active flash window (the leading
//! `flash_window` fraction) and a rest phase. During the flash window the band center travels
//! through diagonal coordinates `[0, 2]`, entering at the top-right corner and leaving at the
//! bottom-left one.

use crate::{
    foundation::core::ImageData,
    foundation::error::{SheenError, SheenResult},
    foundation::math::{clamp_u8, floored_mod},
    shine::options::{ShineOptions, ShineOverrides},
    surface::canvas::{CompositeOp, Surface2d},
    surface::mask::Drawable,
};

/// Where the sweep is at a given time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepState {
    /// Position within the cycle, in `[0, 1)`.
    pub loop_progress: f64,
    /// Whether the band is visible at all.
    pub active: bool,
    /// Band center on the diagonal axis, in `[0, 2]`; `0` while inactive.
    pub center: f64,
}

impl SweepState {
    /// Locate the sweep at absolute time `t_ms`. `t_ms` may be negative or span many cycles.
    pub fn at(t_ms: f64, opts: &ShineOptions) -> Self {
        let loop_time = floored_mod(t_ms, opts.cycle_duration);
        let loop_progress = loop_time / opts.cycle_duration;
        let active = loop_progress <= opts.flash_window;
        let shine_progress = if active {
            loop_progress / opts.flash_window
        } else {
            0.0
        };
        Self {
            loop_progress,
            active,
            center: shine_progress * 2.0,
        }
    }

    /// Band intensity in `[0, 1]` at diagonal coordinate `diag`.
    pub fn intensity(&self, diag: f64, softness: f64) -> f64 {
        if !self.active {
            return 0.0;
        }
        let distance = (diag - self.center).abs();
        (-(distance * distance) / (2.0 * softness * softness)).exp()
    }
}

/// Diagonal coordinate of pixel `(x, y)`: `0` at the right edge of the top row, growing toward
/// the bottom-left.
pub fn diagonal(x: u32, y: u32, width: u32, height: u32) -> f64 {
    f64::from(width - x) / f64::from(width) + f64::from(y) / f64::from(height)
}

/// Fill `buf` with the unmasked, fully opaque shine frame at `t_ms`.
pub fn render_shine(buf: &mut ImageData, t_ms: f64, opts: &ShineOptions) -> SheenResult<()> {
    opts.validate()?;
    fill_shine(buf, t_ms, opts)
}

fn fill_shine(buf: &mut ImageData, t_ms: f64, opts: &ShineOptions) -> SheenResult<()> {
    let expected_len = buf.canvas().rgba_len()?;
    if buf.data.len() != expected_len {
        return Err(SheenError::invalid_argument(format!(
            "shine buffer for {}x{} needs {expected_len} bytes, got {}",
            buf.width,
            buf.height,
            buf.data.len()
        )));
    }

    let sweep = SweepState::at(t_ms, opts);
    let (w, h) = (buf.width, buf.height);
    let base = opts.base.map(f64::from);
    let shine = opts.shine.map(f64::from);

    for (i, px) in buf.data.chunks_exact_mut(4).enumerate() {
        let x = (i % w as usize) as u32;
        let y = (i / w as usize) as u32;
        let k = sweep.intensity(diagonal(x, y, w, h), opts.softness);

        for c in 0..3 {
            px[c] = clamp_u8(base[c] * (1.0 - k) + shine[c] * k);
        }
        px[3] = 255;
    }
    Ok(())
}

/// Paint one shine frame onto `surface` and mask it to `mask`.
///
/// `mask` is scaled to the surface size and composited with destination-in, so the shine is
/// only visible where the mask is opaque. A `buffer` whose size matches the surface is filled in
/// place and returned; otherwise a new one is allocated.
#[tracing::instrument(level = "trace", skip(surface, mask, buffer, overrides))]
pub fn paint<S: Surface2d + ?Sized>(
    surface: &mut S,
    t_ms: f64,
    mask: &dyn Drawable,
    buffer: Option<ImageData>,
    overrides: Option<&ShineOverrides>,
) -> SheenResult<ImageData> {
    let opts = overrides.copied().unwrap_or_default().resolve()?;
    let canvas = surface.canvas();

    let mut image_data = match buffer {
        Some(buf) if buf.canvas() == canvas => buf,
        Some(buf) => {
            tracing::debug!(
                buffer_w = buf.width,
                buffer_h = buf.height,
                canvas_w = canvas.width,
                canvas_h = canvas.height,
                "shine buffer does not match canvas, reallocating"
            );
            surface.create_image_data(canvas.width, canvas.height)?
        }
        None => surface.create_image_data(canvas.width, canvas.height)?,
    };

    fill_shine(&mut image_data, t_ms, &opts)?;

    surface.clear_rect(0, 0, canvas.width, canvas.height);
    surface.put_image_data(&image_data, 0, 0)?;
    surface.save();
    surface.set_composite_op(CompositeOp::DestinationIn);
    let masked = surface.draw_image(mask, 0, 0, canvas.width, canvas.height);
    surface.restore();
    masked?;

    Ok(image_data)
}

/// Owns resolved options and a reusable buffer for a per-frame paint loop.
#[derive(Clone, Debug)]
pub struct ShinePainter {
    overrides: ShineOverrides,
    options: ShineOptions,
    buffer: Option<ImageData>,
}

impl ShinePainter {
    pub fn new(overrides: ShineOverrides) -> SheenResult<Self> {
        let options = overrides.resolve()?;
        Ok(Self {
            overrides,
            options,
            buffer: None,
        })
    }

    pub fn options(&self) -> &ShineOptions {
        &self.options
    }

    /// Paint the frame at `t_ms`, reusing the buffer from the previous frame.
    pub fn paint_frame<S: Surface2d + ?Sized>(
        &mut self,
        surface: &mut S,
        t_ms: f64,
        mask: &dyn Drawable,
    ) -> SheenResult<&ImageData> {
        let buf = paint(
            surface,
            t_ms,
            mask,
            self.buffer.take(),
            Some(&self.overrides),
        )?;
        Ok(self.buffer.insert(buf))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shine/paint.rs"]
mod tests;
