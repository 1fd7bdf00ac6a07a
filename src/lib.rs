//! sheen renders the visual effects of a portfolio front-end on the CPU.
//!
//! The centerpiece is [`paint`]: a per-frame generator that sweeps a soft diagonal band of
//! `shine` color across a `base` colored canvas once per cycle, then masks the frame to an
//! arbitrary image with destination-in compositing. Around it sit the small pieces the page
//! needs:
//!
//! - [`Surface2d`] / [`PixmapSurface`]: a canvas-shaped 2D surface and its CPU implementation
//! - [`MaskImage`]: raster or SVG masks
//! - [`Writable`], [`NavigationStore`], [`ThemeStore`]: observable state with optional
//!   persistence
//! - [`name_reveal`], [`about_reveal`]: split-text reveal tweens
//!
//! Everything is synchronous and single threaded. Painting is deterministic for a given time
//! and options.
#![forbid(unsafe_code)]

mod foundation;
mod reveal;
mod shine;
mod state;
mod surface;

pub use crate::foundation::core::{Canvas, ImageData, Rgb8};
pub use crate::foundation::error::{SheenError, SheenResult};

pub use crate::reveal::ease::Ease;
pub use crate::reveal::page::{
    NAME_STAGGER_SEED, OnSplit, Reveal, SegmentState, about_reveal, name_reveal,
};
pub use crate::reveal::split::{Segment, SegmentKind, SplitConfig, SplitText};
pub use crate::reveal::tween::{
    Prop, Stagger, StaggerFrom, StaggerTiming, TargetState, Tween, TweenVars,
};
pub use crate::shine::options::{ShineOptions, ShineOverrides};
pub use crate::shine::paint::{ShinePainter, SweepState, diagonal, paint, render_shine};
pub use crate::state::navigation::{NavigationStore, Section};
pub use crate::state::store::{Readable, Subscription, Writable};
pub use crate::state::theme::{
    COLOR_SCHEME_ENV, ColorSchemeProbe, EnvProbe, JsonFileStorage, KeyValueStorage,
    MemoryStorage, StaticProbe, THEME_KEY, Theme, ThemeEnv, ThemeStore,
};
pub use crate::surface::canvas::{CompositeOp, PixmapSurface, Surface2d};
pub use crate::surface::composite::{
    PremulRgba8, StraightRgba8, destination_in, over, premultiply, source_over, unpremultiply,
};
pub use crate::surface::mask::{Drawable, MaskImage};
