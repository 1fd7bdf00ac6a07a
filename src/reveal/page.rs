//! The two page-load reveals: the name fading in letter by letter, and the about paragraph
//! sliding up line by line.

use crate::{
    foundation::error::SheenResult,
    reveal::ease::Ease,
    reveal::split::{Segment, SegmentKind, SplitConfig, SplitText},
    reveal::tween::{Prop, Stagger, StaggerFrom, TargetState, Tween, TweenVars},
};

/// Seed for the name's random letter order, so every load looks the same.
pub const NAME_STAGGER_SEED: u64 = 0x5EED_0F_A11;

/// Builds the tween for a fresh split. Called again after every re-split.
pub type OnSplit = Box<dyn Fn(&SplitText) -> SheenResult<Tween>>;

/// Sampled state of one animated segment.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SegmentState {
    pub segment: Segment,
    pub state: TargetState,
    /// Fraction of the segment inside its line mask; `1.0` when lines are not masked.
    pub visible_fraction: f64,
}

/// A split text together with the tween animating it. The tween is owned here, never global.
pub struct Reveal {
    split: SplitText,
    target: SegmentKind,
    on_split: OnSplit,
    tween: Tween,
}

impl std::fmt::Debug for Reveal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reveal")
            .field("split", &self.split)
            .field("target", &self.target)
            .field("tween", &self.tween)
            .finish_non_exhaustive()
    }
}

impl Reveal {
    /// Run `on_split` once on `split` and keep the tween it returns.
    pub fn new(split: SplitText, target: SegmentKind, on_split: OnSplit) -> SheenResult<Self> {
        let tween = on_split(&split)?;
        Ok(Self {
            split,
            target,
            on_split,
            tween,
        })
    }

    pub fn split(&self) -> &SplitText {
        &self.split
    }

    pub fn tween(&self) -> &Tween {
        &self.tween
    }

    pub fn tween_mut(&mut self) -> &mut Tween {
        &mut self.tween
    }

    pub fn advance(&mut self, dt: f64) {
        self.tween.advance(dt);
    }

    /// Re-wrap at a new width. On a re-split the tween is rebuilt and resumes at the same time
    /// and speed. Returns whether anything changed.
    pub fn resize(&mut self, max_line_chars: Option<usize>) -> SheenResult<bool> {
        if !self.split.resize(max_line_chars) {
            return Ok(false);
        }
        let mut tween = (self.on_split)(&self.split)?;
        tween.time_scale(self.tween.current_time_scale());
        if self.tween.is_playing() {
            tween.play(self.tween.time());
        } else {
            tween.seek(self.tween.time());
        }
        self.tween = tween;
        Ok(true)
    }

    /// Current state of every animated segment, in document order.
    pub fn sample(&self) -> Vec<SegmentState> {
        let masked = self.split.config().mask_lines && self.target == SegmentKind::Line;
        self.split
            .segments(self.target)
            .iter()
            .zip(self.tween.sample())
            .map(|(segment, state)| SegmentState {
                segment: segment.clone(),
                state,
                visible_fraction: if masked {
                    (1.0 - state.y_percent.abs() / 100.0).clamp(0.0, 1.0)
                } else {
                    1.0
                },
            })
            .collect()
    }
}

/// Letters fade in over 1.5 s in a shuffled order. Starts playing immediately.
#[tracing::instrument]
pub fn name_reveal(text: &str) -> SheenResult<Reveal> {
    let split = SplitText::new(text, SplitConfig::chars());
    let mut reveal = Reveal::new(
        split,
        SegmentKind::Char,
        Box::new(|split: &SplitText| {
            Tween::from_props(
                split.chars().len(),
                TweenVars {
                    from: vec![(Prop::AutoAlpha, 0.0)],
                    stagger: Some(Stagger::amount(
                        1.5,
                        StaggerFrom::Random {
                            seed: NAME_STAGGER_SEED,
                        },
                    )),
                    ..TweenVars::default()
                },
            )
        }),
    )?;
    reveal.tween_mut().play(0.0);
    Ok(reveal)
}

/// Lines slide up out of their masks and fade in, 0.1 s apart, played at a fifth of real speed.
/// Re-splits when resized.
#[tracing::instrument]
pub fn about_reveal(text: &str, max_line_chars: Option<usize>) -> SheenResult<Reveal> {
    let split = SplitText::new(
        text,
        SplitConfig {
            auto_split: true,
            mask_lines: true,
            ..SplitConfig::words_and_lines(max_line_chars)
        },
    );
    let mut reveal = Reveal::new(
        split,
        SegmentKind::Line,
        Box::new(|split: &SplitText| {
            Tween::from_props(
                split.lines().len(),
                TweenVars {
                    from: vec![(Prop::YPercent, 100.0), (Prop::Opacity, 0.0)],
                    duration: 0.6,
                    ease: Ease::OutExpo,
                    stagger: Some(Stagger::each(0.1)),
                    delay: 0.0,
                },
            )
        }),
    )?;
    reveal.tween_mut().time_scale(0.2).play(0.0);
    Ok(reveal)
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/page.rs"]
mod tests;
