//! "From" tweens over a list of targets.
//!
//! Each target animates from the given property values to its natural state (fully opaque, no
//! offset). Targets start at staggered offsets; the tween's own clock advances by real time
//! multiplied by its time scale.

use crate::{
    foundation::error::{SheenError, SheenResult},
    foundation::math::Rng64,
    reveal::ease::Ease,
};

/// Animatable target property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Prop {
    Opacity,
    /// Opacity that also hides the target entirely while it is 0.
    AutoAlpha,
    /// Vertical offset as a percentage of the target's own height.
    YPercent,
}

impl Prop {
    /// Value the target rests at when not animated.
    pub fn natural(self) -> f64 {
        match self {
            Self::Opacity | Self::AutoAlpha => 1.0,
            Self::YPercent => 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaggerFrom {
    #[default]
    Start,
    End,
    Center,
    /// Shuffled order, reproducible from `seed`.
    Random { seed: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaggerTiming {
    /// Seconds between consecutive starts.
    Each(f64),
    /// Seconds between the first and the last start.
    Amount(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stagger {
    pub timing: StaggerTiming,
    #[serde(default)]
    pub from: StaggerFrom,
}

impl Stagger {
    pub fn each(secs: f64) -> Self {
        Self {
            timing: StaggerTiming::Each(secs),
            from: StaggerFrom::Start,
        }
    }

    pub fn amount(secs: f64, from: StaggerFrom) -> Self {
        Self {
            timing: StaggerTiming::Amount(secs),
            from,
        }
    }

    /// Start offset in seconds for each of `n` targets.
    pub fn offsets(&self, n: usize) -> Vec<f64> {
        if n == 0 {
            return Vec::new();
        }
        let ranks: Vec<f64> = match self.from {
            StaggerFrom::Start => (0..n).map(|i| i as f64).collect(),
            StaggerFrom::End => (0..n).map(|i| (n - 1 - i) as f64).collect(),
            StaggerFrom::Center => {
                let c = (n - 1) as f64 / 2.0;
                (0..n).map(|i| (i as f64 - c).abs()).collect()
            }
            StaggerFrom::Random { seed } => {
                let mut order: Vec<usize> = (0..n).collect();
                Rng64::new(seed).shuffle(&mut order);
                let mut ranks = vec![0.0; n];
                for (rank, target) in order.into_iter().enumerate() {
                    ranks[target] = rank as f64;
                }
                ranks
            }
        };
        let max_rank = ranks.iter().copied().fold(0.0, f64::max);
        let each = match self.timing {
            StaggerTiming::Each(e) => e,
            StaggerTiming::Amount(_) if max_rank == 0.0 => 0.0,
            StaggerTiming::Amount(a) => a / max_rank,
        };
        ranks.into_iter().map(|r| r * each).collect()
    }

    fn validate(&self) -> SheenResult<()> {
        let v = match self.timing {
            StaggerTiming::Each(v) | StaggerTiming::Amount(v) => v,
        };
        if !v.is_finite() || v < 0.0 {
            return Err(SheenError::invalid_argument(format!(
                "stagger must be finite and >= 0, got {v}"
            )));
        }
        Ok(())
    }
}

/// Tween parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TweenVars {
    /// Starting value per animated property.
    pub from: Vec<(Prop, f64)>,
    /// Seconds each target takes.
    pub duration: f64,
    #[serde(default)]
    pub ease: Ease,
    #[serde(default)]
    pub stagger: Option<Stagger>,
    /// Seconds before the first target starts.
    #[serde(default)]
    pub delay: f64,
}

impl Default for TweenVars {
    fn default() -> Self {
        Self {
            from: Vec::new(),
            duration: 0.5,
            ease: Ease::default(),
            stagger: None,
            delay: 0.0,
        }
    }
}

/// Animated state of one target.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TargetState {
    pub opacity: f64,
    pub y_percent: f64,
    /// `false` while an auto-alpha target sits at opacity 0.
    pub visible: bool,
}

impl Default for TargetState {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            y_percent: 0.0,
            visible: true,
        }
    }
}

/// A playable "from" tween over `target_count` targets.
#[derive(Clone, Debug)]
pub struct Tween {
    vars: TweenVars,
    offsets: Vec<f64>,
    time: f64,
    time_scale: f64,
    playing: bool,
}

impl Tween {
    /// Build a paused tween at time 0. Targets render in their `from` state until they start.
    pub fn from_props(target_count: usize, vars: TweenVars) -> SheenResult<Self> {
        if !vars.duration.is_finite() || vars.duration < 0.0 {
            return Err(SheenError::invalid_argument(format!(
                "tween duration must be finite and >= 0, got {}",
                vars.duration
            )));
        }
        if !vars.delay.is_finite() || vars.delay < 0.0 {
            return Err(SheenError::invalid_argument(format!(
                "tween delay must be finite and >= 0, got {}",
                vars.delay
            )));
        }
        if let Some(stagger) = &vars.stagger {
            stagger.validate()?;
        }
        let offsets = match &vars.stagger {
            Some(s) => s.offsets(target_count),
            None => vec![0.0; target_count],
        };
        Ok(Self {
            vars,
            offsets,
            time: 0.0,
            time_scale: 1.0,
            playing: false,
        })
    }

    pub fn vars(&self) -> &TweenVars {
        &self.vars
    }

    pub fn target_count(&self) -> usize {
        self.offsets.len()
    }

    /// Seconds from start until the last target settles, at time scale 1.
    pub fn total_duration(&self) -> f64 {
        let last_start = self.offsets.iter().copied().fold(0.0, f64::max);
        self.vars.delay + last_start + self.vars.duration
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn progress(&self) -> f64 {
        let total = self.total_duration();
        if total <= 0.0 {
            return 1.0;
        }
        (self.time / total).clamp(0.0, 1.0)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_complete(&self) -> bool {
        self.time >= self.total_duration()
    }

    /// Playback speed multiplier; values <= 0 or non-finite are ignored.
    pub fn time_scale(&mut self, scale: f64) -> &mut Self {
        if scale.is_finite() && scale > 0.0 {
            self.time_scale = scale;
        } else {
            tracing::debug!(scale, "ignoring invalid time scale");
        }
        self
    }

    pub fn current_time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Jump to `from` seconds and start playing.
    pub fn play(&mut self, from: f64) -> &mut Self {
        self.seek(from);
        self.playing = true;
        self
    }

    pub fn pause(&mut self) -> &mut Self {
        self.playing = false;
        self
    }

    pub fn seek(&mut self, time: f64) -> &mut Self {
        self.time = time.clamp(0.0, self.total_duration());
        self
    }

    /// Advance by `dt` seconds of wall time. Stops playing once complete.
    pub fn advance(&mut self, dt: f64) {
        if !self.playing || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.seek(self.time + dt * self.time_scale);
        if self.is_complete() {
            self.playing = false;
        }
    }

    /// Eased progress in `[0, 1]` of target `i` at the current time.
    pub fn target_progress(&self, i: usize) -> f64 {
        let Some(&offset) = self.offsets.get(i) else {
            return 1.0;
        };
        let local = self.time - self.vars.delay - offset;
        let p = if self.vars.duration <= 0.0 {
            if local >= 0.0 { 1.0 } else { 0.0 }
        } else {
            local / self.vars.duration
        };
        self.vars.ease.apply(p)
    }

    /// Current state of every target.
    pub fn sample(&self) -> Vec<TargetState> {
        (0..self.offsets.len())
            .map(|i| {
                let e = self.target_progress(i);
                let mut st = TargetState::default();
                for &(prop, from) in &self.vars.from {
                    let v = from + (prop.natural() - from) * e;
                    match prop {
                        Prop::Opacity => st.opacity = v,
                        Prop::AutoAlpha => {
                            st.opacity = v;
                            st.visible = v > 0.0;
                        }
                        Prop::YPercent => st.y_percent = v,
                    }
                }
                st
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/tween.rs"]
mod tests;
