use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::core::Rgb8,
    foundation::error::{SheenError, SheenResult},
};

/// Fully resolved shine parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShineOptions {
    /// Color of pixels the sweep does not touch.
    pub base: Rgb8,
    /// Color at the center of the sweep.
    pub shine: Rgb8,
    /// Length of one full cycle in milliseconds.
    pub cycle_duration: f64,
    /// Leading fraction of each cycle during which the sweep runs, in `(0, 1]`.
    pub flash_window: f64,
    /// Gaussian sigma of the sweep band, in diagonal units.
    pub softness: f64,
}

impl Default for ShineOptions {
    fn default() -> Self {
        Self {
            base: [255, 255, 255],
            shine: [0, 0, 0],
            cycle_duration: 8000.0,
            flash_window: 0.075,
            softness: 0.15,
        }
    }
}

impl ShineOptions {
    /// Check the preconditions the painter divides by.
    pub fn validate(&self) -> SheenResult<()> {
        if !self.cycle_duration.is_finite() || self.cycle_duration <= 0.0 {
            return Err(SheenError::invalid_argument(format!(
                "cycleDuration must be finite and > 0, got {}",
                self.cycle_duration
            )));
        }
        if !self.flash_window.is_finite() || self.flash_window <= 0.0 || self.flash_window > 1.0
        {
            return Err(SheenError::invalid_argument(format!(
                "flashWindow must be in (0, 1], got {}",
                self.flash_window
            )));
        }
        if !self.softness.is_finite() || self.softness <= 0.0 {
            return Err(SheenError::invalid_argument(format!(
                "softness must be finite and > 0, got {}",
                self.softness
            )));
        }
        Ok(())
    }
}

/// Partial [`ShineOptions`]; unset fields fall back to the defaults.
///
/// Merging is single level: an override color replaces the whole triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShineOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Rgb8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shine: Option<Rgb8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flash_window: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub softness: Option<f64>,
}

impl ShineOverrides {
    /// Apply these overrides over `defaults`.
    pub fn merge_over(&self, defaults: ShineOptions) -> ShineOptions {
        ShineOptions {
            base: self.base.unwrap_or(defaults.base),
            shine: self.shine.unwrap_or(defaults.shine),
            cycle_duration: self.cycle_duration.unwrap_or(defaults.cycle_duration),
            flash_window: self.flash_window.unwrap_or(defaults.flash_window),
            softness: self.softness.unwrap_or(defaults.softness),
        }
    }

    /// Merge over [`ShineOptions::default`] and validate.
    pub fn resolve(&self) -> SheenResult<ShineOptions> {
        let opts = self.merge_over(ShineOptions::default());
        opts.validate()?;
        Ok(opts)
    }

    pub fn from_json_str(s: &str) -> SheenResult<Self> {
        serde_json::from_str(s).map_err(|e| SheenError::serde(e.to_string()))
    }

    /// Read overrides from a JSON file.
    pub fn load(path: &Path) -> SheenResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read shine options '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

impl From<ShineOptions> for ShineOverrides {
    fn from(o: ShineOptions) -> Self {
        Self {
            base: Some(o.base),
            shine: Some(o.shine),
            cycle_duration: Some(o.cycle_duration),
            flash_window: Some(o.flash_window),
            softness: Some(o.softness),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shine/options.rs"]
mod tests;
