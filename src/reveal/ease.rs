/// Easing functions used to map normalized tween progress.
///
/// Serialized names follow the `family.direction` convention used by web tweening libraries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    #[serde(rename = "none")]
    Linear,
    /// Quadratic ease-in.
    #[serde(rename = "power1.in")]
    InQuad,
    /// Quadratic ease-out. The default ease.
    #[default]
    #[serde(rename = "power1.out")]
    OutQuad,
    /// Quadratic ease-in/out.
    #[serde(rename = "power1.inOut")]
    InOutQuad,
    /// Cubic ease-in.
    #[serde(rename = "power2.in")]
    InCubic,
    /// Cubic ease-out.
    #[serde(rename = "power2.out")]
    OutCubic,
    /// Cubic ease-in/out.
    #[serde(rename = "power2.inOut")]
    InOutCubic,
    /// Exponential ease-in.
    #[serde(rename = "expo.in")]
    InExpo,
    /// Exponential ease-out: fast start, long settle.
    #[serde(rename = "expo.out")]
    OutExpo,
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InExpo => {
                if t == 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * t - 10.0)
                }
            }
            Self::OutExpo => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
        }
    }
}
