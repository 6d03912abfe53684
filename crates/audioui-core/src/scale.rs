//! Normalization curves for continuous parameters.
//!
//! A scale is a pair of functions on \[0.0, 1.0\]: `forward` bends the linear
//! position of a real value into the displayed/normalized position, and
//! `inverse` undoes it. Scales act in the *normalized* domain only, so the same
//! curve works for any `min..max` range, including ranges that cross zero.
//!
//! # Canonical Curves
//!
//! - **Linear**: identity.
//! - **Log**: `forward(n) = ln(n·(e−1)+1)`, `inverse(s) = (e^s − 1)/(e − 1)`.
//!   Low real values get more travel; the linear midpoint sits above 0.5.
//! - **Exp**: Log with the two directions swapped. High values get more travel.
//!
//! Both directions clamp their input: anything `<= 0` maps to exactly `0.0` and
//! anything `>= 1` to exactly `1.0`, so endpoints never drift and `ln(0)` is
//! never evaluated.
//!
//! # Example
//!
//! ```rust
//! use audioui_core::ScaleType;
//!
//! let log = ScaleType::Log;
//! assert!(log.forward(0.5) > 0.5);
//! assert!((log.inverse(log.forward(0.3)) - 0.3).abs() < 1e-9);
//! assert_eq!(ScaleType::from_name("exp"), Some(ScaleType::Exp));
//! ```

use core::f64::consts::E;

/// A caller-supplied curve: two plain functions on \[0.0, 1.0\].
///
/// The functions should be monotonically increasing, map 0 to 0 and 1 to 1,
/// and be (approximately) inverse to each other. They are not clamped on the
/// caller's behalf beyond the \[0, 1\] clamp the converter applies to its
/// inputs.
#[derive(Debug, Clone, Copy)]
pub struct ScaleFunction {
    /// Linear position → curved position.
    pub forward: fn(f64) -> f64,
    /// Curved position → linear position.
    pub inverse: fn(f64) -> f64,
}

impl ScaleFunction {
    /// Creates a scale from a forward/inverse pair.
    pub const fn new(forward: fn(f64) -> f64, inverse: fn(f64) -> f64) -> Self {
        Self { forward, inverse }
    }
}

impl PartialEq for ScaleFunction {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::fn_addr_eq(self.forward, other.forward)
            && core::ptr::fn_addr_eq(self.inverse, other.inverse)
    }
}

/// Normalization curve of a continuous parameter.
///
/// Resolved once when the converter is built; string shortcuts from
/// configuration files go through [`ScaleType::from_name`] or
/// [`resolve_scale`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScaleType {
    /// Identity mapping (default).
    #[default]
    Linear,
    /// Logarithmic curve. More resolution at low real values.
    Log,
    /// Exponential curve. More resolution at high real values.
    Exp,
    /// User-defined curve.
    Custom(ScaleFunction),
}

impl ScaleType {
    /// Looks up one of the canonical shortcuts: `"linear"`, `"log"`, `"exp"`.
    ///
    /// Returns `None` for anything else. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Self::Linear),
            "log" => Some(Self::Log),
            "exp" => Some(Self::Exp),
            _ => None,
        }
    }

    /// Shortcut name, or `None` for custom curves.
    pub const fn name(&self) -> Option<&'static str> {
        match self {
            Self::Linear => Some("linear"),
            Self::Log => Some("log"),
            Self::Exp => Some("exp"),
            Self::Custom(_) => None,
        }
    }

    /// Returns `true` for the identity curve.
    #[inline]
    pub const fn is_linear(&self) -> bool {
        matches!(self, Self::Linear)
    }

    /// Linear position → curved position.
    #[inline]
    pub fn forward(&self, normalized: f64) -> f64 {
        match self {
            Self::Linear => normalized,
            Self::Log => log_forward(normalized),
            Self::Exp => exp_forward(normalized),
            Self::Custom(f) => (f.forward)(normalized),
        }
    }

    /// Curved position → linear position.
    #[inline]
    pub fn inverse(&self, scaled: f64) -> f64 {
        match self {
            Self::Linear => scaled,
            Self::Log => log_inverse(scaled),
            Self::Exp => exp_inverse(scaled),
            Self::Custom(f) => (f.inverse)(scaled),
        }
    }
}

impl From<ScaleFunction> for ScaleType {
    fn from(function: ScaleFunction) -> Self {
        Self::Custom(function)
    }
}

/// Resolves an optional shortcut name to a curve.
///
/// `None` and unrecognized names both yield [`ScaleType::Linear`]. The
/// fallback is lenient on purpose for callers assembling definitions at
/// runtime; configuration files are validated strictly before they get here.
pub fn resolve_scale(name: Option<&str>) -> ScaleType {
    match name {
        None => ScaleType::Linear,
        Some(name) => ScaleType::from_name(name).unwrap_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::warn!("unknown scale '{name}', falling back to linear");
            ScaleType::Linear
        }),
    }
}

#[inline]
fn unit_edges(x: f64) -> Option<f64> {
    if x <= 0.0 {
        Some(0.0)
    } else if x >= 1.0 {
        Some(1.0)
    } else {
        None
    }
}

/// Logarithmic forward curve: `ln(n·(e−1)+1)`.
pub fn log_forward(normalized: f64) -> f64 {
    if let Some(edge) = unit_edges(normalized) {
        return edge;
    }
    libm::log(normalized * (E - 1.0) + 1.0)
}

/// Inverse of [`log_forward`]: `(e^s − 1)/(e − 1)`.
pub fn log_inverse(scaled: f64) -> f64 {
    if let Some(edge) = unit_edges(scaled) {
        return edge;
    }
    (libm::exp(scaled) - 1.0) / (E - 1.0)
}

/// Exponential forward curve (the log inverse).
pub fn exp_forward(normalized: f64) -> f64 {
    log_inverse(normalized)
}

/// Inverse of [`exp_forward`] (the log forward).
pub fn exp_inverse(scaled: f64) -> f64 {
    log_forward(scaled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64) -> f64 {
        x * x
    }

    fn sqrt(x: f64) -> f64 {
        libm::sqrt(x)
    }

    #[test]
    fn test_linear_is_identity() {
        for &x in &[0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(ScaleType::Linear.forward(x), x);
            assert_eq!(ScaleType::Linear.inverse(x), x);
        }
    }

    #[test]
    fn test_endpoints_are_exact() {
        for scale in [ScaleType::Log, ScaleType::Exp] {
            assert_eq!(scale.forward(0.0), 0.0);
            assert_eq!(scale.forward(1.0), 1.0);
            assert_eq!(scale.inverse(0.0), 0.0);
            assert_eq!(scale.inverse(1.0), 1.0);
            assert_eq!(scale.forward(-3.0), 0.0);
            assert_eq!(scale.forward(7.0), 1.0);
            assert_eq!(scale.inverse(-0.1), 0.0);
            assert_eq!(scale.inverse(1.1), 1.0);
        }
    }

    #[test]
    fn test_log_pulls_midpoint_up() {
        let mid = log_forward(0.5);
        // ln(0.5·(e−1)+1) = ln(1.859...) ≈ 0.6201
        assert!((mid - 0.620_114_5).abs() < 1e-6, "got {mid}");
        assert!(exp_forward(0.5) < 0.5);
    }

    #[test]
    fn test_log_exp_are_mirrors() {
        for &x in &[0.1, 0.3, 0.6, 0.9] {
            assert_eq!(exp_forward(x), log_inverse(x));
            assert_eq!(exp_inverse(x), log_forward(x));
        }
    }

    #[test]
    fn test_round_trip() {
        for i in 1..100 {
            let x = f64::from(i) / 100.0;
            for scale in [ScaleType::Log, ScaleType::Exp] {
                let rt = scale.inverse(scale.forward(x));
                assert!((rt - x).abs() < 1e-9, "{scale:?} round trip at {x}: {rt}");
            }
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ScaleType::from_name("linear"), Some(ScaleType::Linear));
        assert_eq!(ScaleType::from_name("log"), Some(ScaleType::Log));
        assert_eq!(ScaleType::from_name("exp"), Some(ScaleType::Exp));
        assert_eq!(ScaleType::from_name("Log"), None);
        assert_eq!(ScaleType::from_name("logarithmic"), None);
    }

    #[test]
    fn test_resolve_scale_fallback() {
        assert_eq!(resolve_scale(None), ScaleType::Linear);
        assert_eq!(resolve_scale(Some("exp")), ScaleType::Exp);
        assert_eq!(resolve_scale(Some("cubic")), ScaleType::Linear);
    }

    #[test]
    fn test_custom_scale() {
        let scale = ScaleType::from(ScaleFunction::new(square, sqrt));
        assert!(!scale.is_linear());
        assert_eq!(scale.name(), None);
        assert_eq!(scale.forward(0.5), 0.25);
        assert_eq!(scale.inverse(0.25), 0.5);
        let copy = scale;
        assert_eq!(scale, copy);
        assert_ne!(scale, ScaleType::Custom(ScaleFunction::new(sqrt, square)));
    }
}
