use serde::{Deserialize, Serialize};

/// Default floating-point slack applied when no explicit tolerance is given.
///
/// One value per precision. A difference exactly equal to the configured
/// slack counts as a match. Negative values are accepted unchecked; they make
/// every comparison miss.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ToleranceProfile {
    /// Absolute tolerance for single-precision comparisons.
    #[serde(default = "ToleranceProfile::default_single")]
    pub single: f32,
    /// Absolute tolerance for double-precision comparisons.
    #[serde(default = "ToleranceProfile::default_double")]
    pub double: f64,
}

impl ToleranceProfile {
    const fn default_single() -> f32 {
        1e-7
    }

    const fn default_double() -> f64 {
        1e-15
    }

    /// Replaces the single-precision tolerance.
    pub fn set_single(&mut self, tolerance: f32) {
        self.single = tolerance;
    }

    /// Replaces the double-precision tolerance.
    pub fn set_double(&mut self, tolerance: f64) {
        self.double = tolerance;
    }
}

impl Default for ToleranceProfile {
    fn default() -> Self {
        Self {
            single: Self::default_single(),
            double: Self::default_double(),
        }
    }
}
