//! Value scaling from 7-bit controller values to device parameter values

/// Largest parameter value the Axe-FX II accepts
pub const AXEFX_MAX_VALUE: u16 = 65534;

/// Trait for turning a resolved 7-bit value into a wire value
pub trait ValueScaler: Send + Sync {
    fn scale(&self, value: u8) -> u16;
}

/// Linear interpolation from 0..=127 onto an output range
///
/// The range may be inverted (`min > max`), which flips the knob direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearScale {
    out_min: u16,
    out_max: u16,
}

impl LinearScale {
    pub fn new(out_min: u16, out_max: u16) -> Self {
        Self { out_min, out_max }
    }

    /// Identity mapping, the raw value goes out unchanged
    pub fn identity() -> Self {
        Self::new(0, 127)
    }

    pub fn range(&self) -> (u16, u16) {
        (self.out_min, self.out_max)
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new(0, AXEFX_MAX_VALUE)
    }
}

impl ValueScaler for LinearScale {
    fn scale(&self, value: u8) -> u16 {
        let value = i64::from(value.min(127));
        let min = i64::from(self.out_min);
        let span = i64::from(self.out_max) - min;

        // Exact at both ends, truncating in between
        (min + span * value / 127) as u16
    }
}
