//! Switch thresholding
//!
//! Collapses a continuous controller value into one of two switch states.
//! BCR2000 buttons normally send 0 or 127, but in toggle or incremental
//! modes they may send anything in between.

use crate::error::MappingError;

/// Value sent for a switch that is on
pub const SWITCH_ON: u8 = 0x7F;

/// Value sent for a switch that is off
pub const SWITCH_OFF: u8 = 0x00;

/// Default midpoint of the 7-bit range
pub const DEFAULT_THRESHOLD: u8 = 64;

/// Level-based on/off decision
///
/// Values strictly below the threshold are off, values at or above it are on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchThreshold {
    threshold: u8,
}

impl SwitchThreshold {
    /// Create a threshold in 1..=127
    ///
    /// Zero would turn every value on, anything above 127 would turn
    /// every value off.
    pub fn new(threshold: u8) -> Result<Self, MappingError> {
        if (1..=127).contains(&threshold) {
            Ok(Self { threshold })
        } else {
            Err(MappingError::ThresholdOutOfRange(threshold))
        }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn is_on(&self, raw: u8) -> bool {
        (raw & 0x7F) >= self.threshold
    }

    /// Map a raw value to [`SWITCH_ON`] or [`SWITCH_OFF`]
    pub fn apply(&self, raw: u8) -> u8 {
        if self.is_on(raw) {
            SWITCH_ON
        } else {
            SWITCH_OFF
        }
    }
}

impl Default for SwitchThreshold {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_extremes() {
        let switch = SwitchThreshold::default();

        assert_eq!(switch.apply(0), SWITCH_OFF);
        assert_eq!(switch.apply(127), SWITCH_ON);
    }

    #[test]
    fn test_threshold_boundary_is_on() {
        let switch = SwitchThreshold::default();

        assert_eq!(switch.apply(63), SWITCH_OFF);
        assert_eq!(switch.apply(64), SWITCH_ON); // At threshold counts as on
    }

    #[test]
    fn test_threshold_custom() {
        let switch = SwitchThreshold::new(1).unwrap();

        assert_eq!(switch.apply(0), SWITCH_OFF);
        assert_eq!(switch.apply(1), SWITCH_ON);
    }

    #[test]
    fn test_threshold_rejects_degenerate_values() {
        assert_eq!(
            SwitchThreshold::new(0),
            Err(MappingError::ThresholdOutOfRange(0))
        );
        assert_eq!(
            SwitchThreshold::new(128),
            Err(MappingError::ThresholdOutOfRange(128))
        );
    }
}
