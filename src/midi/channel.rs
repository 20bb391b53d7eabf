//! MIDI channel numbers

use std::fmt;

use crate::error::ChannelError;

/// A MIDI channel in the 1..=16 numbering used on device front panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MidiChannel(u8);

impl MidiChannel {
    pub fn new(channel: u8) -> Result<Self, ChannelError> {
        if (1..=16).contains(&channel) {
            Ok(Self(channel))
        } else {
            Err(ChannelError::OutOfRangeChannel(channel))
        }
    }

    /// Channel carried in the low nibble of a status byte
    pub fn from_status(status: u8) -> Self {
        Self((status & 0x0F) + 1)
    }

    /// 1-based channel number
    pub fn number(self) -> u8 {
        self.0
    }

    /// 0-based nibble for status bytes
    pub fn index(self) -> u8 {
        self.0 - 1
    }
}

impl fmt::Display for MidiChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Channels used by the two devices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiChannelConfig {
    /// Channel the Axe-FX listens on
    pub axefx: MidiChannel,
    /// Channel the BCR2000 sends and receives on
    pub bcr: MidiChannel,
}

impl MidiChannelConfig {
    pub fn new(axefx: u8, bcr: u8) -> Result<Self, ChannelError> {
        Ok(Self {
            axefx: MidiChannel::new(axefx)?,
            bcr: MidiChannel::new(bcr)?,
        })
    }
}

impl Default for MidiChannelConfig {
    fn default() -> Self {
        Self {
            axefx: MidiChannel(1),
            bcr: MidiChannel(16),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_range() {
        assert_eq!(MidiChannel::new(1).unwrap().index(), 0);
        assert_eq!(MidiChannel::new(16).unwrap().index(), 15);
        assert_eq!(MidiChannel::new(0), Err(ChannelError::OutOfRangeChannel(0)));
        assert_eq!(MidiChannel::new(17), Err(ChannelError::OutOfRangeChannel(17)));
    }

    #[test]
    fn test_channel_from_status() {
        assert_eq!(MidiChannel::from_status(0xB0).number(), 1);
        assert_eq!(MidiChannel::from_status(0xBF).number(), 16);
    }

    #[test]
    fn test_channel_config_default() {
        let config = MidiChannelConfig::default();
        assert_eq!(config.axefx.number(), 1);
        assert_eq!(config.bcr.number(), 16);
    }

    #[test]
    fn test_channel_config_validates_both() {
        assert!(MidiChannelConfig::new(1, 16).is_ok());
        assert_eq!(
            MidiChannelConfig::new(1, 20),
            Err(ChannelError::OutOfRangeChannel(20))
        );
    }
}
