//! Control Change messages from the control surface

use super::channel::MidiChannel;

const CONTROL_CHANGE: u8 = 0xB0;

/// Control change: channel, controller (0-127), value (0-127)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlChange {
    pub channel: MidiChannel,
    pub controller: u8,
    pub value: u8,
}

impl ControlChange {
    pub fn new(channel: MidiChannel, controller: u8, value: u8) -> Self {
        Self {
            channel,
            controller: controller & 0x7F,
            value: value & 0x7F,
        }
    }

    /// Parse a raw 3-byte message, `None` for anything that is not a CC
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        let &[status, controller, value] = bytes else {
            return None;
        };

        if status & 0xF0 != CONTROL_CHANGE || controller > 0x7F || value > 0x7F {
            return None;
        }

        Some(Self {
            channel: MidiChannel::from_status(status),
            controller,
            value,
        })
    }

    /// Convert to raw MIDI bytes.
    pub fn to_bytes(&self) -> [u8; 3] {
        [
            CONTROL_CHANGE | self.channel.index(),
            self.controller & 0x7F,
            self.value & 0x7F,
        ]
    }
}
