//! MIDI primitives used at the transport boundary

mod channel;
mod message;

pub use channel::{MidiChannel, MidiChannelConfig};
pub use message::ControlChange;
