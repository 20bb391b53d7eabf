//! Error types

use thiserror::Error;

use crate::mapping::ControlId;

/// Errors raised while building or configuring the mapping table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Two rows target the same physical control
    #[error("control {0} is mapped more than once")]
    DuplicateControlId(ControlId),

    /// Control ids live in 0..=127
    #[error("control id {0} is outside 0..=127")]
    ControlIdOutOfRange(u16),

    /// Block and parameter ids are 14-bit values
    #[error("{kind} id {value} does not fit in 14 bits")]
    IdOutOfRange { kind: &'static str, value: u16 },

    /// Switch threshold must split 0..=127 into two non-empty halves
    #[error("switch threshold {0} is outside 1..=127")]
    ThresholdOutOfRange(u8),
}

/// Errors raised by MIDI channel configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("MIDI channel {0} is outside 1..=16")]
    OutOfRangeChannel(u8),
}

/// Errors raised while decoding an Axe-FX SysEx message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SysexError {
    #[error("expected {expected} bytes, got {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("message is not framed by F0 .. F7")]
    MissingFraming,

    #[error("manufacturer id {0:02X?} is not Fractal Audio")]
    WrongManufacturer([u8; 3]),

    #[error("unknown model id {0:#04x}")]
    UnknownModel(u8),

    #[error("function {0:#04x} is not a parameter set")]
    UnsupportedFunction(u8),

    #[error("mode {0:#04x} is neither get nor set")]
    UnsupportedMode(u8),

    #[error("data byte {value:#04x} at offset {offset} is out of range")]
    InvalidDataByte { offset: usize, value: u8 },

    #[error("checksum mismatch: expected {expected:#04x}, found {found:#04x}")]
    ChecksumMismatch { expected: u8, found: u8 },
}
