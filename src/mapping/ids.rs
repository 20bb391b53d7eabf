//! Strongly typed identifiers
//!
//! Control ids address a BCR2000 element, block and parameter ids address
//! an Axe-FX parameter. They are kept apart so one can never be passed
//! where another is expected.

use std::fmt;

use crate::error::MappingError;

/// Number of addressable controls on the surface (7-bit CC numbers)
pub const CONTROL_COUNT: usize = 128;

/// Largest value a two-byte 7-bit pair can carry
pub const MAX_14BIT: u16 = 0x3FFF;

/// A physical control on the BCR2000 (0..=127)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControlId(u8);

impl ControlId {
    /// Create a control id, `None` if above 127
    pub const fn new(id: u8) -> Option<Self> {
        if id < CONTROL_COUNT as u8 {
            Some(Self(id))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }

    // Only for ids known at compile time to be in range.
    pub(crate) const fn from_const(id: u8) -> Self {
        Self(id & 0x7F)
    }
}

impl TryFrom<u16> for ControlId {
    type Error = MappingError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(ControlId::new)
            .ok_or(MappingError::ControlIdOutOfRange(value))
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Split a 14-bit value into `[lsb, msb]` septets
const fn to_septets(value: u16) -> [u8; 2] {
    [(value & 0x7F) as u8, ((value >> 7) & 0x7F) as u8]
}

/// Join `[lsb, msb]` septets, `None` if either has its high bit set
const fn from_septets(bytes: [u8; 2]) -> Option<u16> {
    if bytes[0] > 0x7F || bytes[1] > 0x7F {
        None
    } else {
        Some(bytes[0] as u16 | (bytes[1] as u16) << 7)
    }
}

macro_rules! fourteen_bit_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u16);

        impl $name {
            /// Create an id, `None` if it does not fit in 14 bits
            pub const fn new(value: u16) -> Option<Self> {
                if value <= MAX_14BIT {
                    Some(Self(value))
                } else {
                    None
                }
            }

            // Only for ids known at compile time to be in range.
            pub(crate) const fn from_const(value: u16) -> Self {
                Self(value & MAX_14BIT)
            }

            pub const fn get(self) -> u16 {
                self.0
            }

            /// Wire form: `[lsb, msb]`, seven bits each
            pub const fn to_bytes(self) -> [u8; 2] {
                to_septets(self.0)
            }

            /// Parse the wire form, `None` if a byte has its high bit set
            pub const fn from_bytes(bytes: [u8; 2]) -> Option<Self> {
                match from_septets(bytes) {
                    Some(value) => Some(Self(value)),
                    None => None,
                }
            }
        }

        impl TryFrom<u16> for $name {
            type Error = MappingError;

            fn try_from(value: u16) -> Result<Self, Self::Error> {
                Self::new(value).ok_or(MappingError::IdOutOfRange { kind: $kind, value })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:#04x}", self.0)
            }
        }
    };
}

fourteen_bit_id!(
    /// An Axe-FX effect block (e.g. amp 1 = 106)
    BlockId,
    "block"
);

fourteen_bit_id!(
    /// A parameter within an Axe-FX block (e.g. amp gain = 1)
    ParamId,
    "parameter"
);
