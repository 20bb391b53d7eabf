//! Fractal Audio Axe-FX II SysEx
//!
//! Block and parameter ids, plus the parameter-set message:
//!
//! ```text
//! F0 00 01 74 <model> 02 <blk lsb> <blk msb> <prm lsb> <prm msb> <v0> <v1> <v2> 01 <cs> F7
//! ```
//!
//! The 16-bit value is split into three 7-bit bytes, least significant
//! first. The checksum is the XOR of every byte before it, masked to 7 bits.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SysexError;
use crate::mapping::{BlockId, ParamId, ParameterAddress};

/// Fractal Audio manufacturer id
pub const MANUFACTURER: [u8; 3] = [0x00, 0x01, 0x74];

/// Length of a parameter-set message including framing
pub const PARAMETER_MESSAGE_LEN: usize = 16;

const SYSEX_START: u8 = 0xF0;
const SYSEX_END: u8 = 0xF7;
const FUNCTION_PARAMETER: u8 = 0x02;
const MODE_GET: u8 = 0x00;
const MODE_SET: u8 = 0x01;

/// Axe-FX family member; the id goes in byte 4 of every message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Model {
    #[default]
    #[serde(rename = "axe_fx_ii")]
    AxeFxII,
    #[serde(rename = "axe_fx_ii_xl")]
    AxeFxIIXl,
    #[serde(rename = "axe_fx_ii_xl_plus")]
    AxeFxIIXlPlus,
    #[serde(rename = "ax8")]
    Ax8,
}

impl Model {
    pub fn id(self) -> u8 {
        match self {
            Model::AxeFxII => 0x03,
            Model::AxeFxIIXl => 0x06,
            Model::AxeFxIIXlPlus => 0x07,
            Model::Ax8 => 0x08,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0x03 => Some(Model::AxeFxII),
            0x06 => Some(Model::AxeFxIIXl),
            0x07 => Some(Model::AxeFxIIXlPlus),
            0x08 => Some(Model::Ax8),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Model::AxeFxII => "Axe-FX II",
            Model::AxeFxIIXl => "Axe-FX II XL",
            Model::AxeFxIIXlPlus => "Axe-FX II XL+",
            Model::Ax8 => "AX8",
        }
    }
}

pub const AMP1: BlockId = BlockId::from_const(0x6A);
pub const AMP2: BlockId = BlockId::from_const(0x6B);

/// Amp block parameters
pub mod amp {
    use crate::mapping::ParamId;

    pub const GAIN: ParamId = ParamId::from_const(0x01);
    pub const BASS: ParamId = ParamId::from_const(0x02);
    pub const MID: ParamId = ParamId::from_const(0x03);
    pub const TREBLE: ParamId = ParamId::from_const(0x04);
    pub const MASTER: ParamId = ParamId::from_const(0x05);
    pub const PRESENCE: ParamId = ParamId::from_const(0x14);
    pub const LEVEL: ParamId = ParamId::from_const(0x15);
    pub const SW_BRIGHT: ParamId = ParamId::from_const(0x27);
    pub const SW_BOOST: ParamId = ParamId::from_const(0x28);
    pub const SW_CUT: ParamId = ParamId::from_const(0x2D);
    pub const TRIM: ParamId = ParamId::from_const(0x2F);
    pub const DRIVE: ParamId = ParamId::from_const(0x4A);
    pub const SW_FAT: ParamId = ParamId::from_const(0x4E);
    pub const BRIGHT: ParamId = ParamId::from_const(0x61);

    pub(super) const ALL: &[(&str, ParamId)] = &[
        ("gain", GAIN),
        ("drive", DRIVE),
        ("trim", TRIM),
        ("bass", BASS),
        ("mid", MID),
        ("treble", TREBLE),
        ("presence", PRESENCE),
        ("bright", BRIGHT),
        ("master", MASTER),
        ("level", LEVEL),
        ("sw_boost", SW_BOOST),
        ("sw_cut", SW_CUT),
        ("sw_fat", SW_FAT),
        ("sw_bright", SW_BRIGHT),
    ];
}

/// A named block and the parameters known for it
#[derive(Debug)]
pub struct BlockDef {
    pub name: &'static str,
    pub id: BlockId,
    pub params: &'static [(&'static str, ParamId)],
}

impl BlockDef {
    pub fn find_param(&self, name: &str) -> Option<ParamId> {
        let name = name.trim();
        self.params
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, id)| id)
    }

    pub fn param_name(&self, id: ParamId) -> Option<&'static str> {
        self.params.iter().find(|(_, p)| *p == id).map(|&(n, _)| n)
    }
}

/// Blocks that can be referred to by name
///
/// Any other block can still be addressed by number.
pub const BLOCKS: &[BlockDef] = &[
    BlockDef {
        name: "amp1",
        id: AMP1,
        params: amp::ALL,
    },
    BlockDef {
        name: "amp2",
        id: AMP2,
        params: amp::ALL,
    },
];

pub fn find_block(name: &str) -> Option<&'static BlockDef> {
    let name = name.trim();
    BLOCKS.iter().find(|b| b.name.eq_ignore_ascii_case(name))
}

pub fn block(id: BlockId) -> Option<&'static BlockDef> {
    BLOCKS.iter().find(|b| b.id == id)
}

/// Human-readable `block/param` label, falling back to hex ids
pub fn describe(address: ParameterAddress) -> String {
    match block(address.block) {
        Some(def) => match def.param_name(address.param) {
            Some(param) => format!("{}/{}", def.name, param),
            None => format!("{}/{}", def.name, address.param),
        },
        None => format!("{}/{}", address.block, address.param),
    }
}

/// XOR of all bytes, masked to 7 bits
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0, |acc, b| acc ^ b) & 0x7F
}

/// A complete, fixed-size SysEx message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SysexMessage {
    bytes: [u8; PARAMETER_MESSAGE_LEN],
}

impl SysexMessage {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for SysexMessage {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for SysexMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

/// Encoder for one Axe-FX unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxeFx {
    model: Model,
}

impl AxeFx {
    pub fn new(model: Model) -> Self {
        Self { model }
    }

    pub fn model(&self) -> Model {
        self.model
    }

    /// Build a message setting `address` to `value`
    pub fn parameter_set(&self, address: ParameterAddress, value: u16) -> SysexMessage {
        self.parameter_message(address, value, MODE_SET)
    }

    /// Build a message asking the unit for the current value of `address`
    pub fn parameter_get(&self, address: ParameterAddress) -> SysexMessage {
        self.parameter_message(address, 0, MODE_GET)
    }

    fn parameter_message(&self, address: ParameterAddress, value: u16, mode: u8) -> SysexMessage {
        let [blk_lsb, blk_msb, prm_lsb, prm_msb] = address.to_bytes();
        let mut bytes = [
            SYSEX_START,
            MANUFACTURER[0],
            MANUFACTURER[1],
            MANUFACTURER[2],
            self.model.id(),
            FUNCTION_PARAMETER,
            blk_lsb,
            blk_msb,
            prm_lsb,
            prm_msb,
            (value & 0x7F) as u8,
            ((value >> 7) & 0x7F) as u8,
            ((value >> 14) & 0x03) as u8,
            mode,
            0,
            SYSEX_END,
        ];
        bytes[14] = checksum(&bytes[..14]);
        SysexMessage { bytes }
    }
}

/// Contents of a parameter message read back off the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedParameter {
    pub model: Model,
    pub address: ParameterAddress,
    pub value: u16,
    /// `true` for a set, `false` for a get request
    pub set: bool,
}

/// Decode a parameter get/set message
pub fn decode_parameter(bytes: &[u8]) -> Result<DecodedParameter, SysexError> {
    if bytes.len() != PARAMETER_MESSAGE_LEN {
        return Err(SysexError::WrongLength {
            expected: PARAMETER_MESSAGE_LEN,
            found: bytes.len(),
        });
    }
    if bytes[0] != SYSEX_START || bytes[PARAMETER_MESSAGE_LEN - 1] != SYSEX_END {
        return Err(SysexError::MissingFraming);
    }

    let body = &bytes[1..PARAMETER_MESSAGE_LEN - 1];
    if let Some((i, &value)) = body.iter().enumerate().find(|(_, b)| **b > 0x7F) {
        return Err(SysexError::InvalidDataByte { offset: i + 1, value });
    }

    let manufacturer = [bytes[1], bytes[2], bytes[3]];
    if manufacturer != MANUFACTURER {
        return Err(SysexError::WrongManufacturer(manufacturer));
    }
    let model = Model::from_id(bytes[4]).ok_or(SysexError::UnknownModel(bytes[4]))?;
    if bytes[5] != FUNCTION_PARAMETER {
        return Err(SysexError::UnsupportedFunction(bytes[5]));
    }

    let expected = checksum(&bytes[..14]);
    if bytes[14] != expected {
        return Err(SysexError::ChecksumMismatch {
            expected,
            found: bytes[14],
        });
    }

    // The top value byte carries only bits 14 and 15
    if bytes[12] > 0x03 {
        return Err(SysexError::InvalidDataByte {
            offset: 12,
            value: bytes[12],
        });
    }
    let set = match bytes[13] {
        MODE_SET => true,
        MODE_GET => false,
        mode => return Err(SysexError::UnsupportedMode(mode)),
    };

    // Every byte is known to be 7-bit at this point
    let address = ParameterAddress::from_bytes([bytes[6], bytes[7], bytes[8], bytes[9]])
        .ok_or(SysexError::InvalidDataByte {
            offset: 6,
            value: bytes[6],
        })?;
    let value =
        u16::from(bytes[10]) | u16::from(bytes[11]) << 7 | u16::from(bytes[12]) << 14;

    Ok(DecodedParameter {
        model,
        address,
        value,
        set,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amp1_gain() -> ParameterAddress {
        ParameterAddress::new(AMP1, amp::GAIN)
    }

    #[test]
    fn test_parameter_set_bytes() {
        let msg = AxeFx::default().parameter_set(amp1_gain(), 0);
        assert_eq!(
            msg.as_bytes(),
            &[
                0xF0, 0x00, 0x01, 0x74, 0x03, 0x02, 0x6A, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00,
                0x01, 0x6E, 0xF7,
            ]
        );
    }

    #[test]
    fn test_value_septets() {
        let msg = AxeFx::default().parameter_set(amp1_gain(), 65534);
        // 65534 = 0b11_1111111_1111110
        assert_eq!(&msg.as_bytes()[10..13], &[0x7E, 0x7F, 0x03]);
    }

    #[test]
    fn test_decode_round_trip() {
        let address = ParameterAddress::new(AMP2, amp::SW_FAT);
        let msg = AxeFx::new(Model::AxeFxIIXlPlus).parameter_set(address, 12345);

        let decoded = decode_parameter(msg.as_bytes()).unwrap();
        assert_eq!(decoded.model, Model::AxeFxIIXlPlus);
        assert_eq!(decoded.address, address);
        assert_eq!(decoded.value, 12345);
        assert!(decoded.set);
    }

    #[test]
    fn test_decode_get_request() {
        let msg = AxeFx::default().parameter_get(amp1_gain());
        let decoded = decode_parameter(msg.as_bytes()).unwrap();
        assert!(!decoded.set);
        assert_eq!(decoded.address, amp1_gain());
    }

    #[test]
    fn test_decode_rejects_bad_checksum() {
        let msg = AxeFx::default().parameter_set(amp1_gain(), 100);
        let mut bytes = msg.as_bytes().to_vec();
        bytes[14] ^= 0x01;

        assert!(matches!(
            decode_parameter(&bytes),
            Err(SysexError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_malformed() {
        let bytes = AxeFx::default().parameter_set(amp1_gain(), 100).as_bytes().to_vec();

        assert_eq!(
            decode_parameter(&bytes[..10]),
            Err(SysexError::WrongLength { expected: 16, found: 10 })
        );

        let mut unframed = bytes.clone();
        unframed[15] = 0x00;
        assert_eq!(decode_parameter(&unframed), Err(SysexError::MissingFraming));

        let mut other_vendor = bytes.clone();
        other_vendor[3] = 0x75;
        assert_eq!(
            decode_parameter(&other_vendor),
            Err(SysexError::WrongManufacturer([0x00, 0x01, 0x75]))
        );

        let mut unknown_model = bytes.clone();
        unknown_model[4] = 0x10;
        assert_eq!(
            decode_parameter(&unknown_model),
            Err(SysexError::UnknownModel(0x10))
        );

        let mut high_bit = bytes.clone();
        high_bit[8] = 0x81;
        assert_eq!(
            decode_parameter(&high_bit),
            Err(SysexError::InvalidDataByte {
                offset: 8,
                value: 0x81
            })
        );

        // Top value byte wider than two bits, checksum kept valid
        let mut wide_value = bytes.clone();
        wide_value[12] = 0x7C;
        wide_value[14] = checksum(&wide_value[..14]);
        assert_eq!(
            decode_parameter(&wide_value),
            Err(SysexError::InvalidDataByte {
                offset: 12,
                value: 0x7C
            })
        );

        // Mode byte neither get nor set, checksum kept valid
        let mut unknown_mode = bytes;
        unknown_mode[13] = 0x05;
        unknown_mode[14] = checksum(&unknown_mode[..14]);
        assert_eq!(
            decode_parameter(&unknown_mode),
            Err(SysexError::UnsupportedMode(0x05))
        );
    }

    #[test]
    fn test_catalogue_lookup() {
        let amp2 = find_block("AMP2").unwrap();
        assert_eq!(amp2.id, AMP2);
        assert_eq!(amp2.find_param("presence"), Some(amp::PRESENCE));
        assert_eq!(amp2.param_name(amp::SW_CUT), Some("sw_cut"));
        assert!(find_block("reverb1").is_none());
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(amp1_gain()), "amp1/gain");

        let unknown = ParameterAddress::new(
            BlockId::new(0x70).unwrap(),
            ParamId::new(0x02).unwrap(),
        );
        assert_eq!(describe(unknown), "0x70/0x02");
    }

    #[test]
    fn test_message_display() {
        let msg = AxeFx::default().parameter_set(amp1_gain(), 0);
        assert_eq!(msg.to_string(), "F0 00 01 74 03 02 6A 00 01 00 00 00 00 01 6E F7");
    }
}
