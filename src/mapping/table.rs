//! Control-to-parameter mapping table
//!
//! A fixed array of 128 slots indexed by control id. Lookups never
//! allocate, so they are safe from a MIDI callback or interrupt handler.

use serde::{Deserialize, Serialize};

use super::ids::{BlockId, ControlId, ParamId, CONTROL_COUNT};
use crate::error::MappingError;

/// How an incoming controller value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlType {
    /// Continuous value, passed through
    Encoder,
    /// Boolean, collapsed to on/off
    Switch,
}

/// Target of a parameter change on the Axe-FX
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterAddress {
    pub block: BlockId,
    pub param: ParamId,
}

impl ParameterAddress {
    pub const fn new(block: BlockId, param: ParamId) -> Self {
        Self { block, param }
    }

    /// Wire form: block `[lsb, msb]` followed by parameter `[lsb, msb]`
    pub const fn to_bytes(self) -> [u8; 4] {
        let block = self.block.to_bytes();
        let param = self.param.to_bytes();
        [block[0], block[1], param[0], param[1]]
    }

    /// Parse the wire form, `None` if any byte has its high bit set
    pub const fn from_bytes(bytes: [u8; 4]) -> Option<Self> {
        match (
            BlockId::from_bytes([bytes[0], bytes[1]]),
            ParamId::from_bytes([bytes[2], bytes[3]]),
        ) {
            (Some(block), Some(param)) => Some(Self { block, param }),
            _ => None,
        }
    }
}

/// One row of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MappingEntry {
    pub control: ControlId,
    pub address: ParameterAddress,
    pub control_type: ControlType,
}

impl MappingEntry {
    pub const fn new(
        control: ControlId,
        block: BlockId,
        param: ParamId,
        control_type: ControlType,
    ) -> Self {
        Self {
            control,
            address: ParameterAddress::new(block, param),
            control_type,
        }
    }
}

/// Validated, immutable mapping from control id to parameter address
#[derive(Debug, Clone)]
pub struct MappingTable {
    slots: [Option<MappingEntry>; CONTROL_COUNT],
    len: usize,
}

impl MappingTable {
    /// Build a table, rejecting any control id that appears twice
    pub fn build<I>(entries: I) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = MappingEntry>,
    {
        let mut slots = [None; CONTROL_COUNT];
        let mut len = 0;

        for entry in entries {
            let slot = &mut slots[entry.control.index()];
            if slot.is_some() {
                return Err(MappingError::DuplicateControlId(entry.control));
            }
            *slot = Some(entry);
            len += 1;
        }

        Ok(Self { slots, len })
    }

    /// Find the row bound to a control, `None` if it is unmapped
    pub fn lookup(&self, control: ControlId) -> Option<MappingEntry> {
        self.slots[control.index()]
    }

    /// Same as [`lookup`](Self::lookup) for a raw CC number; ids above 127 are unmapped
    pub fn lookup_raw(&self, control: u8) -> Option<MappingEntry> {
        ControlId::new(control).and_then(|id| self.lookup(id))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Rows in ascending control id order
    pub fn iter(&self) -> impl Iterator<Item = &MappingEntry> {
        self.slots.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(control: u8, block: u16, param: u16, control_type: ControlType) -> MappingEntry {
        MappingEntry::new(
            ControlId::new(control).unwrap(),
            BlockId::new(block).unwrap(),
            ParamId::new(param).unwrap(),
            control_type,
        )
    }

    #[test]
    fn test_lookup_returns_configured_row() {
        let gain = entry(0, 0x6A, 0x01, ControlType::Encoder);
        let boost = entry(72, 0x6A, 0x28, ControlType::Switch);
        let table = MappingTable::build([gain, boost]).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup_raw(0), Some(gain));
        assert_eq!(table.lookup_raw(72), Some(boost));

        // Repeated lookups are stable
        for _ in 0..3 {
            assert_eq!(table.lookup(ControlId::new(72).unwrap()), Some(boost));
        }
    }

    #[test]
    fn test_lookup_unmapped_is_none() {
        let table = MappingTable::build([entry(0, 0x6A, 0x01, ControlType::Encoder)]).unwrap();

        for id in 1..=255u8 {
            assert_eq!(table.lookup_raw(id), None);
        }
    }

    #[test]
    fn test_build_rejects_duplicate_control() {
        let result = MappingTable::build([
            entry(5, 0x6A, 0x01, ControlType::Encoder),
            entry(5, 0x6B, 0x02, ControlType::Encoder),
        ]);

        assert_eq!(
            result.unwrap_err(),
            MappingError::DuplicateControlId(ControlId::new(5).unwrap())
        );
    }

    #[test]
    fn test_iter_sorted_by_control() {
        let table = MappingTable::build([
            entry(80, 0x6B, 0x28, ControlType::Switch),
            entry(3, 0x6A, 0x03, ControlType::Encoder),
            entry(64, 0x6A, 0x05, ControlType::Encoder),
        ])
        .unwrap();

        let ids: Vec<u8> = table.iter().map(|e| e.control.get()).collect();
        assert_eq!(ids, vec![3, 64, 80]);
    }

    #[test]
    fn test_empty_table() {
        let table = MappingTable::build(std::iter::empty()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.lookup_raw(0), None);
    }

    #[test]
    fn test_address_wire_bytes() {
        let address = ParameterAddress::new(
            BlockId::new(0x6B).unwrap(),
            ParamId::new(0x4E).unwrap(),
        );
        let bytes = address.to_bytes();
        assert_eq!(bytes, [0x6B, 0x00, 0x4E, 0x00]);
        assert_eq!(ParameterAddress::from_bytes(bytes), Some(address));
        assert_eq!(ParameterAddress::from_bytes([0xFF, 0, 0, 0]), None);
    }
}
