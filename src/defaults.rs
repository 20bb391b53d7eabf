//! Built-in layout
//!
//! Encoder group 1 and button row 1 drive amp 1, encoder group 2 and
//! button row 2 drive amp 2. Used whenever the configuration file does not
//! list its own mappings.

use crate::device::axefx::{amp, AMP1, AMP2};
use crate::device::bcr2000::{button, group_encoder};
use crate::error::MappingError;
use crate::mapping::{BlockId, ControlType, MappingEntry, MappingTable, ParamId};

const ENCODER_PARAMS: [ParamId; 8] = [
    amp::GAIN,
    amp::DRIVE,
    amp::BASS,
    amp::MID,
    amp::TREBLE,
    amp::PRESENCE,
    amp::MASTER,
    amp::LEVEL,
];

const SWITCH_PARAMS: [ParamId; 4] = [amp::SW_BOOST, amp::SW_CUT, amp::SW_FAT, amp::SW_BRIGHT];

/// Rows of the built-in layout, amp 1 first
pub fn entries() -> Vec<MappingEntry> {
    let amps: [(u8, BlockId); 2] = [(1, AMP1), (2, AMP2)];
    let mut rows = Vec::with_capacity(24);

    for (section, block) in amps {
        for (position, param) in (1u8..).zip(ENCODER_PARAMS) {
            rows.push(MappingEntry::new(
                group_encoder(section, position),
                block,
                param,
                ControlType::Encoder,
            ));
        }
        for (position, param) in (1u8..).zip(SWITCH_PARAMS) {
            rows.push(MappingEntry::new(
                button(section, position),
                block,
                param,
                ControlType::Switch,
            ));
        }
    }

    rows
}

/// The built-in table
pub fn table() -> Result<MappingTable, MappingError> {
    MappingTable::build(entries())
}
