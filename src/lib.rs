//! axebridge - BCR2000 to Axe-FX II control bridge
//!
//! Maps encoder and button moves on a Behringer BCR2000 to Axe-FX II
//! parameter changes. The mapping table is built once at startup and
//! looked up for every incoming Control Change; the result is encoded as
//! an Axe-FX SysEx parameter-set message.

pub mod bridge;
pub mod config;
pub mod defaults;
pub mod device;
pub mod error;
pub mod mapping;
pub mod midi;

pub use bridge::Bridge;
pub use config::BridgeConfig;
pub use mapping::MappingTable;
