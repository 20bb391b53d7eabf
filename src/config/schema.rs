//! Configuration schema definitions

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::device::{axefx, bcr2000, Model};
use crate::mapping::{
    BlockId, ControlId, ControlType, LinearScale, MappingEntry, MappingTable, ParamId,
    SwitchThreshold, AXEFX_MAX_VALUE, DEFAULT_THRESHOLD,
};
use crate::midi::MidiChannelConfig;

/// Main configuration for the bridge
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// MIDI channel settings
    #[serde(default)]
    pub midi: MidiSettings,

    /// Target device
    #[serde(default)]
    pub device: DeviceSettings,

    /// Switch on/off decision
    #[serde(default)]
    pub switch: SwitchSettings,

    /// Wire value range for resolved values
    #[serde(default)]
    pub scaling: ScalingSettings,

    /// Mapping rows; the built-in layout is used when absent
    #[serde(default)]
    pub mappings: Option<Vec<MappingConfig>>,
}

impl BridgeConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.channels()?;
        self.switch_threshold()?;

        // Validate scaling against the device range
        if self.scaling.min > AXEFX_MAX_VALUE || self.scaling.max > AXEFX_MAX_VALUE {
            bail!(
                "Scaling range must be within 0..={}, got {}..={}",
                AXEFX_MAX_VALUE,
                self.scaling.min,
                self.scaling.max
            );
        }

        self.mapping_table()?;
        Ok(())
    }

    /// Validated channel pair
    pub fn channels(&self) -> Result<MidiChannelConfig> {
        MidiChannelConfig::new(self.midi.axefx_channel, self.midi.bcr_channel)
            .context("invalid MIDI channel settings")
    }

    /// Validated switch threshold
    pub fn switch_threshold(&self) -> Result<SwitchThreshold> {
        SwitchThreshold::new(self.switch.threshold).context("invalid switch settings")
    }

    pub fn scale(&self) -> LinearScale {
        LinearScale::new(self.scaling.min, self.scaling.max)
    }

    /// Build the mapping table, from the file rows or the built-in layout
    pub fn mapping_table(&self) -> Result<MappingTable> {
        let Some(rows) = &self.mappings else {
            return Ok(defaults::table()?);
        };

        let entries = rows
            .iter()
            .enumerate()
            .map(|(i, row)| row.to_entry().with_context(|| format!("mapping #{}", i + 1)))
            .collect::<Result<Vec<_>>>()?;

        Ok(MappingTable::build(entries)?)
    }
}

/// MIDI channel configuration (1-16)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MidiSettings {
    /// Channel of the Axe-FX (default: 1)
    #[serde(default = "default_axefx_channel")]
    pub axefx_channel: u8,

    /// Channel of the BCR2000 (default: 16)
    #[serde(default = "default_bcr_channel")]
    pub bcr_channel: u8,
}

impl Default for MidiSettings {
    fn default() -> Self {
        Self {
            axefx_channel: default_axefx_channel(),
            bcr_channel: default_bcr_channel(),
        }
    }
}

fn default_axefx_channel() -> u8 { 1 }
fn default_bcr_channel() -> u8 { 16 }

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceSettings {
    /// Axe-FX model (default: axe_fx_ii)
    #[serde(default)]
    pub model: Model,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchSettings {
    /// Values at or above this are on (default: 64)
    #[serde(default = "default_threshold")]
    pub threshold: u8,
}

impl Default for SwitchSettings {
    fn default() -> Self {
        Self { threshold: default_threshold() }
    }
}

fn default_threshold() -> u8 { DEFAULT_THRESHOLD }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalingSettings {
    /// Wire value for controller value 0 (default: 0)
    #[serde(default)]
    pub min: u16,

    /// Wire value for controller value 127 (default: 65534)
    #[serde(default = "default_scale_max")]
    pub max: u16,
}

impl Default for ScalingSettings {
    fn default() -> Self {
        Self { min: 0, max: default_scale_max() }
    }
}

fn default_scale_max() -> u16 { AXEFX_MAX_VALUE }

/// A number or a catalogue name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdRef {
    Number(u16),
    Name(String),
}

/// One mapping row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingConfig {
    /// BCR2000 control, e.g. `encoder1_group1` or `0`
    pub control: IdRef,

    /// Axe-FX block, e.g. `amp1` or `106`
    pub block: IdRef,

    /// Block parameter, e.g. `gain` or `1`
    pub param: IdRef,

    /// Encoder or switch
    #[serde(rename = "type")]
    pub control_type: ControlType,
}

impl MappingConfig {
    /// Resolve names and range-check ids
    pub fn to_entry(&self) -> Result<MappingEntry> {
        let control = match &self.control {
            IdRef::Number(n) => ControlId::try_from(*n)?,
            IdRef::Name(name) => bcr2000::find(name)
                .ok_or_else(|| anyhow!("unknown BCR2000 control '{}'", name))?,
        };

        let (block, def) = match &self.block {
            IdRef::Number(n) => {
                let id = BlockId::try_from(*n)?;
                (id, axefx::block(id))
            }
            IdRef::Name(name) => {
                let def = axefx::find_block(name)
                    .ok_or_else(|| anyhow!("unknown Axe-FX block '{}'", name))?;
                (def.id, Some(def))
            }
        };

        let param = match &self.param {
            IdRef::Number(n) => ParamId::try_from(*n)?,
            IdRef::Name(name) => match def {
                Some(def) => def.find_param(name).ok_or_else(|| {
                    anyhow!("block '{}' has no parameter named '{}'", def.name, name)
                })?,
                None => bail!("parameter '{}' needs a named block, got block {}", name, block),
            },
        };

        Ok(MappingEntry::new(control, block, param, self.control_type))
    }
}
