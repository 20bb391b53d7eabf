//! Translates BCR2000 Control Change messages into Axe-FX SysEx
//!
//! The bridge is immutable once built and holds no I/O. A MIDI transport
//! feeds it every incoming message and forwards whatever it returns.

use anyhow::Result;

use crate::config::BridgeConfig;
use crate::device::{AxeFx, SysexMessage};
use crate::mapping::{
    ControlId, LinearScale, MappingTable, ParameterChange, Resolver, ValueScaler,
};
use crate::midi::{ControlChange, MidiChannelConfig};

/// Everything produced for one control move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub change: ParameterChange,
    /// Value after scaling, as carried on the wire
    pub wire_value: u16,
    pub message: SysexMessage,
}

/// Control Change to SysEx translator, scaling resolved values with `S`
pub struct Bridge<S = LinearScale> {
    table: MappingTable,
    channels: MidiChannelConfig,
    resolver: Resolver,
    scale: S,
    device: AxeFx,
}

impl Bridge {
    /// Create a bridge with default threshold, scaling and device
    pub fn new(table: MappingTable, channels: MidiChannelConfig) -> Self {
        Self {
            table,
            channels,
            resolver: Resolver::default(),
            scale: LinearScale::default(),
            device: AxeFx::default(),
        }
    }

    /// Build a bridge from validated configuration
    pub fn from_config(config: &BridgeConfig) -> Result<Self> {
        let bridge = Self::new(config.mapping_table()?, config.channels()?)
            .with_resolver(Resolver::new(config.switch_threshold()?))
            .with_scale(config.scale())
            .with_device(AxeFx::new(config.device.model));

        log::info!(
            "bridge ready: {} mappings, BCR2000 on channel {}, {} on channel {}",
            bridge.table.len(),
            bridge.channels.bcr,
            bridge.device.model().name(),
            bridge.channels.axefx,
        );

        Ok(bridge)
    }
}

impl<S: ValueScaler> Bridge<S> {
    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Replace the value scaler, possibly with another type
    pub fn with_scale<T: ValueScaler>(self, scale: T) -> Bridge<T> {
        Bridge {
            table: self.table,
            channels: self.channels,
            resolver: self.resolver,
            scale,
            device: self.device,
        }
    }

    pub fn with_device(mut self, device: AxeFx) -> Self {
        self.device = device;
        self
    }

    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    pub fn channels(&self) -> MidiChannelConfig {
        self.channels
    }

    pub fn device(&self) -> AxeFx {
        self.device
    }

    /// Handle a raw incoming message
    ///
    /// Returns the SysEx to send, or `None` when the message is not a CC
    /// from the BCR2000 or the control is unmapped.
    pub fn handle(&self, bytes: &[u8]) -> Option<SysexMessage> {
        let Some(cc) = ControlChange::parse(bytes) else {
            log::trace!("ignoring non-CC message {:02X?}", bytes);
            return None;
        };
        self.handle_cc(cc)
    }

    /// Handle an already parsed Control Change
    pub fn handle_cc(&self, cc: ControlChange) -> Option<SysexMessage> {
        if cc.channel != self.channels.bcr {
            log::trace!("ignoring CC {} on channel {}", cc.controller, cc.channel);
            return None;
        }

        let control = ControlId::new(cc.controller)?;
        self.translate(control, cc.value).map(|t| t.message)
    }

    /// Resolve, scale and encode a move of `control` to `raw`
    pub fn translate(&self, control: ControlId, raw: u8) -> Option<Translation> {
        let Some(entry) = self.table.lookup(control) else {
            log::debug!("control {} is not mapped", control);
            return None;
        };

        let change = self.resolver.resolve(&entry, raw);
        let wire_value = self.scale.scale(change.value);
        let message = self.device.parameter_set(change.address, wire_value);

        log::debug!(
            "control {} -> block {} param {} value {} ({})",
            control,
            change.address.block,
            change.address.param,
            change.value,
            wire_value,
        );

        Some(Translation {
            change,
            wire_value,
            message,
        })
    }
}
