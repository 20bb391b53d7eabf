//! Resolve a mapped control move into a parameter change

use super::table::{ControlType, MappingEntry, ParameterAddress};
use super::threshold::SwitchThreshold;

/// A parameter change ready to be scaled and encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterChange {
    pub address: ParameterAddress,
    pub control_type: ControlType,
    /// 7-bit value; for switches always `SWITCH_ON` or `SWITCH_OFF`
    pub value: u8,
}

/// Turns a raw controller value into a [`ParameterChange`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolver {
    switch: SwitchThreshold,
}

impl Resolver {
    pub fn new(switch: SwitchThreshold) -> Self {
        Self { switch }
    }

    pub fn switch_threshold(&self) -> SwitchThreshold {
        self.switch
    }

    pub fn resolve(&self, entry: &MappingEntry, raw: u8) -> ParameterChange {
        let value = match entry.control_type {
            ControlType::Encoder => raw & 0x7F,
            ControlType::Switch => self.switch.apply(raw),
        };

        ParameterChange {
            address: entry.address,
            control_type: entry.control_type,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{BlockId, ControlId, ParamId, SWITCH_OFF, SWITCH_ON};

    fn amp1(control: u8, param: u16, control_type: ControlType) -> MappingEntry {
        MappingEntry::new(
            ControlId::new(control).unwrap(),
            BlockId::new(0x6A).unwrap(),
            ParamId::new(param).unwrap(),
            control_type,
        )
    }

    #[test]
    fn test_encoder_passes_value_through() {
        let resolver = Resolver::default();
        let change = resolver.resolve(&amp1(0, 0x01, ControlType::Encoder), 100);

        assert_eq!(change.address.block.get(), 0x6A);
        assert_eq!(change.address.param.get(), 0x01);
        assert_eq!(change.control_type, ControlType::Encoder);
        assert_eq!(change.value, 100);
    }

    #[test]
    fn test_switch_collapses_value() {
        let resolver = Resolver::default();
        let boost = amp1(72, 0x28, ControlType::Switch);

        assert_eq!(resolver.resolve(&boost, 5).value, SWITCH_OFF);
        assert_eq!(resolver.resolve(&boost, 127).value, SWITCH_ON);
        assert_eq!(resolver.resolve(&boost, 64).value, SWITCH_ON);
    }

    #[test]
    fn test_custom_threshold() {
        let resolver = Resolver::new(SwitchThreshold::new(100).unwrap());
        let boost = amp1(72, 0x28, ControlType::Switch);

        assert_eq!(resolver.resolve(&boost, 99).value, SWITCH_OFF);
        assert_eq!(resolver.resolve(&boost, 100).value, SWITCH_ON);
    }
}
