//! Mapping system from BCR2000 controls to Axe-FX parameters
//!
//! Builds the lookup table and turns raw controller values into
//! parameter values.

mod ids;
mod resolve;
mod scale;
mod table;
mod threshold;

pub use ids::{BlockId, ControlId, ParamId, CONTROL_COUNT, MAX_14BIT};
pub use resolve::{ParameterChange, Resolver};
pub use scale::{LinearScale, ValueScaler, AXEFX_MAX_VALUE};
pub use table::{ControlType, MappingEntry, MappingTable, ParameterAddress};
pub use threshold::{SwitchThreshold, DEFAULT_THRESHOLD, SWITCH_OFF, SWITCH_ON};
