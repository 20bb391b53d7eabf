//! Device catalogues: the BCR2000 surface and the Axe-FX it drives

pub mod axefx;
pub mod bcr2000;

pub use axefx::{decode_parameter, AxeFx, DecodedParameter, Model, SysexMessage};
pub use bcr2000::ControlElement;
