//! Parametric IHP cells.

use std::sync::Arc;

use crate::context::Context;
use crate::error::Result;
use crate::IhpCell;

pub mod bondpad;
pub mod inductor;

pub use bondpad::{Bondpad, BondpadArray, BondpadShape};
pub use inductor::{inductor_min_diameter, CoilGeometry, Inductor};

/// Generates a single bondpad.
pub fn bondpad(params: &Bondpad) -> Result<Arc<IhpCell>> {
    Context::new().generate(params)
}

/// Generates a row of bondpads.
pub fn bondpad_array(params: &BondpadArray) -> Result<Arc<IhpCell>> {
    Context::new().generate(params)
}

/// Generates an inductor with the given parameters.
pub fn inductor(params: &Inductor) -> Result<Arc<IhpCell>> {
    Context::new().generate(params)
}

/// Generates the default `inductor2` device.
pub fn inductor2() -> Result<Arc<IhpCell>> {
    inductor(&Inductor::inductor2())
}

/// Generates the default `inductor3` device.
pub fn inductor3() -> Result<Arc<IhpCell>> {
    inductor(&Inductor::inductor3())
}
