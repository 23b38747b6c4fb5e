//! Parametric layout generators for the IHP SG13G2 process.
//!
//! Generators are plain parameter structs implementing [`Generator`].
//! Build cells through a [`Context`] to share and reuse previously
//! generated sub-cells:
//!
//! ```
//! use ihp::cells::{BondpadArray, Inductor};
//! use ihp::Context;
//!
//! let ctx = Context::new();
//! let pads = ctx.generate(&BondpadArray::default()).unwrap();
//! assert_eq!(pads.ports().count(), 4);
//!
//! let ind = ctx.generate(&Inductor::inductor3()).unwrap();
//! assert!(ind.try_port("P1").is_some());
//! ```
#![warn(missing_docs)]

pub mod cells;
pub mod config;
pub mod context;
pub mod error;
pub mod layers;
pub mod layout;
pub mod primitives;

pub use context::{Context, Generator};
pub use error::{Error, Result};
pub use layers::{GdsLayer, IhpLayer};

/// A layout cell drawn on IHP layers.
pub type IhpCell = layir::Cell<IhpLayer>;
