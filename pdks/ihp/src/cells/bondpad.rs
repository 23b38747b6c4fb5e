//! Wire-bond and flip-chip pads.

use std::fmt::Display;
use std::str::FromStr;

use arcstr::ArcStr;
use geometry::prelude::{Point, Transformation};
use geometry::snap::snap_to_grid2x;
use layir::{CellBuilder, Instance, Port};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::context::{Context, Generator};
use crate::error::{Error, Result};
use crate::layers::IhpLayer;
use crate::primitives::{circle, octagon, rectangle};
use crate::IhpCell;

/// Database grid on which octagon side lengths are snapped.
pub const PAD_GRID: f64 = 0.001;

/// Default size offsets of the passivation and deep-fill openings.
pub const DEFAULT_BBOX_OFFSETS: [f64; 2] = [-2.1, 0.0];

/// The outline of a bondpad.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BondpadShape {
    /// A regular octagon with axis-aligned flats.
    #[default]
    Octagon,
    /// A square.
    Square,
    /// A polygonal circle approximation.
    Circle,
}

impl BondpadShape {
    /// The lowercase name of the shape.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Octagon => "octagon",
            Self::Square => "square",
            Self::Circle => "circle",
        }
    }

    /// The outline of a pad of diameter `d`, grown by `offset`.
    ///
    /// An offset of zero gives the pad itself.
    fn outline(&self, d: f64, offset: f64) -> geometry::shape::Shape {
        match self {
            Self::Square => rectangle((d + offset, d + offset), true).into(),
            Self::Octagon => {
                octagon(snap_to_grid2x(offset + d / (1. + 2f64.sqrt()), PAD_GRID)).into()
            }
            Self::Circle => circle(d / 2. + offset / 2.).into(),
        }
    }
}

impl FromStr for BondpadShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "octagon" => Ok(Self::Octagon),
            "square" => Ok(Self::Square),
            "circle" => Ok(Self::Circle),
            _ => Err(Error::InvalidShape(s.to_string())),
        }
    }
}

impl Display for BondpadShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BondpadShape {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BondpadShape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// A single bondpad with a port named `pad` at its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bondpad {
    /// The pad outline.
    pub shape: BondpadShape,
    /// The pad size in micrometers.
    pub diameter: f64,
    /// The layer of the pad itself.
    pub layer_top_metal: IhpLayer,
    /// The passivation opening layer.
    pub layer_passiv: IhpLayer,
    /// The deep-fill pad layer.
    pub layer_dfpad: IhpLayer,
    /// Size offsets of the passivation and deep-fill openings, in that order.
    ///
    /// Layers without a matching offset are not drawn.
    pub bbox_offsets: Option<Vec<f64>>,
}

impl Default for Bondpad {
    fn default() -> Self {
        Self {
            shape: BondpadShape::Octagon,
            diameter: 80.0,
            layer_top_metal: IhpLayer::TopMetal2Drawing,
            layer_passiv: IhpLayer::PassivPillar,
            layer_dfpad: IhpLayer::DfpadDrawing,
            bbox_offsets: Some(DEFAULT_BBOX_OFFSETS.to_vec()),
        }
    }
}

impl Generator for Bondpad {
    fn name(&self) -> ArcStr {
        arcstr::literal!("bondpad")
    }

    fn generate(&self, _ctx: &Context) -> Result<IhpCell> {
        let d = self.diameter;
        tracing::debug!(shape = %self.shape, diameter = d, "generating bondpad");
        if d <= 0. {
            tracing::warn!(diameter = d, "bondpad diameter is not positive");
        }

        let mut b = CellBuilder::new(self.name());
        b.add_shape(self.layer_top_metal, self.shape.outline(d, 0.));

        let openings = [self.layer_passiv, self.layer_dfpad];
        for (layer, offset) in openings
            .into_iter()
            .zip(self.bbox_offsets.iter().flatten())
        {
            b.add_shape(layer, self.shape.outline(d, *offset));
        }

        b.add_port(Port::new(
            "pad",
            Point::zero(),
            d,
            0.,
            self.layer_top_metal,
        ))?;

        b.set_info("shape", self.shape.as_str());
        b.set_info("diameter", d);
        b.set_info("top_metal", self.layer_top_metal.name());
        Ok(b.build())
    }
}

/// A row of identical bondpads along the x axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BondpadArray {
    /// The number of pads.
    pub n_pads: usize,
    /// The center-to-center distance between adjacent pads.
    pub pad_pitch: f64,
    /// The size of each pad.
    pub pad_diameter: f64,
    /// The outline of each pad.
    pub shape: BondpadShape,
    /// The layer of the pads themselves.
    pub layer_top_metal: IhpLayer,
    /// The passivation opening layer.
    pub layer_passiv: IhpLayer,
    /// The deep-fill pad layer.
    pub layer_dfpad: IhpLayer,
    /// Size offsets of the passivation and deep-fill openings.
    pub bbox_offsets: Option<Vec<f64>>,
}

impl Default for BondpadArray {
    fn default() -> Self {
        let pad = Bondpad::default();
        Self {
            n_pads: 4,
            pad_pitch: 100.0,
            pad_diameter: pad.diameter,
            shape: pad.shape,
            layer_top_metal: pad.layer_top_metal,
            layer_passiv: pad.layer_passiv,
            layer_dfpad: pad.layer_dfpad,
            bbox_offsets: pad.bbox_offsets,
        }
    }
}

impl BondpadArray {
    /// The parameters of each pad in the array.
    pub fn pad(&self) -> Bondpad {
        Bondpad {
            shape: self.shape,
            diameter: self.pad_diameter,
            layer_top_metal: self.layer_top_metal,
            layer_passiv: self.layer_passiv,
            layer_dfpad: self.layer_dfpad,
            bbox_offsets: self.bbox_offsets.clone(),
        }
    }
}

impl Generator for BondpadArray {
    fn name(&self) -> ArcStr {
        arcstr::literal!("bondpad_array")
    }

    fn generate(&self, ctx: &Context) -> Result<IhpCell> {
        tracing::debug!(
            n_pads = self.n_pads,
            pad_pitch = self.pad_pitch,
            "generating bondpad array"
        );
        let mut b = CellBuilder::new(self.name());

        if self.n_pads > 0 {
            let pad = ctx.generate(&self.pad())?;
            let layer = pad
                .try_port("pad")
                .map(|port| *port.layer())
                .unwrap_or(self.layer_top_metal);

            for i in 0..self.n_pads {
                let x = i as f64 * self.pad_pitch;
                let name = format!("pad_{}", i + 1);
                b.add_instance(Instance::with_transformation(
                    pad.clone(),
                    name.as_str(),
                    Transformation::translate(x, 0.),
                ))?;
                b.add_port(Port::new(
                    name,
                    Point::new(x, 0.),
                    self.pad_diameter,
                    0.,
                    layer,
                ))?;
            }
        }

        b.set_info("n_pads", self.n_pads);
        b.set_info("pad_pitch", self.pad_pitch);
        b.set_info("pad_diameter", self.pad_diameter);
        Ok(b.build())
    }
}
