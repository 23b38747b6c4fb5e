//! The set of IHP SG13G2 layers used by the generators.
#![allow(missing_docs)]

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use unicase::UniCase;

use crate::error::Error;

/// A numeric GDS `(layer, datatype)` pair.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct GdsLayer(pub u16, pub u16);

impl Display for GdsLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, self.1)
    }
}

/// An IHP SG13G2 mask layer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum IhpLayer {
    ActivDrawing,
    ActivNofill,
    GatPolyDrawing,
    GatPolyNofill,
    Metal1Drawing,
    Metal1Nofill,
    Metal1Pin,
    Metal2Drawing,
    Metal2Nofill,
    Metal2Pin,
    Metal3Drawing,
    Metal3Nofill,
    Metal3Pin,
    Metal4Drawing,
    Metal4Nofill,
    Metal4Pin,
    Metal5Drawing,
    Metal5Nofill,
    Metal5Pin,
    TopMetal1Drawing,
    TopMetal1Nofill,
    TopMetal1Pin,
    TopMetal2Drawing,
    TopMetal2Nofill,
    TopMetal2Pin,
    /// Inductor recognition layer.
    IndDrawing,
    /// Excludes a region from parasitic RC extraction.
    NoRcxDrawing,
    PWellBlock,
    PassivDrawing,
    PassivPillar,
    PassivSbump,
    /// Deep fill pad opening.
    DfpadDrawing,
}

/// Symbolic name and GDS pair of every layer.
const LAYER_TABLE: [(IhpLayer, &str, GdsLayer); 32] = [
    (IhpLayer::ActivDrawing, "Activdrawing", GdsLayer(1, 0)),
    (IhpLayer::ActivNofill, "Activnofill", GdsLayer(1, 23)),
    (IhpLayer::GatPolyDrawing, "GatPolydrawing", GdsLayer(5, 0)),
    (IhpLayer::GatPolyNofill, "GatPolynofill", GdsLayer(5, 23)),
    (IhpLayer::Metal1Drawing, "Metal1drawing", GdsLayer(8, 0)),
    (IhpLayer::Metal1Nofill, "Metal1nofill", GdsLayer(8, 23)),
    (IhpLayer::Metal1Pin, "Metal1pin", GdsLayer(8, 2)),
    (IhpLayer::Metal2Drawing, "Metal2drawing", GdsLayer(10, 0)),
    (IhpLayer::Metal2Nofill, "Metal2nofill", GdsLayer(10, 23)),
    (IhpLayer::Metal2Pin, "Metal2pin", GdsLayer(10, 2)),
    (IhpLayer::Metal3Drawing, "Metal3drawing", GdsLayer(30, 0)),
    (IhpLayer::Metal3Nofill, "Metal3nofill", GdsLayer(30, 23)),
    (IhpLayer::Metal3Pin, "Metal3pin", GdsLayer(30, 2)),
    (IhpLayer::Metal4Drawing, "Metal4drawing", GdsLayer(50, 0)),
    (IhpLayer::Metal4Nofill, "Metal4nofill", GdsLayer(50, 23)),
    (IhpLayer::Metal4Pin, "Metal4pin", GdsLayer(50, 2)),
    (IhpLayer::Metal5Drawing, "Metal5drawing", GdsLayer(67, 0)),
    (IhpLayer::Metal5Nofill, "Metal5nofill", GdsLayer(67, 23)),
    (IhpLayer::Metal5Pin, "Metal5pin", GdsLayer(67, 2)),
    (IhpLayer::TopMetal1Drawing, "TopMetal1drawing", GdsLayer(126, 0)),
    (IhpLayer::TopMetal1Nofill, "TopMetal1nofill", GdsLayer(126, 23)),
    (IhpLayer::TopMetal1Pin, "TopMetal1pin", GdsLayer(126, 2)),
    (IhpLayer::TopMetal2Drawing, "TopMetal2drawing", GdsLayer(134, 0)),
    (IhpLayer::TopMetal2Nofill, "TopMetal2nofill", GdsLayer(134, 23)),
    (IhpLayer::TopMetal2Pin, "TopMetal2pin", GdsLayer(134, 2)),
    (IhpLayer::IndDrawing, "INDdrawing", GdsLayer(27, 0)),
    (IhpLayer::NoRcxDrawing, "NoRCXdrawing", GdsLayer(148, 0)),
    (IhpLayer::PWellBlock, "PWellblock", GdsLayer(46, 21)),
    (IhpLayer::PassivDrawing, "Passivdrawing", GdsLayer(9, 0)),
    (IhpLayer::PassivPillar, "Passivpillar", GdsLayer(9, 35)),
    (IhpLayer::PassivSbump, "Passivsbump", GdsLayer(9, 36)),
    (IhpLayer::DfpadDrawing, "dfpaddrawing", GdsLayer(41, 0)),
];

lazy_static! {
    static ref IHP_TO_GDS_LAYER: HashMap<IhpLayer, GdsLayer> =
        HashMap::from_iter(LAYER_TABLE.iter().map(|(layer, _, gds)| (*layer, *gds)));
    static ref GDS_LAYER_TO_IHP: HashMap<GdsLayer, IhpLayer> =
        HashMap::from_iter(LAYER_TABLE.iter().map(|(layer, _, gds)| (*gds, *layer)));
    static ref IHP_TO_NAME: HashMap<IhpLayer, &'static str> =
        HashMap::from_iter(LAYER_TABLE.iter().map(|(layer, name, _)| (*layer, *name)));
    static ref NAME_TO_IHP: HashMap<UniCase<String>, IhpLayer> = HashMap::from_iter(
        LAYER_TABLE
            .iter()
            .map(|(layer, name, _)| (UniCase::new(name.to_string()), *layer))
    );
}

impl IhpLayer {
    /// The GDS `(layer, datatype)` pair of this layer.
    pub fn gds_layer(&self) -> GdsLayer {
        IHP_TO_GDS_LAYER[self]
    }

    /// The symbolic name of this layer, e.g. `"TopMetal2drawing"`.
    pub fn name(&self) -> &'static str {
        IHP_TO_NAME[self]
    }

    /// Looks up the layer drawn on the given GDS pair.
    pub fn from_gds(layer: GdsLayer) -> Option<Self> {
        GDS_LAYER_TO_IHP.get(&layer).copied()
    }

    /// Iterates over every known layer.
    pub fn all() -> impl Iterator<Item = IhpLayer> {
        LAYER_TABLE.iter().map(|(layer, _, _)| *layer)
    }

    /// The anti-fill layers that keep automated metal fill out of a region.
    pub const NOFILL: [IhpLayer; 9] = [
        IhpLayer::ActivNofill,
        IhpLayer::GatPolyNofill,
        IhpLayer::Metal1Nofill,
        IhpLayer::Metal2Nofill,
        IhpLayer::Metal3Nofill,
        IhpLayer::Metal4Nofill,
        IhpLayer::Metal5Nofill,
        IhpLayer::TopMetal1Nofill,
        IhpLayer::TopMetal2Nofill,
    ];
}

impl FromStr for IhpLayer {
    type Err = Error;

    /// Resolves a symbolic layer name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAME_TO_IHP
            .get(&UniCase::new(s.to_string()))
            .copied()
            .ok_or_else(|| Error::UnknownLayer(s.to_string()))
    }
}

impl Display for IhpLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for IhpLayer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for IhpLayer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_layer_round_trips_through_gds() {
        assert_eq!(IhpLayer::all().count(), LAYER_TABLE.len());
        for layer in IhpLayer::all() {
            assert_eq!(IhpLayer::from_gds(layer.gds_layer()), Some(layer));
            assert_eq!(layer.name().parse::<IhpLayer>().unwrap(), layer);
        }
    }

    #[test]
    fn layer_names_are_case_insensitive() {
        assert_eq!(
            "topmetal2DRAWING".parse::<IhpLayer>().unwrap(),
            IhpLayer::TopMetal2Drawing
        );
        assert_eq!(IhpLayer::TopMetal2Drawing.gds_layer(), GdsLayer(134, 0));
        assert_eq!(IhpLayer::PWellBlock.gds_layer(), GdsLayer(46, 21));
    }

    #[test]
    fn unknown_layer_is_rejected() {
        let err = "Metal9drawing".parse::<IhpLayer>().unwrap_err();
        assert!(matches!(err, Error::UnknownLayer(ref name) if name == "Metal9drawing"));
        assert_eq!(IhpLayer::from_gds(GdsLayer(999, 0)), None);
    }
}
