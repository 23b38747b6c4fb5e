//! Layout export for IHP cells.

use layir::Cell;

use crate::layers::{GdsLayer, IhpLayer};

/// Converts an IHP cell hierarchy to one drawn on GDS `(layer, datatype)` pairs.
///
/// Shared sub-cells remain shared.
pub fn to_gds(cell: &Cell<IhpLayer>) -> Cell<GdsLayer> {
    cell.map_layer(IhpLayer::gds_layer)
}
