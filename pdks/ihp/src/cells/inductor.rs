//! Planar octagonal spiral inductors.

use arcstr::ArcStr;
use geometry::prelude::{Grid, Path, Point, Polygon, Rect};
use geometry::snap::snap_to_grid;
use layir::{CellBuilder, Port};
use serde::{Deserialize, Serialize};

use crate::context::{Context, Generator};
use crate::error::Result;
use crate::layers::IhpLayer;
use crate::IhpCell;

/// Grid on which inductor dimensions are quantized.
pub const INDUCTOR_GRID: f64 = 0.01;

/// Half the angle between adjacent octagon vertices, in degrees.
const HALF_STEP_DEG: f64 = 22.5;

/// Parameters of an octagonal spiral inductor.
///
/// `resistance`, `inductance` and `turns` are recorded as cell metadata
/// and do not influence the drawn geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inductor {
    /// The trace width in micrometers.
    pub width: f64,
    /// The trace spacing in micrometers.
    pub space: f64,
    /// The inner diameter in micrometers.
    pub diameter: f64,
    /// The resistance in ohms.
    pub resistance: f64,
    /// The inductance in henries.
    pub inductance: f64,
    /// The number of turns.
    pub turns: u32,
    /// Whether to exclude the inductor from RC extraction.
    pub block_qrc: bool,
    /// Whether substrate etching is requested.
    pub substrate_etch: bool,
    /// The device model name, also used as the cell name.
    pub model: ArcStr,
}

impl Default for Inductor {
    fn default() -> Self {
        Self::inductor2()
    }
}

impl Inductor {
    /// The `inductor2` device.
    pub fn inductor2() -> Self {
        Self {
            width: 2.0,
            space: 2.1,
            diameter: 25.35,
            resistance: 0.5777,
            inductance: 33.303e-12,
            turns: 1,
            block_qrc: true,
            substrate_etch: false,
            model: arcstr::literal!("inductor2"),
        }
    }

    /// The `inductor3` device.
    ///
    /// Shares the `inductor2` model and geometry, with two turns.
    pub fn inductor3() -> Self {
        Self {
            diameter: 24.68,
            resistance: 1.386,
            inductance: 221.5e-12,
            turns: 2,
            ..Self::inductor2()
        }
    }

    /// The grid-quantized coil dimensions.
    pub fn geometry(&self) -> CoilGeometry {
        let grid = Grid::new(INDUCTOR_GRID);
        CoilGeometry::new(
            grid.snap2x(self.width),
            grid.snap(self.space),
            grid.snap2x(self.diameter),
        )
    }
}

/// The smallest inner diameter that fits `turns` windings of the given
/// width and spacing, snapped to `grid`.
pub fn inductor_min_diameter(width: f64, space: f64, turns: u32, grid: f64) -> f64 {
    snap_to_grid(2. * turns as f64 * (width + space) + 4. * width, grid)
}

/// Derived dimensions of a single octagonal coil.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoilGeometry {
    /// Quantized trace width.
    pub width: f64,
    /// Quantized trace spacing.
    pub space: f64,
    /// Quantized inner diameter.
    pub diameter: f64,
    /// Circumradius of the coil centerline.
    pub radius: f64,
    /// Center of the coil octagon.
    pub center: Point,
    /// Length of the feed stubs.
    pub length: f64,
}

impl CoilGeometry {
    fn new(width: f64, space: f64, diameter: f64) -> Self {
        let radius = diameter / 2. + space;
        Self {
            width,
            space,
            diameter,
            radius,
            center: Point::new(0., 3. * radius),
            length: 2. * radius + space,
        }
    }

    /// The coil centerline.
    ///
    /// Starts just right of the y axis, runs counterclockwise around the
    /// octagon starting from the vertex at -67.5°, and ends just left of
    /// the y axis, leaving a gap of `space` for the feed.
    pub fn coil_path(&self) -> Path {
        let y_feed = self.center.y - self.radius * HALF_STEP_DEG.to_radians().cos();
        let mut points = Vec::with_capacity(10);
        points.push(Point::new(self.space / 2., y_feed));
        points.extend((-2..6).map(|i| octagon_vertex(self.center, self.radius, i)));
        points.push(Point::new(-self.space / 2., y_feed));
        Path::new(points)
    }

    /// The outer boundary shared by the marker and blocking layers.
    pub fn outer_boundary(&self) -> Polygon {
        let r_outer =
            (self.diameter / 2. + self.length) / HALF_STEP_DEG.to_radians().cos();
        Polygon::from_verts(
            (0..8)
                .map(|i| octagon_vertex(self.center, r_outer, i))
                .collect(),
        )
    }

    /// The feed stubs running from `y = 0` up to the coil, left then right.
    ///
    /// Negative spacings or lengths give mirrored, degenerate rectangles.
    pub fn stubs(&self) -> [Rect; 2] {
        let s = self.space;
        [
            Rect::new(Point::new(-1.5 * s, 0.), Point::new(-0.5 * s, self.length)),
            Rect::new(Point::new(0.5 * s, 0.), Point::new(1.5 * s, self.length)),
        ]
    }

    /// The pin markers at the bottom of the stubs, right then left.
    pub fn pins(&self) -> [Rect; 2] {
        let s = self.space;
        [
            Rect::new(Point::new(0.5 * s, 0.), Point::new(1.5 * s, s)),
            Rect::new(Point::new(-1.5 * s, 0.), Point::new(-0.5 * s, s)),
        ]
    }
}

/// Vertex `i` of an octagon with the given circumradius, at angle `i·45° + 22.5°`.
fn octagon_vertex(center: Point, radius: f64, i: i32) -> Point {
    let angle = (i as f64 * 2. * HALF_STEP_DEG + HALF_STEP_DEG).to_radians();
    Point::polar(center, radius, angle)
}

impl Generator for Inductor {
    fn name(&self) -> ArcStr {
        self.model.clone()
    }

    fn generate(&self, _ctx: &Context) -> Result<IhpCell> {
        let g = self.geometry();
        tracing::debug!(
            model = %self.model,
            width = g.width,
            space = g.space,
            diameter = g.diameter,
            "generating inductor"
        );
        if self.substrate_etch {
            tracing::warn!(model = %self.model, "substrate etch is not drawn");
        }
        if g.width <= 0. || g.space <= 0. || g.diameter <= 0. {
            tracing::warn!(
                width = g.width,
                space = g.space,
                diameter = g.diameter,
                "inductor dimensions are not positive"
            );
        }

        let mut b = CellBuilder::new(self.name());
        b.add_shape(IhpLayer::TopMetal2Drawing, g.coil_path().extrude(g.width));

        let [left, right] = g.stubs();
        b.add_shape(IhpLayer::TopMetal2Drawing, left);
        b.add_port(Port::new(
            "P1",
            Point::new(-g.space, g.space),
            g.space,
            270.,
            IhpLayer::TopMetal2Drawing,
        ))?;
        b.add_shape(IhpLayer::TopMetal2Drawing, right);
        b.add_port(Port::new(
            "P2",
            Point::new(g.space, g.space),
            g.space,
            270.,
            IhpLayer::TopMetal2Drawing,
        ))?;

        let boundary = g.outer_boundary();
        b.add_shape(IhpLayer::IndDrawing, boundary.clone());
        b.add_shape_on_layers(IhpLayer::NOFILL, boundary.clone());
        if self.block_qrc {
            b.add_shape(IhpLayer::NoRcxDrawing, boundary.clone());
        }
        b.add_shape(IhpLayer::PWellBlock, boundary);

        for pin in g.pins() {
            b.add_shape(IhpLayer::TopMetal2Pin, pin);
        }

        b.set_info("resistance", self.resistance);
        b.set_info("inductance", self.inductance);
        b.set_info("model", self.model.clone());
        b.set_info("turns", self.turns);
        b.set_info("width", self.width);
        b.set_info("space", self.space);
        b.set_info("diameter", self.diameter);
        Ok(b.build())
    }
}
