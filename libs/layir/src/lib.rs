//! A layout intermediate representation, generic over the layer type.
//!
//! Cells are assembled with a [`CellBuilder`] and are immutable once built.
//! Sub-cells are shared by reference counting, so instancing a cell many times
//! never copies its geometry.

pub mod error;

use std::collections::HashMap;
use std::sync::Arc;

use arcstr::ArcStr;
use geometry::bbox::union_option;
use geometry::prelude::{Bbox, Point, Rect, Transform, TransformMut, Transformation, TranslateMut};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use crate::error::{Error, Result};

/// A fully assembled layout cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell<L> {
    name: ArcStr,
    shapes: Vec<Shape<L>>,
    instances: IndexMap<ArcStr, Instance<L>>,
    ports: IndexMap<ArcStr, Port<L>>,
    info: IndexMap<ArcStr, InfoValue>,
}

/// Incrementally assembles a [`Cell`].
#[derive(Debug, Clone)]
pub struct CellBuilder<L> {
    name: ArcStr,
    shapes: Vec<Shape<L>>,
    instances: IndexMap<ArcStr, Instance<L>>,
    ports: IndexMap<ArcStr, Port<L>>,
    info: IndexMap<ArcStr, InfoValue>,
}

/// A primitive layout shape consisting of a layer and a geometric shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape<L> {
    layer: L,
    shape: geometry::shape::Shape,
}

/// Port kinds.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortType {
    /// An electrical terminal.
    #[default]
    Electrical,
}

/// A named, oriented location at which a cell should be connected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port<L> {
    name: ArcStr,
    center: Point,
    width: f64,
    orientation: f64,
    layer: L,
    port_type: PortType,
}

/// A placement of a shared, previously built cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance<L> {
    child: Arc<Cell<L>>,
    name: ArcStr,
    trans: Transformation,
}

/// A metadata value attached to a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InfoValue {
    /// A boolean flag.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(ArcStr),
}

impl<L> Cell<L> {
    /// Starts building a cell with the given name.
    #[inline]
    pub fn builder(name: impl Into<ArcStr>) -> CellBuilder<L> {
        CellBuilder::new(name)
    }

    /// The name of the cell.
    #[inline]
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// Iterates over the shapes drawn directly in this cell.
    #[inline]
    pub fn shapes(&self) -> impl Iterator<Item = &Shape<L>> {
        self.shapes.iter()
    }

    /// Iterates over the shapes drawn directly in this cell on `layer`.
    pub fn shapes_on<'a>(&'a self, layer: &'a L) -> impl Iterator<Item = &'a Shape<L>> + 'a
    where
        L: PartialEq,
    {
        self.shapes.iter().filter(move |s| s.layer() == layer)
    }

    /// Iterates over the instances of this cell, in insertion order.
    #[inline]
    pub fn instances(&self) -> impl Iterator<Item = &Instance<L>> {
        self.instances.values()
    }

    /// Gets the instance with the given name.
    ///
    /// # Panics
    ///
    /// Panics if no instance has the given name.
    pub fn instance_named(&self, name: &str) -> &Instance<L> {
        match self.instances.get(name) {
            Some(inst) => inst,
            None => {
                tracing::error!("no instance named `{}` in cell `{}`", name, self.name);
                panic!("no instance named `{}` in cell `{}`", name, self.name);
            }
        }
    }

    /// Gets the instance with the given name.
    #[inline]
    pub fn try_instance_named(&self, name: &str) -> Option<&Instance<L>> {
        self.instances.get(name)
    }

    /// Iterates over the ports of this cell, in insertion order.
    #[inline]
    pub fn ports(&self) -> impl Iterator<Item = &Port<L>> {
        self.ports.values()
    }

    /// Get a port of this cell by name.
    ///
    /// # Panics
    ///
    /// Panics if the provided port does not exist.
    #[inline]
    pub fn port(&self, name: &str) -> &Port<L> {
        self.try_port(name).unwrap()
    }

    /// Get a port of this cell by name.
    #[inline]
    pub fn try_port(&self, name: &str) -> Option<&Port<L>> {
        self.ports.get(name)
    }

    /// Iterates over the `(key, value)` metadata pairs of this cell.
    #[inline]
    pub fn info(&self) -> impl Iterator<Item = (&ArcStr, &InfoValue)> {
        self.info.iter()
    }

    /// Gets a metadata value by key.
    #[inline]
    pub fn info_value(&self, key: &str) -> Option<&InfoValue> {
        self.info.get(key)
    }

    /// All shapes of this cell and its instances, recursively,
    /// expressed in this cell's coordinate system.
    pub fn flatten(&self) -> Vec<Shape<L>>
    where
        L: Clone,
    {
        let mut out = Vec::new();
        self.flatten_into(Transformation::identity(), &mut out);
        out
    }

    fn flatten_into(&self, trans: Transformation, out: &mut Vec<Shape<L>>)
    where
        L: Clone,
    {
        out.extend(self.shapes.iter().map(|s| s.clone().transform(trans)));
        for inst in self.instances.values() {
            inst.child
                .flatten_into(Transformation::cascade(trans, inst.trans), out);
        }
    }

    /// Converts every layer in the cell hierarchy using `f`.
    ///
    /// Sub-cells that are shared in `self` remain shared in the result.
    pub fn map_layer<L2>(&self, mut f: impl FnMut(&L) -> L2) -> Cell<L2> {
        let mut memo = HashMap::new();
        self.map_layer_inner(&mut f, &mut memo)
    }

    fn map_layer_inner<L2, F: FnMut(&L) -> L2>(
        &self,
        f: &mut F,
        memo: &mut HashMap<*const Cell<L>, Arc<Cell<L2>>>,
    ) -> Cell<L2> {
        let shapes = self.shapes.iter().map(|s| s.map_layer(&mut *f)).collect();
        let mut instances = IndexMap::with_capacity(self.instances.len());
        for (name, inst) in self.instances.iter() {
            let key = Arc::as_ptr(&inst.child);
            let child = match memo.get(&key) {
                Some(child) => child.clone(),
                None => {
                    let child = Arc::new(inst.child.map_layer_inner(f, memo));
                    memo.insert(key, child.clone());
                    child
                }
            };
            instances.insert(
                name.clone(),
                Instance {
                    child,
                    name: inst.name.clone(),
                    trans: inst.trans,
                },
            );
        }
        let ports = self
            .ports
            .iter()
            .map(|(name, port)| (name.clone(), port.map_layer(&mut *f)))
            .collect();

        Cell {
            name: self.name.clone(),
            shapes,
            instances,
            ports,
            info: self.info.clone(),
        }
    }
}

impl<L> Bbox for Cell<L> {
    fn bbox(&self) -> Option<Rect> {
        let shapes = self.shapes.iter().map(|s| s.bbox()).fold(None, union_option);
        self.instances
            .values()
            .map(|inst| inst.bbox())
            .fold(shapes, union_option)
    }
}

impl<L> CellBuilder<L> {
    /// Creates an empty builder for a cell named `name`.
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            shapes: Vec::new(),
            instances: IndexMap::new(),
            ports: IndexMap::new(),
            info: IndexMap::new(),
        }
    }

    /// The name of the cell being built.
    #[inline]
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// Draws `shape` on `layer`.
    pub fn add_shape(&mut self, layer: L, shape: impl Into<geometry::shape::Shape>) {
        self.shapes.push(Shape::new(layer, shape));
    }

    /// Draws the same shape on each of the given layers.
    pub fn add_shape_on_layers(
        &mut self,
        layers: impl IntoIterator<Item = L>,
        shape: impl Into<geometry::shape::Shape>,
    ) {
        let shape = shape.into();
        for layer in layers {
            self.shapes.push(Shape::new(layer, shape.clone()));
        }
    }

    /// Adds the given instance to the cell.
    ///
    /// Fails if an instance with the same name already exists.
    pub fn add_instance(&mut self, instance: Instance<L>) -> Result<()> {
        if self.instances.contains_key(&instance.name) {
            return Err(Error::DuplicateInstance(instance.name));
        }
        self.instances.insert(instance.name.clone(), instance);
        Ok(())
    }

    /// Adds the given port to the cell.
    ///
    /// Fails if a port with the same name already exists.
    pub fn add_port(&mut self, port: Port<L>) -> Result<()> {
        if self.ports.contains_key(&port.name) {
            return Err(Error::DuplicatePort(port.name));
        }
        self.ports.insert(port.name.clone(), port);
        Ok(())
    }

    /// Sets a metadata value, replacing any previous value for `key`.
    pub fn set_info(&mut self, key: impl Into<ArcStr>, value: impl Into<InfoValue>) {
        self.info.insert(key.into(), value.into());
    }

    /// Finishes the cell.
    pub fn build(self) -> Cell<L> {
        tracing::trace!(
            cell = %self.name,
            shapes = self.shapes.len(),
            instances = self.instances.len(),
            ports = self.ports.len(),
            "built cell"
        );
        Cell {
            name: self.name,
            shapes: self.shapes,
            instances: self.instances,
            ports: self.ports,
            info: self.info,
        }
    }
}

impl<L> Shape<L> {
    /// Creates a shape on `layer`.
    #[inline]
    pub fn new(layer: L, shape: impl Into<geometry::shape::Shape>) -> Self {
        Self {
            layer,
            shape: shape.into(),
        }
    }

    /// The layer this shape is drawn on.
    #[inline]
    pub fn layer(&self) -> &L {
        &self.layer
    }

    /// The geometry of this shape.
    #[inline]
    pub fn shape(&self) -> &geometry::shape::Shape {
        &self.shape
    }

    /// Returns the same geometry on the layer given by `f`.
    pub fn map_layer<L2>(&self, f: impl FnOnce(&L) -> L2) -> Shape<L2> {
        Shape {
            layer: f(&self.layer),
            shape: self.shape.clone(),
        }
    }
}

impl<L> Bbox for Shape<L> {
    fn bbox(&self) -> Option<Rect> {
        self.shape.bbox()
    }
}

impl<L> TranslateMut for Shape<L> {
    fn translate_mut(&mut self, p: Point) {
        self.shape.translate_mut(p);
    }
}

impl<L> TransformMut for Shape<L> {
    fn transform_mut(&mut self, trans: Transformation) {
        self.shape.transform_mut(trans);
    }
}

impl<L> Port<L> {
    /// Creates an electrical port.
    ///
    /// The orientation is given in degrees counterclockwise from +x
    /// and is normalized to `[0, 360)`.
    pub fn new(
        name: impl Into<ArcStr>,
        center: Point,
        width: f64,
        orientation: f64,
        layer: L,
    ) -> Self {
        Self {
            name: name.into(),
            center,
            width,
            orientation: geometry::wrap_angle(orientation),
            layer,
            port_type: PortType::Electrical,
        }
    }

    /// The port name.
    #[inline]
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// The port center.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// The port width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The orientation in degrees, in `[0, 360)`.
    #[inline]
    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    /// The layer of the port.
    #[inline]
    pub fn layer(&self) -> &L {
        &self.layer
    }

    /// The port kind.
    #[inline]
    pub fn port_type(&self) -> PortType {
        self.port_type
    }

    /// Returns a copy of this port under a different name.
    pub fn with_name(&self, name: impl Into<ArcStr>) -> Self
    where
        L: Clone,
    {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Returns the same port on the layer given by `f`.
    pub fn map_layer<L2>(&self, f: impl FnOnce(&L) -> L2) -> Port<L2> {
        Port {
            name: self.name.clone(),
            center: self.center,
            width: self.width,
            orientation: self.orientation,
            layer: f(&self.layer),
            port_type: self.port_type,
        }
    }
}

impl<L> TranslateMut for Port<L> {
    fn translate_mut(&mut self, p: Point) {
        self.center.translate_mut(p);
    }
}

impl<L> TransformMut for Port<L> {
    fn transform_mut(&mut self, trans: Transformation) {
        self.center.transform_mut(trans);
    }
}

impl<L> Instance<L> {
    /// Places `child` at the origin.
    pub fn new(child: Arc<Cell<L>>, name: impl Into<ArcStr>) -> Self {
        Self {
            child,
            name: name.into(),
            trans: Transformation::identity(),
        }
    }

    /// Places `child` with the given transformation.
    pub fn with_transformation(
        child: Arc<Cell<L>>,
        name: impl Into<ArcStr>,
        transformation: impl Into<Transformation>,
    ) -> Self {
        Self {
            child,
            name: name.into(),
            trans: transformation.into(),
        }
    }

    /// The instanced cell.
    #[inline]
    pub fn child(&self) -> &Arc<Cell<L>> {
        &self.child
    }

    /// The instance name.
    #[inline]
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// The placement of the instance.
    #[inline]
    pub fn transformation(&self) -> Transformation {
        self.trans
    }

    /// Gets a port of the instanced cell, in the parent's coordinates.
    pub fn try_port(&self, name: &str) -> Option<Port<L>>
    where
        L: Clone,
    {
        self.child
            .try_port(name)
            .map(|port| port.clone().transform(self.trans))
    }
}

impl<L> Bbox for Instance<L> {
    fn bbox(&self) -> Option<Rect> {
        self.child.bbox().transform(self.trans)
    }
}

impl InfoValue {
    /// The value as a float, if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// The value as an integer, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// The value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<bool> for InfoValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for InfoValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for InfoValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<usize> for InfoValue {
    fn from(value: usize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<f64> for InfoValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<ArcStr> for InfoValue {
    fn from(value: ArcStr) -> Self {
        Self::String(value)
    }
}

impl From<&str> for InfoValue {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for InfoValue {
    fn from(value: String) -> Self {
        Self::String(value.into())
    }
}

#[cfg(test)]
mod tests;
