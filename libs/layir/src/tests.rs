use std::sync::Arc;

use geometry::prelude::*;
use test_log::test;

use crate::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
enum Layer {
    Metal,
    Via,
}

fn unit_cell() -> Arc<Cell<Layer>> {
    let mut b = Cell::builder("unit");
    b.add_shape(Layer::Metal, Rect::from_center_size(Point::zero(), 2., 2.));
    b.add_shape(Layer::Via, Rect::from_center_size(Point::zero(), 1., 1.));
    b.add_port(Port::new("a", Point::zero(), 2., 90., Layer::Metal))
        .unwrap();
    Arc::new(b.build())
}

#[test]
fn duplicate_port_is_rejected() {
    let mut b = CellBuilder::new("dup");
    b.add_port(Port::new("p", Point::zero(), 1., 0., Layer::Metal))
        .unwrap();
    let err = b
        .add_port(Port::new("p", Point::new(1., 0.), 1., 0., Layer::Metal))
        .unwrap_err();
    assert_eq!(err, Error::DuplicatePort("p".into()));
    assert_eq!(b.build().ports().count(), 1);
}

#[test]
fn duplicate_instance_is_rejected() {
    let unit = unit_cell();
    let mut b = CellBuilder::new("top");
    b.add_instance(Instance::new(unit.clone(), "x")).unwrap();
    assert_eq!(
        b.add_instance(Instance::new(unit, "x")),
        Err(Error::DuplicateInstance("x".into()))
    );
}

#[test]
fn port_orientation_is_normalized() {
    let port = Port::new("p", Point::zero(), 1., -90., Layer::Metal);
    assert_eq!(port.orientation(), 270.);
    assert_eq!(port.port_type(), PortType::Electrical);
    let port = Port::new("p", Point::zero(), 1., 720., Layer::Metal);
    assert_eq!(port.orientation(), 0.);
}

#[test]
fn flatten_applies_instance_translations() {
    let unit = unit_cell();
    let mut mid = CellBuilder::new("mid");
    mid.add_instance(Instance::with_transformation(
        unit.clone(),
        "u0",
        Transformation::translate(10., 0.),
    ))
    .unwrap();
    let mid = Arc::new(mid.build());

    let mut top = CellBuilder::new("top");
    top.add_shape(Layer::Metal, Rect::from_sides(0., 0., 1., 1.));
    top.add_instance(Instance::with_transformation(
        mid,
        "m0",
        Transformation::translate(0., 5.),
    ))
    .unwrap();
    let top = top.build();

    let flat = top.flatten();
    assert_eq!(flat.len(), 3);
    assert_eq!(
        flat[1].shape().rect(),
        Some(Rect::from_sides(9., 4., 11., 6.))
    );
    assert_eq!(top.bbox(), Some(Rect::from_sides(0., 0., 11., 6.)));
}

#[test]
fn instance_ports_are_translated() {
    let inst = Instance::with_transformation(unit_cell(), "u", Point::new(3., -1.));
    let port = inst.try_port("a").unwrap();
    assert_eq!(port.center(), Point::new(3., -1.));
    assert_eq!(port.orientation(), 90.);
    assert!(inst.try_port("b").is_none());
}

#[test]
fn map_layer_preserves_sharing() {
    let unit = unit_cell();
    let mut b = CellBuilder::new("row");
    for i in 0..3 {
        b.add_instance(Instance::with_transformation(
            unit.clone(),
            format!("u{i}"),
            Transformation::translate(5. * i as f64, 0.),
        ))
        .unwrap();
    }
    b.set_info("n", 3usize);
    let row = b.build();

    let mapped = row.map_layer(|l| match l {
        Layer::Metal => (1u16, 0u16),
        Layer::Via => (2, 0),
    });
    let children: Vec<_> = mapped.instances().map(|i| i.child().clone()).collect();
    assert_eq!(children.len(), 3);
    assert!(Arc::ptr_eq(&children[0], &children[1]));
    assert!(Arc::ptr_eq(&children[1], &children[2]));
    assert_eq!(children[0].port("a").layer(), &(1, 0));
    assert_eq!(mapped.info_value("n"), Some(&InfoValue::Int(3)));
    assert_eq!(mapped.bbox(), row.bbox());
}

#[test]
fn shapes_on_filters_by_layer() {
    let unit = unit_cell();
    assert_eq!(unit.shapes_on(&Layer::Via).count(), 1);
    assert_eq!(unit.shapes().count(), 2);
}

#[test]
fn info_values_convert() {
    let mut b = CellBuilder::<Layer>::new("info");
    b.set_info("f", 0.5);
    b.set_info("s", "octagon");
    b.set_info("b", true);
    b.set_info("f", 1.5);
    let cell = b.build();
    assert_eq!(cell.info().count(), 3);
    assert_eq!(cell.info_value("f").and_then(InfoValue::as_f64), Some(1.5));
    assert_eq!(
        cell.info_value("s").and_then(InfoValue::as_str),
        Some("octagon")
    );
    assert_eq!(cell.info_value("b").and_then(InfoValue::as_bool), Some(true));
    assert!(cell.try_instance_named("missing").is_none());
}
