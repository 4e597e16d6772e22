//! Constructible objects for Figura programs.
//!
//! Programs build objects by calling a class name like a function:
//! `var s = Square(Point(0, 0), 4);`. The interpreter looks the name up in
//! [`CONSTRUCTORS`] and talks to the result only through
//! [`fig_value::NativeObject`].
//!
//! Rendering goes through a [`Canvas`] shared by every object built in the
//! same run.

mod canvas;
mod figure;
mod numeric;
mod point;
mod scene;

pub use canvas::{Canvas, Outline, Primitive, RecordingCanvas, SharedCanvas, Style};
pub use figure::{Figure, FigureKind};
pub use point::Point;
pub use scene::Scene;

use fig_value::{check_arity, List, NativeError, NativeResult, Value};
use std::rc::Rc;

/// A native class constructor.
pub struct Constructor {
    pub name: &'static str,
    pub arity: usize,
    build: fn(&[Value], &SharedCanvas) -> Option<Value>,
}

impl Constructor {
    /// Check arity and argument types, then build the object.
    pub fn construct(&self, args: &[Value], canvas: &SharedCanvas) -> NativeResult<Value> {
        check_arity(self.name, args, self.arity)?;
        let value = (self.build)(args, canvas)
            .ok_or_else(|| NativeError::invalid_constructor_arguments(self.name))?;
        tracing::trace!(class = self.name, "constructed");
        Ok(value)
    }
}

/// Every constructible class.
pub const CONSTRUCTORS: &[Constructor] = &[
    Constructor {
        name: "Point",
        arity: 2,
        build: build_point,
    },
    Constructor {
        name: "Square",
        arity: 2,
        build: build_square,
    },
    Constructor {
        name: "Rectangle",
        arity: 3,
        build: build_rectangle,
    },
    Constructor {
        name: "Circle",
        arity: 2,
        build: build_circle,
    },
    Constructor {
        name: "Triangle",
        arity: 3,
        build: build_triangle,
    },
    Constructor {
        name: "Rhomb",
        arity: 3,
        build: build_rhomb,
    },
    Constructor {
        name: "Parallelogram",
        arity: 4,
        build: build_parallelogram,
    },
    Constructor {
        name: "Trapeze",
        arity: 4,
        build: build_trapeze,
    },
    Constructor {
        name: "Scene",
        arity: 1,
        build: build_scene,
    },
];

pub fn constructor(name: &str) -> Option<&'static Constructor> {
    CONSTRUCTORS.iter().find(|c| c.name == name)
}

fn is_point(value: &Value) -> bool {
    value.downcast_object::<Point>().is_some()
}

fn is_number(value: &Value) -> bool {
    value.as_number().is_some()
}

fn is_int(value: &Value) -> bool {
    matches!(value, Value::Int(_))
}

/// Build a figure once every argument passed its type check. The first
/// argument is always the anchor point.
fn figure(
    kind: FigureKind,
    args: &[Value],
    checks: &[fn(&Value) -> bool],
    names: &[&'static str],
    canvas: &SharedCanvas,
) -> Option<Value> {
    if !args.iter().zip(checks).all(|(arg, check)| check(arg)) {
        return None;
    }
    let properties = names.iter().copied().zip(args[1..].iter().cloned());
    let figure = Figure::new(kind, args[0].clone(), properties, Rc::clone(canvas));
    Some(Value::Object(Rc::new(figure)))
}

fn build_point(args: &[Value], _: &SharedCanvas) -> Option<Value> {
    let point = Point::new(args[0].as_number()?, args[1].as_number()?);
    Some(Value::Object(Rc::new(point)))
}

fn build_square(args: &[Value], canvas: &SharedCanvas) -> Option<Value> {
    figure(FigureKind::Square, args, &[is_point, is_int], &["side"], canvas)
}

fn build_rectangle(args: &[Value], canvas: &SharedCanvas) -> Option<Value> {
    figure(
        FigureKind::Rectangle,
        args,
        &[is_point, is_number, is_number],
        &["width", "height"],
        canvas,
    )
}

fn build_circle(args: &[Value], canvas: &SharedCanvas) -> Option<Value> {
    figure(FigureKind::Circle, args, &[is_point, is_number], &["radius"], canvas)
}

fn build_triangle(args: &[Value], canvas: &SharedCanvas) -> Option<Value> {
    figure(
        FigureKind::Triangle,
        args,
        &[is_point, is_point, is_point],
        &["point2", "point3"],
        canvas,
    )
}

fn build_rhomb(args: &[Value], canvas: &SharedCanvas) -> Option<Value> {
    figure(
        FigureKind::Rhomb,
        args,
        &[is_point, is_number, is_int],
        &["side", "angle"],
        canvas,
    )
}

fn build_parallelogram(args: &[Value], canvas: &SharedCanvas) -> Option<Value> {
    figure(
        FigureKind::Parallelogram,
        args,
        &[is_point, is_number, is_number, is_int],
        &["base", "height", "angle"],
        canvas,
    )
}

fn build_trapeze(args: &[Value], canvas: &SharedCanvas) -> Option<Value> {
    figure(
        FigureKind::Trapeze,
        args,
        &[is_point, is_number, is_number, is_number],
        &["base1", "base2", "height"],
        canvas,
    )
}

fn build_scene(args: &[Value], canvas: &SharedCanvas) -> Option<Value> {
    let figures: &List = args[0].as_list()?;
    let all_figures = figures
        .values()
        .iter()
        .all(|value| value.downcast_object::<Figure>().is_some());
    all_figures.then(|| Value::Object(Rc::new(Scene::new(figures.clone(), Rc::clone(canvas)))))
}
