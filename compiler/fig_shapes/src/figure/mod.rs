//! The seven figure classes.
//!
//! All figures share one representation: a kind tag plus a table of named
//! attribute cells. The kind decides which extra attributes exist, which
//! extra methods are exposed, and how measures and outlines are computed.
//! Attribute cells are plain [`Symbol`]s, so `fig.side = 3;` and
//! `fig.set_side(3);` write the same cell; only the setter validates.

mod geometry;

use crate::canvas::{Primitive, SharedCanvas, Style};
use crate::numeric::{add, sub};
use crate::point::Point;
use fig_value::{check_arity, NativeError, NativeObject, NativeResult, Number, Symbol, Value};
use rustc_hash::FxHashMap;
use std::any::Any;
use std::rc::Rc;

const BASE_METHODS: &[&str] = &[
    "get_color",
    "get_border_color",
    "get_border_width",
    "get_border_style",
    "get_fill",
    "get_opacity",
    "set_color",
    "set_border_color",
    "set_border_width",
    "set_border_style",
    "set_fill",
    "set_opacity",
    "area",
    "perimeter",
    "move_to",
    "render",
];

/// Accepted values of `border_style`, long and short spellings.
const BORDER_STYLES: &[&str] = &["-", "solid", "--", "dashed", "-.", "dashdot", ":", "dotted"];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FigureKind {
    Square,
    Rectangle,
    Circle,
    Triangle,
    Rhomb,
    Parallelogram,
    Trapeze,
}

impl FigureKind {
    pub fn class_name(self) -> &'static str {
        match self {
            FigureKind::Square => "Square",
            FigureKind::Rectangle => "Rectangle",
            FigureKind::Circle => "Circle",
            FigureKind::Triangle => "Triangle",
            FigureKind::Rhomb => "Rhomb",
            FigureKind::Parallelogram => "Parallelogram",
            FigureKind::Trapeze => "Trapeze",
        }
    }

    /// Methods beyond [`BASE_METHODS`].
    fn methods(self) -> &'static [&'static str] {
        match self {
            FigureKind::Square => &["get_side", "set_side", "diagonal"],
            FigureKind::Rectangle => &[
                "get_width",
                "get_height",
                "set_width",
                "set_height",
                "diagonal",
            ],
            FigureKind::Circle => &["get_radius", "set_radius", "diameter"],
            FigureKind::Triangle => &[
                "get_point1",
                "get_point2",
                "get_point3",
                "set_point1",
                "set_point2",
                "set_point3",
                "sides",
                "heights",
            ],
            FigureKind::Rhomb => &["get_side", "get_angle", "set_side", "set_angle", "diagonals"],
            FigureKind::Parallelogram => &[
                "get_base",
                "get_height",
                "get_angle",
                "set_base",
                "set_height",
                "set_angle",
                "sides",
                "diagonals",
            ],
            FigureKind::Trapeze => &[
                "get_base1",
                "get_base2",
                "get_height",
                "set_base1",
                "set_base2",
                "set_height",
            ],
        }
    }
}

pub struct Figure {
    kind: FigureKind,
    attributes: FxHashMap<&'static str, Symbol>,
    canvas: SharedCanvas,
}

impl Figure {
    /// A figure at `position` with default style and the given
    /// kind-specific attributes. Argument types are checked by the
    /// constructors, not here.
    pub fn new(
        kind: FigureKind,
        position: Value,
        properties: impl IntoIterator<Item = (&'static str, Value)>,
        canvas: SharedCanvas,
    ) -> Self {
        let position = Symbol::new(position);
        let mut attributes = FxHashMap::default();
        if kind == FigureKind::Triangle {
            attributes.insert("point1", position.clone());
        }
        attributes.insert("position", position);
        attributes.insert("color", Symbol::new(Value::string("grey")));
        attributes.insert("border_color", Symbol::new(Value::string("black")));
        attributes.insert("border_width", Symbol::new(Value::Int(1)));
        attributes.insert("border_style", Symbol::new(Value::string("solid")));
        attributes.insert("fill", Symbol::new(Value::Bool(true)));
        attributes.insert("opacity", Symbol::new(Value::Int(1)));
        for (name, value) in properties {
            attributes.insert(name, Symbol::new(value));
        }
        Figure {
            kind,
            attributes,
            canvas,
        }
    }

    pub fn kind(&self) -> FigureKind {
        self.kind
    }

    /// The primitive this figure draws, styled from its current attributes.
    pub fn primitive(&self, method: &'static str) -> NativeResult<Primitive> {
        Ok(Primitive {
            class: self.kind.class_name(),
            outline: self.outline(method)?,
            style: self.style(method)?,
        })
    }

    fn lookup_method(&self, name: &str) -> Option<&'static str> {
        BASE_METHODS
            .iter()
            .chain(self.kind.methods())
            .find(|method| **method == name)
            .copied()
    }

    fn cell(&self, attr: &str, method: &'static str) -> NativeResult<&Symbol> {
        self.attributes
            .get(attr)
            .ok_or_else(|| NativeError::invalid_call_arguments(method))
    }

    fn number(&self, attr: &str, method: &'static str) -> NativeResult<Number> {
        self.cell(attr, method)?
            .with(Value::as_number)
            .ok_or_else(|| NativeError::invalid_call_arguments(method))
    }

    fn float(&self, attr: &str, method: &'static str) -> NativeResult<f64> {
        Ok(self.number(attr, method)?.as_f64())
    }

    fn point(&self, attr: &str, method: &'static str) -> NativeResult<(Number, Number)> {
        self.cell(attr, method)?.with(|value| {
            value
                .downcast_object::<Point>()
                .ok_or_else(|| NativeError::invalid_call_arguments(method))?
                .coordinates(method)
        })
    }

    fn point_f64(&self, attr: &str, method: &'static str) -> NativeResult<(f64, f64)> {
        let (x, y) = self.point(attr, method)?;
        Ok((x.as_f64(), y.as_f64()))
    }

    fn text(&self, attr: &str, method: &'static str) -> NativeResult<String> {
        self.cell(attr, method)?
            .with(|value| match value {
                Value::Str(text) => Some(text.clone()),
                Value::Int(_) | Value::Float(_) => Some(value.to_string()),
                _ => None,
            })
            .ok_or_else(|| NativeError::invalid_call_arguments(method))
    }

    fn style(&self, method: &'static str) -> NativeResult<Style> {
        Ok(Style {
            color: self.text("color", method)?,
            border_color: self.text("border_color", method)?,
            border_width: self.float("border_width", method)?,
            border_style: self.text("border_style", method)?,
            fill: self
                .cell("fill", method)?
                .with(Value::as_bool)
                .ok_or_else(|| NativeError::invalid_call_arguments(method))?,
            opacity: self.float("opacity", method)?,
        })
    }

    fn set(&self, method: &'static str, attr: &str, value: &Value) -> NativeResult<()> {
        let accepted = match attr {
            "color" | "border_color" => value.as_str().is_some() || value.as_number().is_some(),
            "border_width" => value.as_number().is_some(),
            "border_style" => value.as_str().is_some_and(|s| BORDER_STYLES.contains(&s)),
            "fill" => value.as_bool().is_some(),
            "opacity" => value
                .as_number()
                .is_some_and(|n| (0.0..=1.0).contains(&n.as_f64())),
            "point1" | "point2" | "point3" => value.downcast_object::<Point>().is_some(),
            "angle" => value
                .as_number()
                .is_some_and(|n| n.as_f64() > 0.0 && n.as_f64() < 180.0),
            _ => value.as_number().is_some_and(|n| n.as_f64() > 0.0),
        };
        if !accepted {
            return Err(NativeError::invalid_call_arguments(method));
        }
        self.cell(attr, method)?.set(value.clone());
        Ok(())
    }

    /// Move the figure's anchor to `target`. A triangle's other two
    /// vertices follow by the same offset.
    fn move_to(&self, target: &Value) -> NativeResult<()> {
        const METHOD: &str = "move_to";
        let point = target
            .downcast_object::<Point>()
            .ok_or_else(|| NativeError::invalid_call_arguments(METHOD))?;
        let (new_x, new_y) = point.coordinates(METHOD)?;
        if self.kind == FigureKind::Triangle {
            let (old_x, old_y) = self.point("position", METHOD)?;
            let (dx, dy) = (sub(new_x, old_x), sub(new_y, old_y));
            for attr in ["point2", "point3"] {
                let (x, y) = self.point(attr, METHOD)?;
                let moved = Point::new(add(x, dx), add(y, dy));
                self.cell(attr, METHOD)?.set(Value::Object(Rc::new(moved)));
            }
        }
        self.cell("position", METHOD)?.set(target.clone());
        Ok(())
    }

    fn render(&self) -> NativeResult<()> {
        let primitive = self.primitive("render")?;
        self.canvas.draw(primitive);
        self.canvas.present();
        Ok(())
    }
}

impl NativeObject for Figure {
    fn class_name(&self) -> &'static str {
        self.kind.class_name()
    }

    fn attribute(&self, name: &str) -> Option<Symbol> {
        self.attributes.get(name).cloned()
    }

    fn has_method(&self, name: &str) -> bool {
        self.lookup_method(name).is_some()
    }

    fn call_method(&self, name: &str, args: &[Value]) -> NativeResult<Option<Symbol>> {
        let Some(method) = self.lookup_method(name) else {
            return Err(NativeError::invalid_call_arguments(self.class_name()));
        };
        if let Some(attr) = method.strip_prefix("get_") {
            check_arity(method, args, 0)?;
            return Ok(self.attributes.get(attr).cloned());
        }
        if let Some(attr) = method.strip_prefix("set_") {
            check_arity(method, args, 1)?;
            self.set(method, attr, &args[0])?;
            return Ok(None);
        }
        match method {
            "move_to" => {
                check_arity(method, args, 1)?;
                self.move_to(&args[0])?;
                Ok(None)
            }
            "render" => {
                check_arity(method, args, 0)?;
                self.render()?;
                Ok(None)
            }
            measure => {
                check_arity(measure, args, 0)?;
                self.measure(measure).map(|value| Some(Symbol::new(value)))
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
