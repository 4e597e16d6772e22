//! Measures and outlines. Angles are stored in degrees.

use super::{Figure, FigureKind};
use crate::canvas::Outline;
use crate::numeric::{add, mul};
use fig_value::{NativeError, NativeResult, Number, Value};
use std::f64::consts::SQRT_2;

#[allow(clippy::approx_constant, reason = "circle measures use the two-digit constant")]
const PI: f64 = 3.14;

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

impl Figure {
    /// Dispatch a zero-argument measuring method.
    pub(super) fn measure(&self, method: &'static str) -> NativeResult<Value> {
        match method {
            "area" => self.area(),
            "perimeter" => self.perimeter(),
            "diagonal" => self.diagonal(),
            "diameter" => {
                let radius = self.number("radius", method)?;
                Ok(mul(Number::Int(2), radius).into())
            }
            "sides" => self.sides(),
            "heights" => self.heights(),
            "diagonals" => self.diagonals(),
            _ => Err(NativeError::invalid_call_arguments(method)),
        }
    }

    fn area(&self) -> NativeResult<Value> {
        const M: &str = "area";
        Ok(match self.kind {
            FigureKind::Square => {
                let side = self.number("side", M)?;
                mul(side, side).into()
            }
            FigureKind::Rectangle => mul(self.number("width", M)?, self.number("height", M)?).into(),
            FigureKind::Circle => {
                let radius = self.float("radius", M)?;
                Value::Float(PI * radius * radius)
            }
            FigureKind::Triangle => Value::Float(self.triangle_area(M)?),
            FigureKind::Rhomb => {
                let side = self.float("side", M)?;
                let angle = self.float("angle", M)?.to_radians();
                Value::Float(side * side * angle.sin())
            }
            FigureKind::Parallelogram => {
                mul(self.number("base", M)?, self.number("height", M)?).into()
            }
            FigureKind::Trapeze => {
                let (base1, base2) = (self.float("base1", M)?, self.float("base2", M)?);
                Value::Float(0.5 * (base1 + base2) * self.float("height", M)?)
            }
        })
    }

    fn perimeter(&self) -> NativeResult<Value> {
        const M: &str = "perimeter";
        Ok(match self.kind {
            FigureKind::Square | FigureKind::Rhomb => {
                mul(Number::Int(4), self.number("side", M)?).into()
            }
            FigureKind::Rectangle => {
                let half = add(self.number("width", M)?, self.number("height", M)?);
                mul(Number::Int(2), half).into()
            }
            FigureKind::Circle => Value::Float(2.0 * PI * self.float("radius", M)?),
            FigureKind::Triangle => Value::Float(self.triangle_sides(M)?.iter().sum()),
            FigureKind::Parallelogram => {
                let (base, slant) = self.parallelogram_sides(M)?;
                Value::Float(2.0 * (base + slant))
            }
            FigureKind::Trapeze => {
                let (base1, base2) = (self.float("base1", M)?, self.float("base2", M)?);
                let height = self.float("height", M)?;
                let left = (0.5 * (base2 - base1)).hypot(height);
                let right = (0.5 * (base2 + base1)).hypot(height);
                Value::Float(base1 + base2 + left + right)
            }
        })
    }

    fn diagonal(&self) -> NativeResult<Value> {
        const M: &str = "diagonal";
        let length = match self.kind {
            FigureKind::Square => self.float("side", M)? * SQRT_2,
            FigureKind::Rectangle => self.float("width", M)?.hypot(self.float("height", M)?),
            _ => return Err(NativeError::invalid_call_arguments(M)),
        };
        Ok(Value::Float(length))
    }

    fn sides(&self) -> NativeResult<Value> {
        const M: &str = "sides";
        match self.kind {
            FigureKind::Triangle => Ok(Value::list(
                self.triangle_sides(M)?.into_iter().map(Value::Float),
            )),
            FigureKind::Parallelogram => {
                let (_, slant) = self.parallelogram_sides(M)?;
                let base = self.number("base", M)?;
                Ok(Value::list([base.into(), Value::Float(slant)]))
            }
            _ => Err(NativeError::invalid_call_arguments(M)),
        }
    }

    /// Heights onto each side, in the order of [`Self::triangle_sides`].
    fn heights(&self) -> NativeResult<Value> {
        const M: &str = "heights";
        let area = self.triangle_area(M)?;
        let sides = self.triangle_sides(M)?;
        Ok(Value::list(
            sides.into_iter().map(|side| Value::Float(2.0 * area / side)),
        ))
    }

    fn diagonals(&self) -> NativeResult<Value> {
        const M: &str = "diagonals";
        let (long, short) = match self.kind {
            FigureKind::Rhomb => {
                let side = self.float("side", M)?;
                let cos = self.float("angle", M)?.to_radians().cos();
                (
                    side * (2.0 * (1.0 + cos)).sqrt(),
                    side * (2.0 * (1.0 - cos)).sqrt(),
                )
            }
            FigureKind::Parallelogram => {
                let (base, slant) = self.parallelogram_sides(M)?;
                let cos = self.float("angle", M)?.to_radians().cos();
                let squares = base * base + slant * slant;
                let cross = 2.0 * base * slant * cos;
                ((squares + cross).sqrt(), (squares - cross).sqrt())
            }
            _ => return Err(NativeError::invalid_call_arguments(M)),
        };
        Ok(Value::list([Value::Float(long), Value::Float(short)]))
    }

    /// Signed shoelace area: negative for clockwise vertices.
    fn triangle_area(&self, method: &'static str) -> NativeResult<f64> {
        let (x1, y1) = self.point_f64("point1", method)?;
        let (x2, y2) = self.point_f64("point2", method)?;
        let (x3, y3) = self.point_f64("point3", method)?;
        Ok(0.5 * (x1 * (y2 - y3) + x2 * (y3 - y1) + x3 * (y1 - y2)))
    }

    /// `[|p1 p2|, |p2 p3|, |p3 p1|]`
    fn triangle_sides(&self, method: &'static str) -> NativeResult<[f64; 3]> {
        let p1 = self.point_f64("point1", method)?;
        let p2 = self.point_f64("point2", method)?;
        let p3 = self.point_f64("point3", method)?;
        Ok([distance(p1, p2), distance(p2, p3), distance(p3, p1)])
    }

    /// Base and slanted side. The slant follows from height and angle.
    fn parallelogram_sides(&self, method: &'static str) -> NativeResult<(f64, f64)> {
        let base = self.float("base", method)?;
        let height = self.float("height", method)?;
        let angle = self.float("angle", method)?.to_radians();
        Ok((base, height / angle.sin()))
    }

    pub(super) fn outline(&self, method: &'static str) -> NativeResult<Outline> {
        let (x, y) = self.point_f64("position", method)?;
        let vertices = match self.kind {
            FigureKind::Square => {
                let side = self.float("side", method)?;
                rectangle(x, y, side, side)
            }
            FigureKind::Rectangle => {
                rectangle(x, y, self.float("width", method)?, self.float("height", method)?)
            }
            FigureKind::Circle => {
                return Ok(Outline::Circle {
                    center: (x, y),
                    radius: self.float("radius", method)?,
                })
            }
            FigureKind::Triangle => vec![
                (x, y),
                self.point_f64("point2", method)?,
                self.point_f64("point3", method)?,
            ],
            FigureKind::Rhomb => {
                let side = self.float("side", method)?;
                let angle = self.float("angle", method)?.to_radians();
                let top = (x + side * angle.cos(), y + side * angle.sin());
                vec![(x, y), top, (top.0 + side, top.1), (x + side, y)]
            }
            FigureKind::Parallelogram => {
                let base = self.float("base", method)?;
                let height = self.float("height", method)?;
                let angle = self.float("angle", method)?.to_radians();
                let top = (x + height / angle.tan(), y + height);
                vec![(x, y), top, (top.0 + base, top.1), (x + base, y)]
            }
            FigureKind::Trapeze => {
                let (base1, base2) = (self.float("base1", method)?, self.float("base2", method)?);
                let height = self.float("height", method)?;
                let top = (x + 0.5 * (base1 - base2), y + height);
                vec![(x, y), top, (top.0 + base2, top.1), (x + base1, y)]
            }
        };
        Ok(Outline::Polygon(vertices))
    }
}

fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Vec<(f64, f64)> {
    vec![(x, y), (x + width, y), (x + width, y + height), (x, y + height)]
}
