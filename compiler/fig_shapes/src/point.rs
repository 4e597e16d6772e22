use fig_value::{check_arity, NativeError, NativeObject, NativeResult, Number, Symbol, Value};
use std::any::Any;

const METHODS: &[&str] = &["get_x", "get_y", "set_x", "set_y"];

/// A 2D point with mutable `x` and `y` cells.
pub struct Point {
    x: Symbol,
    y: Symbol,
}

impl Point {
    pub fn new(x: Number, y: Number) -> Self {
        Point {
            x: Symbol::new(x.into()),
            y: Symbol::new(y.into()),
        }
    }

    /// Both coordinates, or invalid-call-arguments(`method`) if either cell
    /// was overwritten with a non-number.
    pub fn coordinates(&self, method: &'static str) -> NativeResult<(Number, Number)> {
        let read = |cell: &Symbol| {
            cell.with(Value::as_number)
                .ok_or_else(|| NativeError::invalid_call_arguments(method))
        };
        Ok((read(&self.x)?, read(&self.y)?))
    }

    pub fn coordinates_f64(&self, method: &'static str) -> NativeResult<(f64, f64)> {
        let (x, y) = self.coordinates(method)?;
        Ok((x.as_f64(), y.as_f64()))
    }

    fn cell(&self, name: &str) -> Option<&Symbol> {
        match name {
            "x" => Some(&self.x),
            "y" => Some(&self.y),
            _ => None,
        }
    }
}

impl NativeObject for Point {
    fn class_name(&self) -> &'static str {
        "Point"
    }

    fn attribute(&self, name: &str) -> Option<Symbol> {
        self.cell(name).cloned()
    }

    fn has_method(&self, name: &str) -> bool {
        METHODS.contains(&name)
    }

    fn call_method(&self, name: &str, args: &[Value]) -> NativeResult<Option<Symbol>> {
        let Some(&method) = METHODS.iter().find(|m| **m == name) else {
            return Err(NativeError::invalid_call_arguments(self.class_name()));
        };
        if let Some(attr) = method.strip_prefix("get_") {
            check_arity(method, args, 0)?;
            return Ok(self.cell(attr).cloned());
        }
        check_arity(method, args, 1)?;
        let attr = method.trim_start_matches("set_");
        let (Some(cell), Some(number)) = (self.cell(attr), args[0].as_number()) else {
            return Err(NativeError::invalid_call_arguments(method));
        };
        cell.set(number.into());
        Ok(None)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
