use crate::canvas::SharedCanvas;
use crate::figure::Figure;
use fig_value::{check_arity, List, NativeError, NativeObject, NativeResult, Symbol, Value};
use std::any::Any;

const METHODS: &[&str] = &["add", "remove", "clear", "render"];

/// A collection of figures rendered together.
///
/// `figures` is an ordinary attribute cell: methods read whatever list it
/// currently holds.
pub struct Scene {
    figures: Symbol,
    canvas: SharedCanvas,
}

impl Scene {
    /// A scene over `figures`. The list is shared, not copied.
    pub fn new(figures: List, canvas: SharedCanvas) -> Self {
        Scene {
            figures: Symbol::new(Value::List(figures)),
            canvas,
        }
    }

    fn figures(&self, method: &'static str) -> NativeResult<List> {
        self.figures
            .with(|value| value.as_list().cloned())
            .ok_or_else(|| NativeError::invalid_call_arguments(method))
    }

    /// Draw every figure, then present once.
    fn render(&self) -> NativeResult<()> {
        const M: &str = "render";
        for value in self.figures(M)?.values() {
            let figure = value
                .downcast_object::<Figure>()
                .ok_or_else(|| NativeError::invalid_call_arguments(M))?;
            self.canvas.draw(figure.primitive(M)?);
        }
        self.canvas.present();
        Ok(())
    }
}

impl NativeObject for Scene {
    fn class_name(&self) -> &'static str {
        "Scene"
    }

    fn attribute(&self, name: &str) -> Option<Symbol> {
        (name == "figures").then(|| self.figures.clone())
    }

    fn has_method(&self, name: &str) -> bool {
        METHODS.contains(&name)
    }

    fn call_method(&self, name: &str, args: &[Value]) -> NativeResult<Option<Symbol>> {
        match name {
            "add" => {
                check_arity("add", args, 1)?;
                if args[0].downcast_object::<Figure>().is_none() {
                    return Err(NativeError::invalid_call_arguments("add"));
                }
                self.figures("add")?.push(Symbol::new(args[0].clone()));
            }
            "remove" => {
                check_arity("remove", args, 1)?;
                let figures = self.figures("remove")?;
                let removed = match &args[0] {
                    Value::Int(index) => figures
                        .resolve_index(*index)
                        .and_then(|index| figures.remove(index)),
                    _ => None,
                };
                if removed.is_none() {
                    return Err(NativeError::invalid_call_arguments("remove"));
                }
            }
            "clear" => {
                check_arity("clear", args, 0)?;
                self.figures("clear")?.clear();
            }
            "render" => {
                check_arity("render", args, 0)?;
                self.render()?;
            }
            _ => return Err(NativeError::invalid_call_arguments(self.class_name())),
        }
        Ok(None)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
