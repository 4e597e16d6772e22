//! The render seam.
//!
//! Figures never draw themselves; they describe a [`Primitive`] and hand it
//! to a [`Canvas`]. Enum dispatch keeps the set of canvases closed:
//!
//! - `Log`: one `info!` event per primitive and per present (default)
//! - `Recording`: keeps every primitive and counts presents (tests)
//! - `Silent`: discards everything

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Drawing style shared by every figure.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub color: String,
    pub border_color: String,
    pub border_width: f64,
    pub border_style: String,
    pub fill: bool,
    pub opacity: f64,
}

/// Geometry of one drawable shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    /// Closed polygon through the vertices, in order.
    Polygon(Vec<(f64, f64)>),
    Circle { center: (f64, f64), radius: f64 },
}

/// One shape handed to a canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    /// Class of the figure that produced it.
    pub class: &'static str,
    pub outline: Outline,
    pub style: Style,
}

/// Captures primitives and presents for inspection.
#[derive(Default)]
pub struct RecordingCanvas {
    primitives: RefCell<Vec<Primitive>>,
    frames: Cell<usize>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

pub enum Canvas {
    Log,
    Recording(RecordingCanvas),
    Silent,
}

/// Shared canvas handle. Every constructed object keeps one.
pub type SharedCanvas = Rc<Canvas>;

impl Canvas {
    pub fn log() -> SharedCanvas {
        Rc::new(Canvas::Log)
    }

    pub fn recording() -> SharedCanvas {
        Rc::new(Canvas::Recording(RecordingCanvas::new()))
    }

    pub fn silent() -> SharedCanvas {
        Rc::new(Canvas::Silent)
    }

    /// Queue a primitive for the next present.
    pub fn draw(&self, primitive: Primitive) {
        match self {
            Canvas::Log => tracing::info!(
                class = primitive.class,
                outline = ?primitive.outline,
                color = %primitive.style.color,
                "draw"
            ),
            Canvas::Recording(canvas) => canvas.primitives.borrow_mut().push(primitive),
            Canvas::Silent => {}
        }
    }

    /// Show everything drawn so far.
    pub fn present(&self) {
        match self {
            Canvas::Log => tracing::info!("present"),
            Canvas::Recording(canvas) => canvas.frames.set(canvas.frames.get() + 1),
            Canvas::Silent => {}
        }
    }

    /// Primitives drawn so far. Empty unless recording.
    pub fn primitives(&self) -> Vec<Primitive> {
        match self {
            Canvas::Recording(canvas) => canvas.primitives.borrow().clone(),
            Canvas::Log | Canvas::Silent => Vec::new(),
        }
    }

    /// Number of presents so far. Zero unless recording.
    pub fn frames(&self) -> usize {
        match self {
            Canvas::Recording(canvas) => canvas.frames.get(),
            Canvas::Log | Canvas::Silent => 0,
        }
    }
}
