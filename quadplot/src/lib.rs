//! Solve and plot ax² + bx + c = 0.
//!
//! ```
//! use quadplot::{Canvas, Coefficients};
//!
//! let p = Coefficients::parse("1", "-3", "2").unwrap();
//! let plot = quadplot::plot(&p, Canvas::new(400, 400).unwrap(), &quadplot::DEFAULT_STYLE);
//! assert_eq!(plot.classification.roots.real(), vec![2.0, 1.0]);
//! ```
extern crate nalgebra_glm as glm;

pub mod error;
pub mod format;
pub mod polynomial;
pub mod primitive;
pub mod render;
pub mod style;
pub mod summary;
pub mod svg;
pub mod tesselate;
pub mod viewport;

pub use error::{Error, Result};
pub use format::format;
pub use polynomial::{
    classify, vertex, Classification, Coefficients, Complex, Degree, RootKind, RootValue, Roots,
    Vertex,
};
pub use primitive::{draw, Align, Color, Font, Primitive, Stroke, Surface};
pub use render::{render, render_default};
pub use style::{Style, DEFAULT_STYLE};
pub use summary::{equation, Summary};
pub use viewport::{Canvas, Viewport};

/// Everything computed for one equation.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    pub classification: Classification,
    pub vertex: Option<Vertex>,
    pub viewport: Viewport,
    pub primitives: Vec<Primitive>,
}

impl Plot {
    pub fn summary(&self, p: &Coefficients) -> Summary {
        Summary::new(p, &self.classification, self.vertex)
    }
}

/// Classify P, find its vertex, fit a viewport on `canvas` and render.
pub fn plot(p: &Coefficients, canvas: Canvas, style: &Style) -> Plot {
    let classification = classify(p);
    log::debug!(
        "{:?} equation, {:?}, Δ = {:?}",
        classification.degree,
        classification.root_kind(),
        classification.discriminant
    );

    let vertex = vertex(p);
    let viewport = Viewport::build(&classification, vertex, canvas);
    let primitives = render(p, &classification, vertex, &viewport, style);

    Plot {
        classification,
        vertex,
        viewport,
        primitives,
    }
}
