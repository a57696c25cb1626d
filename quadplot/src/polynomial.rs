//! Polynomials.
//!
//! Everything we need to solve P(x) = ax² + bx + c = 0, including the
//! degenerate cases where P collapses to a line or a constant.
//!
//! All comparisons against zero are exact. A coefficient of `1e-300` is
//! a perfectly good leading coefficient as far as this module is concerned.
use crate::error::{Error, Result};

/// The coefficients of P(x) = ax² + bx + c.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Coefficients { a, b, c }
    }

    /// Parse three user-supplied strings. Surrounding whitespace is ignored;
    /// anything that is not a finite number is rejected.
    pub fn parse(a: &str, b: &str, c: &str) -> Result<Self> {
        Ok(Coefficients {
            a: parse_coefficient('a', a)?,
            b: parse_coefficient('b', b)?,
            c: parse_coefficient('c', c)?,
        })
    }

    /// Evaluate P at x.
    pub fn at(&self, x: f64) -> f64 {
        // Written out rather than via powi so that the vertex and the sampled
        // curve round identically.
        self.a * x * x + self.b * x + self.c
    }

    /// Discriminant Δ = b² - 4ac.
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }
}

fn parse_coefficient(name: char, input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| Error::InvalidCoefficient {
            name,
            input: input.to_string(),
        })?;

    if !value.is_finite() {
        return Err(Error::NonFiniteCoefficient { name, value });
    }

    Ok(value)
}

/// What P degenerates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degree {
    /// a = b = 0.
    Constant,
    /// a = 0, b ≠ 0.
    Linear,
    /// a ≠ 0.
    Quadratic,
}

/// The kind of solution set, without the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootKind {
    InfiniteSolutions,
    NoSolution,
    OneLinear,
    OneRepeated,
    TwoReal,
    TwoComplex,
}

/// A complex number re + im·i.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn conj(self) -> Complex {
        Complex {
            re: self.re,
            im: -self.im,
        }
    }
}

/// A single root as handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootValue {
    Real(f64),
    Complex(Complex),
}

/// The solution set of P(x) = 0.
///
/// Each variant carries exactly as many values as its kind has roots, so
/// a complex root can never end up next to a real one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    /// 0 = 0.
    Infinite,
    /// 0 = c with c ≠ 0.
    None,
    /// bx + c = 0.
    Linear(f64),
    /// Δ = 0, root with multiplicity two.
    Repeated(f64),
    /// Δ > 0. The first root uses +√Δ, the second -√Δ. Not sorted.
    Real(f64, f64),
    /// Δ < 0. The first root of the conjugate pair; the second is its conjugate.
    Complex(Complex),
}

impl Roots {
    pub fn kind(&self) -> RootKind {
        match self {
            Roots::Infinite => RootKind::InfiniteSolutions,
            Roots::None => RootKind::NoSolution,
            Roots::Linear(_) => RootKind::OneLinear,
            Roots::Repeated(_) => RootKind::OneRepeated,
            Roots::Real(..) => RootKind::TwoReal,
            Roots::Complex(_) => RootKind::TwoComplex,
        }
    }

    /// All roots, in order.
    pub fn values(&self) -> Vec<RootValue> {
        match *self {
            Roots::Infinite | Roots::None => vec![],
            Roots::Linear(x) | Roots::Repeated(x) => vec![RootValue::Real(x)],
            Roots::Real(x1, x2) => vec![RootValue::Real(x1), RootValue::Real(x2)],
            Roots::Complex(z) => vec![RootValue::Complex(z), RootValue::Complex(z.conj())],
        }
    }

    /// The real roots, in order. Empty for complex roots.
    pub fn real(&self) -> Vec<f64> {
        match *self {
            Roots::Linear(x) | Roots::Repeated(x) => vec![x],
            Roots::Real(x1, x2) => vec![x1, x2],
            Roots::Infinite | Roots::None | Roots::Complex(_) => vec![],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Roots::Infinite | Roots::None => 0,
            Roots::Linear(_) | Roots::Repeated(_) => 1,
            Roots::Real(..) | Roots::Complex(_) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything there is to know about the solutions of P(x) = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub degree: Degree,
    /// Δ, or `None` when P is not quadratic.
    pub discriminant: Option<f64>,
    pub roots: Roots,
}

impl Classification {
    pub fn root_kind(&self) -> RootKind {
        self.roots.kind()
    }
}

/// The apex of the parabola.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

/// Solve P(x) = 0 for P = ax² + bx + c.
pub fn classify(p: &Coefficients) -> Classification {
    let Coefficients { a, b, c } = *p;

    if a == 0.0 {
        if b == 0.0 {
            // Constant equation; either everything or nothing is a solution.
            let roots = if c == 0.0 { Roots::Infinite } else { Roots::None };
            return Classification {
                degree: Degree::Constant,
                discriminant: None,
                roots,
            };
        }

        // Linear equation. b ≠ 0 so the division is safe.
        return Classification {
            degree: Degree::Linear,
            discriminant: None,
            roots: Roots::Linear(-c / b),
        };
    }

    // Discriminant Δ.
    let delta = p.discriminant();

    // Δ > 0 => two distinct roots
    // Δ = 0 => one root (with multiplicity two)
    // otherwise imaginary roots. An overflowed Δ (NaN) lands here as well.
    let roots = if delta > 0.0 {
        let s = delta.sqrt();
        Roots::Real((-b + s) / (2.0 * a), (-b - s) / (2.0 * a))
    } else if delta == 0.0 {
        Roots::Repeated(-b / (2.0 * a))
    } else {
        Roots::Complex(Complex {
            re: -b / (2.0 * a),
            im: (-delta).sqrt() / (2.0 * a),
        })
    };

    Classification {
        degree: Degree::Quadratic,
        discriminant: Some(delta),
        roots,
    }
}

/// The vertex of the parabola, or `None` if P is not quadratic.
pub fn vertex(p: &Coefficients) -> Option<Vertex> {
    if p.a == 0.0 {
        return None;
    }

    let x = -p.b / (2.0 * p.a);
    Some(Vertex { x, y: p.at(x) })
}
