//! Human-readable text for an equation and its solutions.
use crate::format::format;
use crate::polynomial::{Classification, Coefficients, RootKind, RootValue, Vertex};
use std::fmt;

/// Display string of P(x) = 0, e.g. `"x² - 3x + 2 = 0"`.
pub fn equation(p: &Coefficients) -> String {
    let Coefficients { a, b, c } = *p;
    let mut parts: Vec<String> = vec![];

    if a != 0.0 {
        parts.push(if a == 1.0 {
            "x²".to_string()
        } else if a == -1.0 {
            "-x²".to_string()
        } else {
            format!("{}x²", format(a))
        });
    }

    if b != 0.0 {
        let term = if b.abs() == 1.0 {
            "x".to_string()
        } else {
            format!("{}x", format(b.abs()))
        };
        parts.push(format!("{}{}", sign(b, !parts.is_empty()), term));
    }

    if c != 0.0 {
        parts.push(format!("{}{}", sign(c, !parts.is_empty()), format(c.abs())));
    }

    if parts.is_empty() {
        return "0 = 0".to_string();
    }

    format!("{} = 0", parts.join(" "))
}

/// Sign prefix of a term. A leading positive term has none.
fn sign(x: f64, has_lead: bool) -> &'static str {
    if x < 0.0 {
        "- "
    } else if has_lead {
        "+ "
    } else {
        ""
    }
}

/// Short description of a root kind.
pub fn kind_label(kind: RootKind) -> &'static str {
    match kind {
        RootKind::InfiniteSolutions => "infinitely many solutions",
        RootKind::NoSolution => "no solution",
        RootKind::OneLinear => "linear equation (one solution)",
        RootKind::OneRepeated => "repeated root (one solution)",
        RootKind::TwoReal => "two distinct real roots",
        RootKind::TwoComplex => "complex roots (no real roots)",
    }
}

/// Text summary of a solved equation, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub equation: String,
    pub kind: String,
    /// One line per root, `"x1 = 2"` or `"x1 = -1 + 2i"`.
    pub roots: Vec<String>,
    pub vertex: String,
    pub discriminant: String,
}

impl Summary {
    pub fn new(p: &Coefficients, classification: &Classification, vertex: Option<Vertex>) -> Self {
        let roots = classification
            .roots
            .values()
            .iter()
            .enumerate()
            .map(|(i, root)| format!("x{} = {}", i + 1, root_text(root)))
            .collect();

        let vertex = match vertex {
            Some(v) => format!("({}, {})", format(v.x), format(v.y)),
            None => "no vertex (linear or constant equation)".to_string(),
        };

        let discriminant = match classification.discriminant {
            Some(d) => format!("D = {} ({})", format(d), discriminant_hint(d)),
            None => "discriminant does not apply to linear or constant equations".to_string(),
        };

        Summary {
            equation: equation(p),
            kind: kind_label(classification.root_kind()).to_string(),
            roots,
            vertex,
            discriminant,
        }
    }
}

fn root_text(root: &RootValue) -> String {
    match *root {
        RootValue::Real(x) => format(x),
        RootValue::Complex(z) => {
            let op = if z.im >= 0.0 { "+" } else { "-" };
            format!("{} {} {}i", format(z.re), op, format(z.im.abs()))
        }
    }
}

fn discriminant_hint(d: f64) -> &'static str {
    if d > 0.0 {
        "two distinct real roots"
    } else if d == 0.0 {
        "repeated root"
    } else {
        "complex roots"
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "equation:     {}", self.equation)?;
        writeln!(f, "roots:        {}", self.kind)?;
        if self.roots.is_empty() {
            writeln!(f, "              no roots to display")?;
        }
        for root in &self.roots {
            writeln!(f, "              {}", root)?;
        }
        writeln!(f, "vertex:       {}", self.vertex)?;
        write!(f, "discriminant: {}", self.discriminant)
    }
}
