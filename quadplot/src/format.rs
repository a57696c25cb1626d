//! Number formatting for display.
//!
//! Values are shown with at most six decimals. Very small non-zero values
//! switch to scientific notation so they don't collapse to "0".

/// Below this magnitude non-zero values are shown in scientific notation.
const SCIENTIFIC_BELOW: f64 = 1e-4;

/// At or above this magnitude values are shown with an exponent.
const EXPONENT_FROM: f64 = 1e21;

/// Canonical display string of `x`.
///
/// ```
/// assert_eq!(quadplot::format(1.2000000), "1.2");
/// assert_eq!(quadplot::format(0.00001), "1.000e-5");
/// assert_eq!(quadplot::format(f64::NEG_INFINITY), "-Infinity");
/// ```
pub fn format(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    if x != 0.0 && x.abs() < SCIENTIFIC_BELOW {
        return format!("{:.3e}", x);
    }

    shortest(round6(x))
}

/// Round to six decimals, ties away from zero.
fn round6(x: f64) -> f64 {
    // A tie at the seventh decimal needs x to be an odd multiple of 2⁻⁷.
    // Multiplying by a power of two is exact, so this check is too.
    let scaled = x * 1e6;
    let fixed = if (x * 128.0).fract() == 0.0 && scaled.fract().abs() == 0.5 {
        format!("{:.6}", scaled.round() / 1e6)
    } else {
        format!("{:.6}", x)
    };

    // Unwrap OK. `{:.6}` of a finite float is always a valid float literal.
    fixed.parse().unwrap()
}

/// Shortest decimal that round-trips to `x`.
fn shortest(x: f64) -> String {
    if x == 0.0 {
        // Also catches -0.
        return "0".to_string();
    }

    if x.abs() >= EXPONENT_FROM {
        // Rust writes "1e21", we want "1e+21".
        let s = format!("{:e}", x);
        return s.replacen('e', "e+", 1);
    }

    format!("{}", x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite() {
        assert_eq!(format(f64::INFINITY), "Infinity");
        assert_eq!(format(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format(f64::NAN), "NaN");
    }

    #[test]
    fn tiny_values_use_scientific_notation() {
        assert_eq!(format(0.00001), "1.000e-5");
        assert_eq!(format(1.23456e-5), "1.235e-5");
        assert_eq!(format(-2.5e-7), "-2.500e-7");
    }

    #[test]
    fn trailing_zeros_are_stripped() {
        assert_eq!(format(1.2000000), "1.2");
        assert_eq!(format(3.0), "3");
        assert_eq!(format(-4.5), "-4.5");
        assert_eq!(format(0.0001), "0.0001");
    }

    #[test]
    fn zero() {
        assert_eq!(format(0.0), "0");
        assert_eq!(format(-0.0), "0");
    }

    #[test]
    fn rounds_to_six_decimals() {
        assert_eq!(format(1.0 / 3.0), "0.333333");
        assert_eq!(format(2.0 / 3.0), "0.666667");
        assert_eq!(format(-2.0 / 3.0), "-0.666667");
        assert_eq!(format(0.1 + 0.2), "0.3");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        // 1/128 = 0.0078125 exactly.
        assert_eq!(format(1.0 / 128.0), "0.007813");
        assert_eq!(format(-1.0 / 128.0), "-0.007813");
        assert_eq!(format(3.0 / 128.0), "0.023438");
    }

    #[test]
    fn huge_values_use_an_exponent() {
        assert_eq!(format(1e21), "1e+21");
        assert_eq!(format(-1.5e22), "-1.5e+22");
        assert_eq!(format(1e20), "100000000000000000000");
    }

    #[test]
    fn idempotent() {
        let samples = [
            0.00001,
            1.23456e-5,
            1.0 / 3.0,
            -7.25,
            123456.7891234,
            1.0 / 128.0,
            9.87e-3,
            4.2e21,
        ];
        for x in samples {
            let once = format(x);
            let twice = format(once.parse::<f64>().unwrap());
            assert_eq!(once, twice, "x = {}", x);
        }
    }
}
