//! The three formulas
//!
//! All functions are pure. Preconditions that would divide by zero short-circuit
//! to [`Evaluation::Invalid`]; everything else goes through the finiteness check.

use super::Evaluation;

/// Largest summation bound accepted for [`third_fc`] from untrusted input
pub const MAX_SUMMATION_BOUND: f64 = 10_000_000.0;

/// `((a/b + b/a) * (a/c + c/a)) / (a + b + c)`
pub fn first_fc(a: f64, b: f64, c: f64) -> Evaluation {
    if a == 0.0 || b == 0.0 || c == 0.0 {
        return Evaluation::Invalid;
    }

    let value = ((a / b + b / a) * (a / c + c / a)) / (a + b + c);
    Evaluation::from_value(value)
}

/// Parity-dependent ratio of `m` and `d`
///
/// Even `i`: `(d·m⁵ − d⁵·m) / (i·d)`. Odd `i`: `(i·d) / (d·m³ − d³·m)`.
/// Parity uses the floating remainder, so a fractional `i` counts as odd.
pub fn second_fc(m: f64, d: f64, i: f64) -> Evaluation {
    if d == 0.0 || i == 0.0 {
        return Evaluation::Invalid;
    }

    let value = if i % 2.0 == 0.0 {
        (d * m.powi(5) - d.powi(5) * m) / (i * d)
    } else {
        (i * d) / (d * m.powi(3) - d.powi(3) * m)
    };

    Evaluation::from_value(value)
}

/// `Σ (a² + 56·c^a·f)` for integer `a` from 0 while `a ≤ n`
///
/// `f` stays 1 for every term. A negative `n` sums nothing. Callers taking `n`
/// from a request should bound it with [`MAX_SUMMATION_BOUND`] first.
pub fn third_fc(n: f64, c: f64) -> Evaluation {
    let f = 1.0;
    let mut result = 0.0_f64;
    let mut a = 0.0_f64;

    while a <= n {
        result += a * a + 56.0 * c.powf(a) * f;
        // inf and NaN are absorbing for further additions
        if !result.is_finite() {
            break;
        }
        a += 1.0;
    }

    Evaluation::from_value(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn assert_close(actual: Evaluation, expected: f64) {
        match actual {
            Evaluation::Valid(v) => assert!(
                (v - expected).abs() <= 1e-12 * expected.abs().max(1.0),
                "expected {expected}, got {v}"
            ),
            Evaluation::Invalid => panic!("expected {expected}, got Invalid"),
        }
    }

    #[rstest]
    #[case(1.0, 1.0, 1.0)]
    #[case(1.0, 2.0, 3.0)]
    #[case(-4.0, 0.5, 7.25)]
    #[case(10.0, -3.0, 2.0)]
    fn first_fc_matches_closed_form(#[case] a: f64, #[case] b: f64, #[case] c: f64) {
        let expected = ((a / b + b / a) * (a / c + c / a)) / (a + b + c);
        assert_close(first_fc(a, b, c), expected);
    }

    #[test]
    fn first_fc_unit_inputs() {
        assert_close(first_fc(1.0, 1.0, 1.0), 4.0 / 3.0);
    }

    #[rstest]
    #[case(0.0, 1.0, 1.0)]
    #[case(0.0, -5.0, 3.0)]
    #[case(2.0, 0.0, 1.0)]
    #[case(2.0, 1.0, 0.0)]
    fn first_fc_zero_argument_is_invalid(#[case] a: f64, #[case] b: f64, #[case] c: f64) {
        assert_eq!(first_fc(a, b, c), Evaluation::Invalid);
    }

    #[test]
    fn first_fc_zero_sum_is_invalid() {
        assert_eq!(first_fc(1.0, 1.0, -2.0), Evaluation::Invalid);
    }

    #[test]
    fn first_fc_overflow_is_invalid() {
        assert_eq!(first_fc(1e300, 1e-300, 1.0), Evaluation::Invalid);
    }

    #[rstest]
    #[case(2.0, 0.0)]
    #[case(-7.5, 0.0)]
    fn second_fc_zero_i_is_invalid(#[case] m: f64, #[case] d: f64) {
        assert_eq!(second_fc(m, 3.0, 0.0), Evaluation::Invalid);
        assert_eq!(second_fc(m, d, 2.0), Evaluation::Invalid);
    }

    #[test]
    fn second_fc_even_branch() {
        // (1·32 − 1·2) / (2·1)
        assert_close(second_fc(2.0, 1.0, 2.0), 15.0);
        // -2 % 2 is -0, which still counts as even
        assert_close(second_fc(2.0, 1.0, -2.0), -15.0);
    }

    #[test]
    fn second_fc_odd_branch() {
        // (3·1) / (1·8 − 1·2)
        assert_close(second_fc(2.0, 1.0, 3.0), 0.5);
        assert_close(second_fc(2.0, 1.0, 2.5), 2.5 / 6.0);
    }

    #[rstest]
    #[case(1.0, 1.0)]
    #[case(3.0, 3.0)]
    #[case(0.0, 4.0)]
    #[case(-2.0, 2.0)]
    fn second_fc_odd_branch_zero_denominator(#[case] m: f64, #[case] d: f64) {
        assert_eq!(second_fc(m, d, 3.0), Evaluation::Invalid);
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(-3.5)]
    #[case(1e10)]
    fn third_fc_zero_bound_is_56(#[case] c: f64) {
        assert_eq!(third_fc(0.0, c), Evaluation::Valid(56.0));
    }

    #[test]
    fn third_fc_small_sum() {
        // 56 + (1 + 112) + (4 + 224)
        assert_eq!(third_fc(2.0, 2.0), Evaluation::Valid(397.0));
        // a runs over 0 and 1 only
        assert_eq!(third_fc(1.5, 2.0), Evaluation::Valid(169.0));
    }

    #[test]
    fn third_fc_negative_bound_is_empty_sum() {
        assert_eq!(third_fc(-1.0, 2.0), Evaluation::Valid(0.0));
    }

    #[test]
    fn third_fc_overflows_to_invalid() {
        assert_eq!(third_fc(1000.0, 10.0), Evaluation::Invalid);
        assert_eq!(third_fc(5000.0, -2.0), Evaluation::Invalid);
    }
}
