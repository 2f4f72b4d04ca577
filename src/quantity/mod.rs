//! Ingredient quantity formatting.
//!
//! Scaled amounts are floating-point values such as `0.75 * 6 / 4`. For
//! display they are turned into whole numbers or simple fractions using the
//! convergents of the continued-fraction expansion of the value.

pub mod scale;

/// Default tolerance used by [`format_quantity`].
pub const DEFAULT_EPSILON: f64 = 1.0e-6;

/// Upper bound on continued-fraction terms before falling back to decimals.
const MAX_ITERATIONS: usize = 40;

/// Formats an amount as `"<int>"` or `"<num>/<den>"`.
///
/// # Examples
///
/// ```
/// use foodscribe_core::format_quantity;
///
/// assert_eq!(format_quantity(2.0), "2");
/// assert_eq!(format_quantity(0.75 * 6.0 / 4.0), "9/8");
/// assert_eq!(format_quantity(0.333333), "1/3");
/// ```
pub fn format_quantity(amount: f64) -> String {
    format_quantity_with_precision(amount, DEFAULT_EPSILON)
}

/// Formats an amount using a custom approximation tolerance.
///
/// Falls back to two decimal places when no convergent is found within the
/// iteration cap, or the input is not finite.
pub fn format_quantity_with_precision(amount: f64, eps: f64) -> String {
    match rational_approximation(amount, eps, MAX_ITERATIONS) {
        Some((numerator, 1)) => numerator.to_string(),
        Some((numerator, denominator)) => format!("{numerator}/{denominator}"),
        None => format!("{amount:.2}"),
    }
}

/// Returns the first convergent `(numerator, denominator)` of `value` whose
/// error is below `eps * denominator²`.
///
/// Returns `None` when `value` is not finite, when a convergent overflows
/// `i64`, or when `max_iterations` terms were not enough.
pub(crate) fn rational_approximation(
    value: f64,
    eps: f64,
    max_iterations: usize,
) -> Option<(i64, i64)> {
    if !value.is_finite() {
        return None;
    }

    let mut x = value;
    let mut a = x.floor();
    let (mut h_prev, mut k_prev) = (1i64, 0i64);
    let (mut h, mut k) = (to_i64(a)?, 1i64);

    let mut iterations = 0;
    while x - a > eps * (k as f64) * (k as f64) {
        if iterations == max_iterations {
            return None;
        }
        iterations += 1;

        x = 1.0 / (x - a);
        a = x.floor();
        let term = to_i64(a)?;

        let next_h = term.checked_mul(h)?.checked_add(h_prev)?;
        let next_k = term.checked_mul(k)?.checked_add(k_prev)?;
        (h_prev, k_prev, h, k) = (h, k, next_h, next_k);
    }

    Some((h, k))
}

fn to_i64(value: f64) -> Option<i64> {
    if value.is_finite() && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}
