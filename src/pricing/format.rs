//! Price formatting.

/// Normalizes a raw amount to two decimal places.
///
/// The amount is scaled to cents and truncated toward zero in IEEE-754 double
/// arithmetic, then scaled back. Because the scaling happens on the binary
/// value, `15.355` becomes `15.35` and a subtraction landing just under `71.1`
/// becomes `71.09`. The result is numeric and final; callers must not round it
/// again.
///
/// # Examples
///
/// ```
/// use benefit_pricing::pricing::format_price;
///
/// assert_eq!(format_price(15.0), 15.00);
/// assert_eq!(format_price(15.355), 15.35);
/// ```
pub fn format_price(raw: f64) -> f64 {
    (raw * 100.0).trunc() / 100.0
}
