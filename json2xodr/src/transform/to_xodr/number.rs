/// Render `val` in normalized scientific notation with 16 fractional digits
/// and a signed exponent of at least two digits.
///
/// ```
/// use json2xodr::transform::scientific;
/// assert_eq!(scientific(12.34), "1.2340000000000000e+01");
/// assert_eq!(scientific(-0.005), "-5.0000000000000000e-03");
/// assert_eq!(scientific(0.0), "0.0000000000000000e+00");
/// ```
#[must_use]
pub fn scientific(val: f64) -> String {
    if val.is_nan() {
        return String::from("nan");
    }
    if val.is_infinite() {
        return String::from(if val.is_sign_negative() { "-inf" } else { "inf" });
    }
    let formatted = format!("{:.16e}", val);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => format!(
                "{}e{}{:02}",
                mantissa,
                if exponent < 0 { '-' } else { '+' },
                exponent.unsigned_abs()
            ),
            Err(_) => formatted,
        },
        None => formatted,
    }
}
