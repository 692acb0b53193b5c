use crate::constants::{Second, HUNDREDTHS_PER_SECOND, SECONDS_PER_MINUTE};

/// Round a non-negative value to the nearest hundredth, ties going up.
///
/// Arguments
/// ---------------
/// * `value`: the value to round, typically a residual number of seconds
///
/// Return
/// ----------
/// * `f64`: `trunc(100 * value + 0.5) / 100`
pub fn round_half_up_hundredth(value: f64) -> f64 {
    (HUNDREDTHS_PER_SECOND * value + 0.5).trunc() / HUNDREDTHS_PER_SECOND
}

/// Split a travel time into whole minutes and residual seconds for display.
///
/// The residual is rounded to the hundredth of a second. When the rounding pushes the
/// residual up to `60.00`, the minute is carried so that the seconds always stay in `[0, 60)`.
///
/// Arguments
/// ---------------
/// * `travel_time`: the raw travel time in seconds
///
/// Return
/// ----------
/// * `(i64, Second)`: whole minutes and rounded residual seconds
pub fn minutes_seconds(travel_time: Second) -> (i64, Second) {
    let mut minutes = (travel_time / SECONDS_PER_MINUTE).trunc() as i64;
    let mut seconds =
        round_half_up_hundredth(travel_time - minutes as f64 * SECONDS_PER_MINUTE);

    if seconds >= SECONDS_PER_MINUTE {
        minutes += 1;
        seconds -= SECONDS_PER_MINUTE;
    }
    (minutes, seconds)
}

/// Render a float in C `printf("%<width>.<precision>e")` notation.
///
/// Rust's `{:e}` drops the exponent sign and padding (`1.5e1`), while the report
/// layout expects the C form with a signed, at-least-two-digit exponent (`1.50e+01`).
///
/// Arguments
/// ---------------
/// * `value`: the value to render
/// * `width`: minimum field width, right aligned
/// * `precision`: number of mantissa digits after the decimal point
///
/// Return
/// ----------
/// * `String`: the padded scientific representation
pub fn fmt_sci(value: f64, width: usize, precision: usize) -> String {
    if !value.is_finite() {
        let s = if value.is_nan() {
            "nan"
        } else if value.is_sign_negative() {
            "-inf"
        } else {
            "inf"
        };
        return format!("{s:>width$}");
    }

    // `{:e}` on a finite float always yields `<mantissa>e<integer>`
    let raw = format!("{value:.precision$e}");
    let parsed = raw
        .split_once('e')
        .and_then(|(mantissa, exponent)| Some((mantissa, exponent.parse::<i32>().ok()?)));
    debug_assert!(parsed.is_some(), "unexpected exponent form: {raw}");

    let body = match parsed {
        Some((mantissa, exp)) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
        }
        None => raw.clone(),
    };
    format!("{body:>width$}")
}
