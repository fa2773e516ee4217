pub mod intersect_2d;

/// 2D coordinate type used by the raw numeric routines.
pub type Point2 = nalgebra::Point2<f64>;

/// Global tolerance for approximate floating-point comparisons.
///
/// Used by the `is_close` helpers. Intersection and parallelism tests compare
/// exactly.
pub const TOLERANCE: f64 = 1e-10;

/// Renders a number the way the toolkit prints coordinates and entries.
///
/// Integral values print without a fractional part and negative zero prints as `0`.
/// Magnitudes below `1e-6` or from `1e21` up switch to exponent form (`1e+21`,
/// `1.5e-7`), and infinities print as `Infinity` / `-Infinity`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Catches -0.0 as well.
        return "0".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}Infinity");
    }
    let magnitude = value.abs();
    if magnitude < 1e-6 || magnitude >= 1e21 {
        let sci = format!("{value:e}");
        return match sci.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => sci,
        };
    }
    value.to_string()
}
