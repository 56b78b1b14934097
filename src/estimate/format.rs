//! Numeric display helpers.
//!
//! Rounding here uses round-half-to-even so displayed figures match the
//! strength scorer's own rounding.

/// Rounds `value` to `precision` decimal places, ties to even.
pub fn round_half_even(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(precision as i32);
    let scaled = value * scale;
    // Already integral at this precision (or too large to carry fractions).
    if scaled.fract() == 0.0 {
        return value;
    }
    scaled.round_ties_even() / scale
}

/// Keeps sub-unit magnitudes as-is, rounds everything else to a whole number.
pub fn truncate_to_whole(value: f64) -> f64 {
    if value.abs() < 1.0 {
        value
    } else {
        value.round_ties_even()
    }
}

/// Renders `value` with `,` between every three integer digits.
///
/// The fractional part is left ungrouped and no exponent notation is used.
pub fn group_thousands(value: f64) -> String {
    let mut out = String::new();
    let mut magnitude = value;
    if value < 0.0 {
        out.push('-');
        magnitude = -value;
    }

    let plain = magnitude.to_string();
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain.as_str(), None),
    };

    let lead = int_part.len() % 3;
    if lead > 0 {
        out.push_str(&int_part[..lead]);
    }
    for (i, chunk) in int_part.as_bytes()[lead..].chunks(3).enumerate() {
        if lead > 0 || i > 0 {
            out.push(',');
        }
        // Chunks of ASCII digits.
        out.extend(chunk.iter().map(|&b| b as char));
    }

    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
