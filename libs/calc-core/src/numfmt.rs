//! Number formatting for expression echoes and results
//!
//! Uses `ryu` for the shortest digit string that round-trips, then lays the
//! digits out with fixed rules:
//!
//! - decimal exponent in `-4..16`: positional, integral values keep a trailing
//!   `.0` (`15.0`, `0.0001`, `1000000000000000.0`)
//! - otherwise scientific with a signed, at least two-digit exponent
//!   (`1e+16`, `1e-05`, `1.152921504606847e+18`)

/// Smallest decimal exponent printed positionally
const MIN_POSITIONAL_EXP: i32 = -4;
/// First decimal exponent printed in scientific form
const MAX_POSITIONAL_EXP: i32 = 16;

/// Format an `f64` for display
///
/// Non-finite values render as `nan`, `inf` and `-inf`.
pub fn format_f64(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let mut buffer = ryu::Buffer::new();
    let shortest = buffer.format_finite(value);
    let (negative, digits, exp) = decompose(shortest);

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }
    if (MIN_POSITIONAL_EXP..MAX_POSITIONAL_EXP).contains(&exp) {
        write_positional(&mut out, &digits, exp);
    } else {
        write_scientific(&mut out, &digits, exp);
    }
    out
}

/// Split ryu output into sign, significant digits and decimal exponent
///
/// `"-1.25e-7"` becomes `(true, "125", -7)`: the value is `d.ddd * 10^exp`.
fn decompose(shortest: &str) -> (bool, String, i32) {
    let (negative, unsigned) = match shortest.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, shortest),
    };
    let (mantissa, exp) = match unsigned.split_once(['e', 'E']) {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (unsigned, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let all_digits: String = int_part.chars().chain(frac_part.chars()).collect();
    let leading_zeros = all_digits.len() - all_digits.trim_start_matches('0').len();
    let digits = all_digits.trim_matches('0').to_string();

    // Position of the decimal point relative to the first significant digit
    let point = int_part.len() as i32 - leading_zeros as i32 + exp;
    (negative, digits, point - 1)
}

fn write_positional(out: &mut String, digits: &str, exp: i32) {
    let point = exp + 1;
    if point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-point) as usize));
        out.push_str(digits);
        return;
    }

    let point = point as usize;
    if point >= digits.len() {
        out.push_str(digits);
        out.extend(std::iter::repeat('0').take(point - digits.len()));
        out.push_str(".0");
    } else {
        out.push_str(&digits[..point]);
        out.push('.');
        out.push_str(&digits[point..]);
    }
}

fn write_scientific(out: &mut String, digits: &str, exp: i32) {
    let (first, rest) = digits.split_at(1);
    out.push_str(first);
    if !rest.is_empty() {
        out.push('.');
        out.push_str(rest);
    }
    out.push('e');
    out.push(if exp < 0 { '-' } else { '+' });
    out.push_str(&format!("{:02}", exp.unsigned_abs()));
}
