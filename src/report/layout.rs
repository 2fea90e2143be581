//! Character-counting text helpers for fixed-width reports.

/// Centers `text` in `width` characters using `fill`. Odd padding puts the
/// extra character on the right; text at least `width` long is returned as is.
pub fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let remaining = width - len;
    let left = remaining / 2;
    let right = remaining - left;

    let mut line = String::with_capacity(width);
    line.extend(std::iter::repeat(fill).take(left));
    line.push_str(text);
    line.extend(std::iter::repeat(fill).take(right));
    line
}

/// Returns at most the first `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Shortest decimal text that round-trips to `value`, keeping a trailing
/// `.0` on integral values (`900.0`, `854.33`). Very large or very small
/// magnitudes use a signed exponent of at least two digits (`1e+16`,
/// `1.5e-05`).
pub fn format_plain_decimal(value: f64) -> String {
    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
            }
            Err(_) => text,
        },
        None => text,
    }
}
