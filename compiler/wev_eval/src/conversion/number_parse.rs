//! Numeric prefix scanning of strings.
//!
//! Recognises the grammar
//!
//! ```text
//! WS* ( 0[xX] HEX+ | [+-]? ( DIGIT+ ( . DIGIT* )? | . DIGIT+ ) ( [eE] [+-]? DIGIT+ )? )
//! ```
//!
//! and reports the longest numeric prefix. Integer results are preferred; a
//! decimal point, an exponent or 32-bit overflow switches to a float.
//! Hexadecimal literals are only recognised when the caller asks for them:
//! arithmetic operands accept them, casts and array keys do not.

/// Result of scanning a string for a numeric prefix.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParsedNumber {
    /// A numeric prefix was found and fits its representation.
    pub success: bool,
    /// Integer value; 0 unless the prefix is an in-range integer.
    pub integer: i32,
    /// Float value of the prefix.
    pub float: f64,
    /// Whether the prefix denotes an integer (also set for total failure).
    pub is_integer: bool,
    /// Whether the prefix was a hexadecimal literal.
    pub is_hexadecimal: bool,
}

impl ParsedNumber {
    const FAILURE: Self = Self {
        success: false,
        integer: 0,
        float: 0.0,
        is_integer: true,
        is_hexadecimal: false,
    };

    fn integer(value: i32, is_hexadecimal: bool) -> Self {
        Self {
            success: true,
            integer: value,
            float: f64::from(value),
            is_integer: true,
            is_hexadecimal,
        }
    }

    fn float(value: f64, success: bool, is_hexadecimal: bool) -> Self {
        Self {
            success,
            integer: 0,
            float: value,
            is_integer: false,
            is_hexadecimal,
        }
    }
}

/// Scan the numeric prefix of `text`.
pub fn try_convert_to_number(text: &str, can_be_hex: bool) -> ParsedNumber {
    let trimmed = text.trim_start();
    if can_be_hex {
        if let Some(digits) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .filter(|digits| !digits.is_empty())
        {
            return parse_hexadecimal(digits.as_bytes());
        }
    }
    parse_decimal(trimmed)
}

/// The string as an integer, if its whole numeric prefix is an in-range integer.
///
/// Hexadecimal is never recognised.
pub fn try_convert_to_integer(text: &str) -> Option<i32> {
    let parsed = try_convert_to_number(text, false);
    (parsed.success && parsed.is_integer).then_some(parsed.integer)
}

/// The string as a float, if it has a numeric prefix.
///
/// Hexadecimal is never recognised.
pub fn try_convert_to_float(text: &str) -> Option<f64> {
    let parsed = try_convert_to_number(text, false);
    (parsed.success || !parsed.is_integer).then_some(parsed.float)
}

/// The `(int)` cast of a string.
///
/// A string without a numeric prefix is 0. A float prefix truncates toward
/// zero; `None` if the truncated value does not fit in 32 bits.
pub fn string_to_integer(text: &str) -> Option<i32> {
    let parsed = try_convert_to_number(text, false);
    if parsed.is_integer {
        return Some(parsed.integer);
    }
    super::float_to_integer(parsed.float)
}

/// The `(float)` cast of a string; 0.0 without a numeric prefix.
pub fn string_to_float(text: &str) -> f64 {
    try_convert_to_number(text, false).float
}

fn parse_hexadecimal(digits: &[u8]) -> ParsedNumber {
    let mut hex = digits.iter().map_while(|b| char::from(*b).to_digit(16));
    let mut value: i64 = 0;
    let mut seen = false;
    while let Some(digit) = hex.next() {
        seen = true;
        value = value
            .checked_mul(16)
            .and_then(|v| v.checked_add(i64::from(digit)))
            .unwrap_or(i64::MAX);
        if i32::try_from(value).is_err() {
            // Too wide for an integer: keep scanning into a float.
            #[expect(clippy::cast_precision_loss, reason = "overflowed hex literals become floats")]
            let float = hex.by_ref().fold(value as f64, |acc, d| acc * 16.0 + f64::from(d));
            return ParsedNumber::float(float, false, true);
        }
    }
    if !seen {
        // `0x` followed by junk: the prefix is the leading zero.
        return ParsedNumber::integer(0, false);
    }
    i32::try_from(value).map_or(ParsedNumber::FAILURE, |v| ParsedNumber::integer(v, true))
}

/// Count the ASCII digits of `bytes` starting at `from`.
fn digits_at(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}

fn parse_decimal(text: &str) -> ParsedNumber {
    let bytes = text.as_bytes();
    let mut pos = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let integral = digits_at(bytes, pos);
    pos = pos.saturating_add(integral);

    let mut is_float = false;
    if bytes.get(pos) == Some(&b'.') {
        let fraction = digits_at(bytes, pos.saturating_add(1));
        if integral == 0 && fraction == 0 {
            return ParsedNumber::FAILURE;
        }
        pos = pos.saturating_add(1).saturating_add(fraction);
        is_float = true;
    } else if integral == 0 {
        return ParsedNumber::FAILURE;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos.saturating_add(1);
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp = exp.saturating_add(1);
        }
        let exponent = digits_at(bytes, exp);
        if exponent > 0 {
            pos = exp.saturating_add(exponent);
            is_float = true;
        }
    }

    let prefix = text.get(..pos).unwrap_or_default();
    if is_float {
        return ParsedNumber::float(prefix.parse().unwrap_or(0.0), true, false);
    }
    match prefix.parse::<i32>() {
        Ok(value) => ParsedNumber::integer(value, false),
        // Integer overflow: the value survives as a float.
        Err(_) => ParsedNumber::float(prefix.parse().unwrap_or(0.0), false, false),
    }
}
