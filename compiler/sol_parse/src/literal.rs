//! Literal decoding: numbers, string escapes, subdenominations.

use sol_ir::ast::{NumberValue, StringKind};

/// Unit suffixes accepted after a number literal.
pub(crate) const SUBDENOMINATIONS: &[&str] = &[
    "wei", "gwei", "szabo", "finney", "ether", "seconds", "minutes", "hours", "days", "weeks",
    "years",
];

pub(crate) fn is_subdenomination(text: &str) -> bool {
    SUBDENOMINATIONS.contains(&text)
}

/// Value of a decimal or hex number literal.
///
/// Underscore separators are ignored. Integral values, including ones
/// written with a fraction or exponent such as `1.5e3`, are exact while they
/// fit in a `u128`; everything else is an `f64`.
pub(crate) fn number_value(raw: &str) -> NumberValue {
    let digits: String = raw.chars().filter(|&c| c != '_').collect();

    if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        return match u128::from_str_radix(hex, 16) {
            Ok(value) => NumberValue::Integer(value),
            Err(_) => NumberValue::Float(hex_to_f64(hex)),
        };
    }

    let float = || NumberValue::Float(digits.parse::<f64>().unwrap_or(f64::NAN));
    let (mantissa, exponent) = match digits.find(['e', 'E']) {
        Some(at) => match digits[at + 1..].parse::<i64>() {
            Ok(exponent) => (&digits[..at], exponent),
            Err(_) => return float(),
        },
        None => (digits.as_str(), 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut significand = format!("{int_part}{frac_part}");
    let Some(mut scale) = i64::try_from(frac_part.len())
        .ok()
        .and_then(|len| exponent.checked_sub(len))
    else {
        return float();
    };
    while scale < 0 && significand.ends_with('0') {
        significand.pop();
        scale += 1;
    }

    if scale >= 0 {
        if let Some(value) = integer_with_scale(&significand, scale) {
            return NumberValue::Integer(value);
        }
    }
    float()
}

fn integer_with_scale(significand: &str, scale: i64) -> Option<u128> {
    let base = if significand.is_empty() {
        0
    } else {
        significand.parse::<u128>().ok()?
    };
    if base == 0 {
        return Some(0);
    }
    let scale = u32::try_from(scale).ok()?;
    base.checked_mul(10u128.checked_pow(scale)?)
}

fn hex_to_f64(hex: &str) -> f64 {
    hex.chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0.0, |acc, d| acc * 16.0 + f64::from(d))
}

/// Split a string token's text into its kind and the body between quotes.
pub(crate) fn string_parts(text: &str) -> (StringKind, &str) {
    let (kind, quoted) = if let Some(rest) = text.strip_prefix("hex") {
        (StringKind::Hex, rest)
    } else if let Some(rest) = text.strip_prefix("unicode") {
        (StringKind::Unicode, rest)
    } else {
        (StringKind::Plain, text)
    };
    let body = quoted
        .get(1..quoted.len().saturating_sub(1))
        .unwrap_or_default();
    (kind, body)
}

/// Decoded value of one string token.
pub(crate) fn string_value(text: &str) -> (StringKind, String) {
    let (kind, body) = string_parts(text);
    let value = match kind {
        StringKind::Hex => body.chars().filter(|&c| c != '_').collect(),
        StringKind::Plain | StringKind::Unicode => unescape(body),
    };
    (kind, value)
}

/// Resolve backslash escapes.
///
/// Unknown escapes keep the escaped character; a backslash before a line
/// break is a line continuation and produces nothing.
pub(crate) fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            Some('0') => out.push('\0'),
            Some('x') => {
                let code = take_hex(&mut chars, 2);
                out.extend(code.and_then(char::from_u32));
            }
            Some('u') => {
                let code = take_hex(&mut chars, 4);
                out.extend(code.and_then(char::from_u32));
            }
            Some('\r') => {
                chars.next_if_eq(&'\n');
            }
            Some('\n') | None => {}
            Some(other) => out.push(other),
        }
    }
    out
}

fn take_hex(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, n: usize) -> Option<u32> {
    let mut value = 0;
    for _ in 0..n {
        let digit = chars.next_if(char::is_ascii_hexdigit)?.to_digit(16)?;
        value = value * 16 + digit;
    }
    Some(value)
}
