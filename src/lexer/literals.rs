//! Decoding of number and string literal text into `Literal` values.
//!
//! Errors are returned as bare messages; the scanner attaches the position.

use std::{iter::Peekable, str::Chars};

use num_bigint::BigInt;

use crate::ast::ast::Literal;

/// Decodes the text matched by the number rule.
pub fn parse_number(text: &str) -> Result<Literal, String> {
    let lowered = text.to_ascii_lowercase();
    let (negative, unsigned) = match lowered.as_bytes().first() {
        Some(b'-') => (true, &lowered[1..]),
        Some(b'+') => (false, &lowered[1..]),
        _ => (false, &lowered[..]),
    };

    let radix = match unsigned.get(..2) {
        Some("0b") => Some(2),
        Some("0o") => Some(8),
        Some("0x") => Some(16),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_integer(negative, &unsigned[2..], radix);
    }

    if let Some(imaginary) = unsigned.strip_suffix('j') {
        let value = parse_float(imaginary)?;
        return Ok(Literal::Imaginary(if negative { -value } else { value }));
    }

    if unsigned.contains(|c: char| c == '.' || c == 'e') {
        let value = parse_float(unsigned)?;
        return Ok(Literal::Float(if negative { -value } else { value }));
    }

    if unsigned.len() > 1 && unsigned.starts_with('0') && unsigned.bytes().any(|b| b != b'0') {
        return Err(String::from(
            "leading zeros in decimal integer literals are not permitted",
        ));
    }

    parse_integer(negative, unsigned, 10)
}

fn parse_integer(negative: bool, digits: &str, radix: u32) -> Result<Literal, String> {
    let signed = format!("{}{}", if negative { "-" } else { "" }, digits);

    BigInt::parse_bytes(signed.as_bytes(), radix)
        .map(Literal::Integer)
        .ok_or_else(|| format!("invalid integer literal {:?}", digits))
}

fn parse_float(text: &str) -> Result<f64, String> {
    text.parse::<f64>()
        .map_err(|_| format!("invalid number literal {:?}", text))
}

/// Finds the offset of the closing `quote` for a string body starting at
/// `body_start`. A backslash always consumes the next character. Returns
/// `None` when a newline or the end of input comes first.
pub fn find_string_end(source: &str, body_start: usize, quote: &str) -> Option<usize> {
    let mut position = body_start;

    loop {
        let rest = &source[position..];
        if rest.starts_with(quote) {
            return Some(position);
        }

        let mut chars = rest.chars();
        match chars.next()? {
            '\n' => return None,
            '\\' => match chars.next()? {
                '\n' => return None,
                escaped => position += 1 + escaped.len_utf8(),
            },
            other => position += other.len_utf8(),
        }
    }
}

/// Decodes a string body. `prefix` is any mix of `b` (bytes) and `r` (raw).
pub fn decode_string(prefix: &str, body: &str) -> Result<Literal, String> {
    let raw = prefix.contains('r');
    let bytes = prefix.contains('b');

    if bytes && !body.is_ascii() {
        return Err(String::from(
            "bytes can only contain ASCII literal characters",
        ));
    }

    let units: Vec<u32> = if raw {
        body.chars().map(|c| c as u32).collect()
    } else {
        decode_escapes(body, bytes)?
    };

    if bytes {
        units
            .into_iter()
            .map(|unit| {
                u8::try_from(unit).map_err(|_| format!("escape value {:#o} out of range", unit))
            })
            .collect::<Result<Vec<u8>, String>>()
            .map(Literal::Bytes)
    } else {
        units
            .into_iter()
            .map(|unit| {
                char::from_u32(unit).ok_or_else(|| format!("illegal Unicode character {:#x}", unit))
            })
            .collect::<Result<String, String>>()
            .map(Literal::String)
    }
}

fn decode_escapes(body: &str, bytes: bool) -> Result<Vec<u32>, String> {
    let mut units = Vec::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            units.push(ch as u32);
            continue;
        }

        let Some(escaped) = chars.next() else {
            units.push('\\' as u32);
            break;
        };

        match escaped {
            '\\' | '\'' | '"' => units.push(escaped as u32),
            'a' => units.push(0x07),
            'b' => units.push(0x08),
            'f' => units.push(0x0c),
            'n' => units.push(0x0a),
            'r' => units.push(0x0d),
            't' => units.push(0x09),
            'v' => units.push(0x0b),
            '0'..='7' => {
                let mut value = escaped as u32 - '0' as u32;
                for _ in 0..2 {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                units.push(value);
            }
            'x' => units.push(read_hex(&mut chars, 2, "\\xXX")?),
            'u' if !bytes => units.push(read_hex(&mut chars, 4, "\\uXXXX")?),
            'U' if !bytes => units.push(read_hex(&mut chars, 8, "\\UXXXXXXXX")?),
            'N' if !bytes => return Err(read_name_escape(&mut chars)),
            other => {
                units.push('\\' as u32);
                units.push(other as u32);
            }
        }
    }

    Ok(units)
}

/// Character names are not resolved, so `\N{...}` is always an error.
fn read_name_escape(chars: &mut Peekable<Chars>) -> String {
    let malformed = String::from("malformed \\N character escape");
    if chars.next() != Some('{') {
        return malformed;
    }

    let mut name = String::new();
    loop {
        match chars.next() {
            Some('}') if !name.is_empty() => {
                return format!("unsupported character name escape \\N{{{}}}", name)
            }
            Some('}') | None => return malformed,
            Some(c) => name.push(c),
        }
    }
}

fn read_hex(chars: &mut Peekable<Chars>, digits: usize, escape: &str) -> Result<u32, String> {
    let mut value: u32 = 0;

    for _ in 0..digits {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or_else(|| format!("truncated {} escape", escape))?;
        value = value.wrapping_mul(16).wrapping_add(digit);
    }

    Ok(value)
}
