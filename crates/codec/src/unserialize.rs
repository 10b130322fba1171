//! Decoder for `serialize()` text
//!
//! Grammar (string lengths count bytes):
//!
//! ```text
//! N;  b:0;  b:1;  i:<int>;  d:<float|INF|-INF|NAN>;
//! s:<len>:"<bytes>";
//! a:<count>:{<key><value>...}
//! ```
//!
//! Objects, enums and references are refused, never instantiated.

use contracts::{DecodeError, PhpKey, PhpValue, ValueDecoder};
use nom::{
    branch::alt,
    bytes::complete::{tag, take, take_till1},
    character::complete::{char, digit1, i64 as decimal},
    combinator::{cut, map, map_res, value},
    error::{Error, ErrorKind},
    sequence::{preceded, terminated},
    IResult,
};
use tracing::debug;

/// Arrays nested deeper than this are rejected
const MAX_DEPTH: usize = 64;

/// Strict decoder: the whole input must be exactly one value
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpUnserializer;

impl ValueDecoder for PhpUnserializer {
    fn decode(&self, raw: &str) -> Result<PhpValue, DecodeError> {
        let result = unserialize(raw.as_bytes());
        if let Err(ref e) = result {
            debug!(offset = e.offset, error = %e.message, "serialized value rejected");
        }
        result
    }
}

/// Decode a complete encoded value
pub fn unserialize(input: &[u8]) -> Result<PhpValue, DecodeError> {
    if input.iter().all(u8::is_ascii_whitespace) {
        return Err(DecodeError::new(0, "empty input"));
    }

    match value_at(input, 0) {
        Ok((rest, value)) if rest.is_empty() => Ok(value),
        Ok((rest, _)) => Err(DecodeError::new(
            input.len() - rest.len(),
            "trailing data after value",
        )),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(DecodeError::new(
            input.len() - e.input.len(),
            failure_message(&e),
        )),
        Err(nom::Err::Incomplete(_)) => {
            Err(DecodeError::new(input.len(), "unexpected end of input"))
        }
    }
}

fn failure_message(e: &Error<&[u8]>) -> String {
    const REFUSED: [&[u8]; 5] = [b"O:", b"C:", b"E:", b"r:", b"R:"];

    if REFUSED.iter().any(|marker| e.input.starts_with(marker)) {
        "objects, enums and references are not supported".to_string()
    } else if e.code == ErrorKind::TooLarge {
        format!("arrays nested deeper than {MAX_DEPTH} levels")
    } else if e.input.is_empty() || e.code == ErrorKind::Eof {
        "unexpected end of input".to_string()
    } else {
        format!("unexpected input ({})", e.code.description())
    }
}

fn value_at(input: &[u8], depth: usize) -> IResult<&[u8], PhpValue> {
    alt((null, boolean, integer, float, string, |i| array(i, depth)))(input)
}

fn null(input: &[u8]) -> IResult<&[u8], PhpValue> {
    value(PhpValue::Null, tag("N;"))(input)
}

fn boolean(input: &[u8]) -> IResult<&[u8], PhpValue> {
    preceded(
        tag("b:"),
        cut(alt((
            value(PhpValue::Bool(false), tag("0;")),
            value(PhpValue::Bool(true), tag("1;")),
        ))),
    )(input)
}

fn integer(input: &[u8]) -> IResult<&[u8], PhpValue> {
    map(int_body, PhpValue::Int)(input)
}

fn int_body(input: &[u8]) -> IResult<&[u8], i64> {
    preceded(tag("i:"), cut(terminated(decimal, char(';'))))(input)
}

fn float(input: &[u8]) -> IResult<&[u8], PhpValue> {
    preceded(
        tag("d:"),
        cut(map_res(
            terminated(take_till1(|b: u8| b == b';'), char(';')),
            parse_float,
        )),
    )(input)
}

fn parse_float(raw: &[u8]) -> Result<PhpValue, String> {
    let text = std::str::from_utf8(raw).map_err(|e| e.to_string())?;
    let x = match text {
        "INF" => f64::INFINITY,
        "-INF" => f64::NEG_INFINITY,
        "NAN" => f64::NAN,
        _ => text.parse::<f64>().map_err(|e| e.to_string())?,
    };
    Ok(PhpValue::Float(x))
}

fn string(input: &[u8]) -> IResult<&[u8], PhpValue> {
    map(string_body, PhpValue::String)(input)
}

fn string_body(input: &[u8]) -> IResult<&[u8], String> {
    preceded(tag("s:"), cut(string_data))(input)
}

/// `<len>:"<bytes>";` after the `s:` marker
fn string_data(input: &[u8]) -> IResult<&[u8], String> {
    let (input, len) = terminated(length, tag(":\""))(input)?;
    map(
        terminated(map_res(take(len), std::str::from_utf8), tag("\";")),
        str::to_string,
    )(input)
}

fn length(input: &[u8]) -> IResult<&[u8], usize> {
    map_res(digit1, |digits: &[u8]| {
        std::str::from_utf8(digits)
            .unwrap_or_default()
            .parse::<usize>()
    })(input)
}

fn key(input: &[u8]) -> IResult<&[u8], PhpKey> {
    alt((
        map(int_body, PhpKey::Int),
        map(string_body, PhpKey::from_string),
    ))(input)
}

fn array(input: &[u8], depth: usize) -> IResult<&[u8], PhpValue> {
    preceded(tag("a:"), cut(|i| array_body(i, depth)))(input)
}

/// `<count>:{...}` after the `a:` marker
fn array_body(input: &[u8], depth: usize) -> IResult<&[u8], PhpValue> {
    let (mut input, len) = terminated(length, tag(":{"))(input)?;
    if depth >= MAX_DEPTH {
        return Err(nom::Err::Failure(Error::new(input, ErrorKind::TooLarge)));
    }

    let mut entries = Vec::with_capacity(len.min(64));
    for _ in 0..len {
        let (rest, k) = key(input)?;
        let (rest, v) = value_at(rest, depth + 1)?;
        entries.push((k, v));
        input = rest;
    }

    let (input, _) = char('}')(input)?;
    Ok((input, PhpValue::Array(entries)))
}
