//! Lexical grammar for the three value kinds. Parsers are `all_consuming`
//! over pre-trimmed text, so stray characters and truncated input fail
//! cleanly instead of being sliced at fixed offsets.

use nom::{
    bytes::complete::take_while_m_n,
    character::complete::{char as C, space0, u8 as U8},
    combinator::{all_consuming, map_res},
    number::complete::float,
    sequence::{delimited, preceded as P, separated_pair, tuple},
    IResult,
};

use crate::params::{Color, Vec2};

fn ws<'a, T>(
    inner: impl FnMut(&'a str) -> IResult<&'a str, T>,
) -> impl FnMut(&'a str) -> IResult<&'a str, T> {
    delimited(space0, inner, space0)
}

fn hex_pair(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |s| u8::from_str_radix(s, 16),
    )(input)
}

/// Standard decimal float literal, optional sign and exponent
pub fn parse_float(text: &str) -> Option<f32> {
    let (_, value) = all_consuming(ws(float))(text.trim()).ok()?;

    Some(value)
}

/// `{ x, y }`
pub fn parse_vector2(text: &str) -> Option<Vec2> {
    let components = separated_pair(ws(float), C(','), ws(float));

    let (_, (x, y)) = all_consuming(delimited(C('{'), components, C('}')))(text.trim()).ok()?;

    Some(Vec2 { x, y })
}

/// `{ r, g, b, a }`, four decimal integers in 0..=255. Out-of-range
/// components are a parse failure, never wrapped to fit a byte.
pub fn parse_color_dec(text: &str) -> Option<Color> {
    let components = tuple((ws(U8), P(C(','), ws(U8)), P(C(','), ws(U8)), P(C(','), ws(U8))));

    let (_, (r, g, b, a)) =
        all_consuming(delimited(C('{'), components, C('}')))(text.trim()).ok()?;

    Some(Color { r, g, b, a })
}

/// `#AARRGGBB`, exactly 8 hex digits after the marker, either case
pub fn parse_color_hex(text: &str) -> Option<Color> {
    let channels = tuple((hex_pair, hex_pair, hex_pair, hex_pair));

    let (_, (a, r, g, b)) = all_consuming(P(C('#'), channels))(text.trim()).ok()?;

    Some(Color { r, g, b, a })
}

pub fn format_float(value: f32) -> String {
    // Display round-trips exactly through the float parser
    format!("{}", value)
}

pub fn format_vector2(value: Vec2) -> String {
    format!("{{ {}, {} }}", value.x, value.y)
}

pub fn format_color_dec(value: Color) -> String {
    format!(
        "{{ {}, {}, {}, {} }}",
        value.r, value.g, value.b, value.a
    )
}

pub fn format_color_hex(value: Color) -> String {
    format!(
        "#{:02X}{:02X}{:02X}{:02X}",
        value.a, value.r, value.g, value.b
    )
}
