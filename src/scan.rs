//! Token level matching over loosely formatted C source

use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1, take_while_m_n},
    character::complete::{anychar, char, digit1, multispace0},
    combinator::{map, map_res},
    error::Error,
    multi::many0,
    sequence::{preceded, tuple},
    IResult, Parser,
};

pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A C identifier (or any other run of word characters)
pub fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(is_word_char)(input)
}

/// `0xHH`, exactly two hex digits of either case
pub fn hex_byte(input: &str) -> IResult<&str, u8> {
    preceded(
        tag("0x"),
        map_res(
            take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
            |digits: &str| u8::from_str_radix(digits, 16),
        ),
    )(input)
}

pub fn decimal<T: FromStr>(input: &str) -> IResult<&str, T> {
    map_res(digit1, |digits: &str| digits.parse::<T>())(input)
}

/// `=` with optional whitespace on either side
pub fn assign(input: &str) -> IResult<&str, char> {
    map(tuple((multispace0, char('='), multispace0)), |(_, eq, _)| eq)(input)
}

/// Every non-overlapping match of `parser` in `input`, left to right.
///
/// Matches are only attempted at token starts: a run of word characters that
/// does not match as a whole is skipped in one step.
pub fn find_all<'a, O, F>(input: &'a str, mut parser: F) -> Vec<O>
where
    F: Parser<&'a str, O, Error<&'a str>>,
{
    let result: IResult<&'a str, Vec<Option<O>>> = many0(alt((
        map(|i: &'a str| parser.parse(i), Some),
        map(identifier, |_| None),
        map(anychar, |_| None),
    )))(input);
    match result {
        Ok((_, found)) => found.into_iter().flatten().collect(),
        Err(_) => Vec::new(),
    }
}

pub fn find_first<'a, O, F>(input: &'a str, parser: F) -> Option<O>
where
    F: Parser<&'a str, O, Error<&'a str>>,
{
    find_all(input, parser).into_iter().next()
}

/// `.<label> = <value>` inside a designated initializer
pub fn field<'a, O, F>(label: &'static str, value: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: Parser<&'a str, O, Error<&'a str>>,
{
    preceded(tuple((char('.'), tag(label), assign)), value)
}

#[cfg(test)]
mod tests {
    use nom::bytes::complete::tag;

    use super::{decimal, field, find_all, find_first, hex_byte, identifier};

    #[test]
    fn hex_byte_takes_two_digits() {
        assert_eq!(hex_byte("0xfF,"), Ok((",", 0xff)));
        assert_eq!(hex_byte("0x123"), Ok(("3", 0x12)));
        assert!(hex_byte("0x1,").is_err());
        assert!(hex_byte("0X12").is_err());
    }

    #[test]
    fn find_all_collects_in_order() {
        let bytes = find_all("0x01, 0x02,\n  0xab /* 0x7 */ 0xCD", hex_byte);
        assert_eq!(bytes, vec![0x01, 0x02, 0xab, 0xcd]);
    }

    #[test]
    fn find_all_only_matches_at_token_start() {
        assert_eq!(find_all("bitmap map remap map", tag("map")), vec!["map", "map"]);
        assert!(find_all("", hex_byte).is_empty());
    }

    #[test]
    fn field_matches_nested_designators() {
        let block = "\n  .header.cf = CF,\n  .header.width = 3,\n  .header.w = 40,\n";
        assert_eq!(find_first(block, field("w", decimal::<u32>)), Some(40));
        assert_eq!(find_first(block, field("cf", identifier)), Some("CF"));
        assert_eq!(find_first(block, field("h", decimal::<u32>)), None);
    }
}
