//! Locating a bitmap asset inside LVGL style C source
//!
//! The source is expected to hold a palette (`/*Color of index N*/` followed by
//! four `0xHH,` literals), a single `<name>_map[] = { ... }` byte array and a
//! `<type> <name> = { ... }` descriptor carrying `.w`, `.h` and optionally `.cf`.

use log::{debug, warn};
use nom::{
    bytes::complete::{is_not, tag},
    character::complete::{char, multispace0, multispace1, satisfy},
    combinator::{map_opt, not},
    sequence::{delimited, pair, terminated, tuple},
    IResult,
};

use crate::{
    descriptor::{ColorFormat, Descriptor, Palette},
    error::ParseError,
    pixel::Pixel,
    scan::{assign, decimal, field, find_all, find_first, hex_byte, identifier, is_word_char},
};

/// Bytes at the start of the map array that repeat the two palette entries
pub const INLINE_PALETTE_LEN: usize = 2 * 4;

/// Upper bound on `width * height`, keeps the decoded RGBA buffer at 256 MiB
pub const MAX_PIXELS: u64 = 1 << 26;

fn palette_channel(input: &str) -> IResult<&str, u8> {
    terminated(hex_byte, pair(char(','), multispace0))(input)
}

fn palette_entry(input: &str) -> IResult<&str, (u32, Pixel)> {
    let (input, index) = delimited(tag("/*Color of index "), decimal, tag("*/"))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, (r, g, b, a)) = tuple((
        palette_channel,
        palette_channel,
        palette_channel,
        palette_channel,
    ))(input)?;
    Ok((input, (index, Pixel::from([r, g, b, a]))))
}

/// Brace delimited contents, without the braces
fn braced(input: &str) -> IResult<&str, &str> {
    delimited(char('{'), is_not("}"), char('}'))(input)
}

/// `<name>_map[] = { ... }`, yielding the name and the array body
fn bitmap_array(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, name) = map_opt(identifier, |ident: &str| {
        ident.strip_suffix("_map").filter(|name| !name.is_empty())
    })(input)?;
    let (input, _) = pair(tag("[]"), assign)(input)?;
    let (input, body) = braced(input)?;
    Ok((input, (name, body)))
}

/// `<type> <name> = { ... }`, yielding the field list
fn descriptor_block<'a>(name: &'a str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    move |input| {
        let (input, _) = tuple((
            identifier,
            multispace1,
            tag(name),
            not(satisfy(is_word_char)),
            assign,
        ))(input)?;
        braced(input)
    }
}

/// Build a [`Descriptor`] from the full text of a C source file
pub fn extract(text: &str) -> Result<Descriptor, ParseError> {
    let palette: Palette = find_all(text, palette_entry).into_iter().collect();
    debug!("Found {} palette entries", palette.len());
    for (index, color) in palette.iter() {
        debug!("  index {}: {:?}", index, color);
    }

    let arrays = find_all(text, bitmap_array);
    let (name, body) = match arrays.as_slice() {
        [] => return Err(ParseError::BitmapArrayNotFound),
        [array] => *array,
        _ => {
            return Err(ParseError::AmbiguousBitmapArray {
                count: arrays.len(),
            })
        }
    };

    let bytes = find_all(body, hex_byte);
    debug!("Bitmap array `{}_map` holds {} bytes", name, bytes.len());
    if bytes.len() < INLINE_PALETTE_LEN {
        warn!(
            "Bitmap array `{}_map` is shorter than its inline palette ({} bytes)",
            name,
            bytes.len()
        );
    }
    let bits: Vec<u8> = bytes.into_iter().skip(INLINE_PALETTE_LEN).collect();

    let block = find_first(text, descriptor_block(name)).ok_or_else(|| {
        ParseError::DescriptorNotFound {
            name: name.to_owned(),
        }
    })?;

    let width = find_first(block, field("w", decimal::<u32>));
    let height = find_first(block, field("h", decimal::<u32>));
    let (width, height) = width.zip(height).ok_or(ParseError::DimensionsNotFound)?;
    if width == 0 || height == 0 {
        return Err(ParseError::ZeroDimension { width, height });
    }
    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        return Err(ParseError::DimensionsTooLarge { width, height });
    }

    let color_format = find_first(block, field("cf", identifier))
        .map(ColorFormat::new)
        .unwrap_or_else(ColorFormat::unknown);

    Ok(Descriptor::new(
        name.to_owned(),
        width,
        height,
        color_format,
        palette,
        bits,
    ))
}
