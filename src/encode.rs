use png::{BitDepth, ColorType, Encoder, EncodingError};

use crate::decode::PixelGrid;

/// Serialize `grid` as an 8-bit RGBA PNG
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>, EncodingError> {
    let mut out = Vec::new();
    let mut encoder = Encoder::new(&mut out, grid.width(), grid.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&grid.to_rgba_bytes())?;
    writer.finish()?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::encode_png;
    use crate::{
        decode::decode,
        descriptor::{ColorFormat, Descriptor, Palette},
        pixel::Pixel,
    };

    #[test]
    fn png_holds_rgba_pixels() {
        let palette: Palette = [
            (0, Pixel::new(0, 0, 0, 0)),
            (1, Pixel::new(10, 20, 30, 255)),
        ]
        .into_iter()
        .collect();
        let desc = Descriptor::new(
            "dots".into(),
            3,
            2,
            ColorFormat::unknown(),
            palette,
            vec![0b1010_0000, 0b0100_0000],
        );
        let grid = decode(&desc);
        let data = encode_png(&grid).unwrap();

        let mut reader = png::Decoder::new(data.as_slice()).read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        assert_eq!((info.width, info.height), (3, 2));
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert_eq!(info.bit_depth, png::BitDepth::Eight);
        assert_eq!(&buf[..info.buffer_size()], grid.to_rgba_bytes().as_slice());
    }
}
