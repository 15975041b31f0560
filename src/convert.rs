//! One input file to one PNG

use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    decode::decode,
    descriptor::ColorFormat,
    encode::encode_png,
    error::{Error, Result},
    extract::extract,
};

/// What was converted, for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub name: String,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub color_format: ColorFormat,
    pub colors: usize,
}

/// `<input stem>.png`, relative to the current directory
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_else(|| "image".into());
    name.push(".png");
    PathBuf::from(name)
}

/// Extract, decode and encode the asset in `input`, writing the PNG to
/// `output` or to [`default_output_path`].
///
/// Nothing is written unless the whole image was converted.
pub fn convert(input: &Path, output: Option<&Path>) -> Result<Conversion> {
    if !input.exists() {
        return Err(Error::InputNotFound(input.to_owned()));
    }
    info!("Parsing {}...", input.display());
    let raw = fs::read(input)?;
    let text = String::from_utf8_lossy(&raw);
    if matches!(text, Cow::Owned(_)) {
        debug!("{} is not valid UTF-8, decoding lossily", input.display());
    }

    let desc = extract(&text)?;
    let grid = decode(&desc);
    let png = encode_png(&grid)?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));
    fs::write(&output, png)?;
    debug!("Wrote {}", output.display());

    Ok(Conversion {
        name: desc.name,
        output,
        width: desc.width,
        height: desc.height,
        color_format: desc.color_format,
        colors: desc.palette.len(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::{convert, default_output_path};
    use crate::error::Error;

    #[test]
    fn output_takes_input_stem() {
        assert_eq!(
            default_output_path(Path::new("widgets/icons/batt_0.c")),
            PathBuf::from("batt_0.png")
        );
        assert_eq!(
            default_output_path(Path::new("layers.v2.c")),
            PathBuf::from("layers.v2.png")
        );
        assert_eq!(default_output_path(Path::new("icon")), PathBuf::from("icon.png"));
    }

    #[test]
    fn missing_input() {
        let input = Path::new("does/not/exist.c");
        match convert(input, None) {
            Err(Error::InputNotFound(path)) => assert_eq!(path, input),
            other => panic!("expected InputNotFound, got {:?}", other),
        }
    }
}
