//! Converts 1 bit indexed LVGL images compiled into C source back into PNG files

pub mod convert;
pub mod decode;
pub mod descriptor;
pub mod encode;
pub mod error;
pub mod extract;
pub mod pixel;
mod scan;

pub use convert::{convert, default_output_path, Conversion};
pub use decode::{decode, PixelGrid};
pub use descriptor::{ColorFormat, Descriptor, Palette};
pub use encode::encode_png;
pub use error::{Error, ParseError};
pub use extract::extract;
pub use pixel::Pixel;
