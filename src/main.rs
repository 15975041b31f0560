use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::LevelFilter;
use lvgl_bitmap_decoder::convert;

#[derive(Debug, Parser)]
/// Converts a 1-bit indexed LVGL C image to PNG
struct Opts {
    /// The C file holding the image (`<name>_map[]` and its descriptor)
    input: PathBuf,
    /// Where to write the PNG (default: `<input stem>.png` in the current directory)
    #[clap(short, long)]
    output: Option<PathBuf>,
    /// Log extraction details
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let opts = Opts::parse();
    env_logger::Builder::new()
        .filter_level(if opts.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .format_timestamp(None)
        .parse_env(Env::new().filter("LVGL2PNG_LOG"))
        .init();

    let done = convert(&opts.input, opts.output.as_deref())?;
    println!("Converted {} to {}", done.name, done.output.display());
    println!("   Size: {}x{} pixels", done.width, done.height);
    println!("   Format: {}", done.color_format);
    println!("   Colors: {} colors", done.colors);
    Ok(())
}
