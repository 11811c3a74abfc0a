use anyhow::Result;
use clap::Parser;
use pwa_icon_gen::icon_gen::{self, Palette, DEFAULT_SIZES, FAVICON_SIZE};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "pwa-icon-gen",
    about = "Draw the PWA icon set and favicon"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = icon_gen::DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Custom PNG icon sizes to generate. When set, only these sizes are generated.
    #[clap(short, long, value_delimiter = ',', value_name = "SIZES")]
    png: Option<Vec<u32>>,

    /// Size of the favicon
    #[clap(long, value_name = "SIZE", default_value_t = FAVICON_SIZE)]
    favicon_size: u32,

    /// Gradient color at the top of the icon (CSS color format)
    #[clap(long, value_name = "COLOR", default_value = "#13103b")]
    from: String,

    /// Gradient color at the bottom of the icon (CSS color format)
    #[clap(long, value_name = "COLOR", default_value = "#d4fc04")]
    to: String,

    /// Also write manifest-icons.json for the PWA manifest
    #[clap(long)]
    manifest: bool,
}

impl TryFrom<Args> for icon_gen::Args {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Self {
            output: args.output,
            sizes: args.png.unwrap_or_else(|| DEFAULT_SIZES.to_vec()),
            favicon_size: args.favicon_size,
            palette: Palette::parse(&args.from, &args.to)?,
            manifest: args.manifest,
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(&args.try_into()?)
}
