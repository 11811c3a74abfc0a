use crate::canvas::{fill_rect, fill_vertical_gradient, stroke_ellipse, Rect};
use crate::manifest;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgba, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

/// Sizes generated when no custom list is given
pub const DEFAULT_SIZES: [u32; 10] = [16, 32, 48, 72, 96, 144, 192, 256, 384, 512];

pub const FAVICON_SIZE: u32 = 32;
pub const FAVICON_FILENAME: &str = "favicon.png";
pub const DEFAULT_OUTPUT_DIR: &str = "client/public";

/// Dark indigo, #13103b
pub const GRADIENT_START: Rgba<u8> = Rgba([19, 16, 59, 255]);
/// Light green-cyan, #d4fc04
pub const GRADIENT_END: Rgba<u8> = Rgba([212, 252, 4, 255]);

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Gradient endpoints. `from` also colors the ridges on the instrument base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub from: Rgba<u8>,
    pub to: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            from: GRADIENT_START,
            to: GRADIENT_END,
        }
    }
}

impl Palette {
    /// Build a palette from two CSS colors. Alpha is always forced to opaque.
    pub fn parse(from: &str, to: &str) -> Result<Self> {
        Ok(Self {
            from: parse_color(from)?,
            to: parse_color(to)?,
        })
    }
}

fn parse_color(color: &str) -> Result<Rgba<u8>> {
    let srgb = css_color::Srgb::from_str(color)
        .map_err(|_| anyhow::anyhow!("Invalid color: {}", color))?;

    Ok(Rgba([
        (srgb.red * 255.).round() as u8,
        (srgb.green * 255.).round() as u8,
        (srgb.blue * 255.).round() as u8,
        255,
    ]))
}

#[derive(Debug, Clone)]
pub struct Args {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
    pub favicon_size: u32,
    pub palette: Palette,
    pub manifest: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: DEFAULT_SIZES.to_vec(),
            favicon_size: FAVICON_SIZE,
            palette: Palette::default(),
            manifest: false,
        }
    }
}

pub fn icon_filename(size: u32) -> String {
    format!("icon-{size}.png")
}

/// Generate every icon in `args.sizes` plus the favicon
///
/// All sizes are checked before the output directory is touched. The first
/// failing write aborts the run.
pub fn generate_icons(args: &Args) -> Result<()> {
    for &size in args.sizes.iter().chain(std::iter::once(&args.favicon_size)) {
        validate_size(size)?;
    }

    create_dir_all(&args.output).context("Can't create output directory")?;

    println!("Generating PWA icons in {}...", args.output.display());
    for &size in &args.sizes {
        create_icon(size, &args.output.join(icon_filename(size)), &args.palette)?;
    }

    create_icon(
        args.favicon_size,
        &args.output.join(FAVICON_FILENAME),
        &args.palette,
    )?;

    if args.manifest {
        manifest::write_manifest(&args.output, &args.sizes)?;
    }

    println!("\n✓ All icons generated successfully");
    Ok(())
}

/// Render the icon at `size` and write it to `path` as PNG, replacing any existing file
pub fn create_icon(size: u32, path: &Path, palette: &Palette) -> Result<()> {
    let img = render_icon(size, palette)?;
    save_png(&img, path)?;
    println!("  ✓ Generated {} ({size}x{size})", path.display());
    Ok(())
}

fn validate_size(size: u32) -> Result<()> {
    if size == 0 {
        anyhow::bail!("Icon size must be greater than zero");
    }
    Ok(())
}

/// Draw the measuring-instrument icon on a `size` x `size` canvas
///
/// Every coordinate is an integer fraction of `size`, so the proportions hold
/// at any resolution.
pub fn render_icon(size: u32, palette: &Palette) -> Result<RgbaImage> {
    validate_size(size)?;

    let mut img = RgbaImage::new(size, size);
    fill_vertical_gradient(&mut img, palette.from, palette.to);

    let s = size as i64;
    let center = s / 2;
    let radius = s / 8;
    let stroke_width = (s / 64).max(2);
    let line_width = (s / 64).max(1);

    // Dial
    stroke_ellipse(
        &mut img,
        Rect::new(
            center - radius,
            center - radius * 7 / 10,
            center + radius,
            center + radius * 7 / 10,
        ),
        stroke_width as u32,
        WHITE,
    );

    // Needle: cross-piece then stem
    let needle_top = center - radius * 4 / 5;
    fill_rect(
        &mut img,
        Rect::new(
            center - radius / 2,
            needle_top,
            center + radius / 2,
            needle_top + line_width,
        ),
        WHITE,
    );
    fill_rect(
        &mut img,
        Rect::new(
            center - line_width / 2,
            needle_top,
            center + line_width / 2,
            center - radius * 3 / 10,
        ),
        WHITE,
    );

    // Base
    let base_top = center + radius / 2;
    let base_width = s / 3;
    let base_height = s / 4;
    fill_rect(
        &mut img,
        Rect::new(
            center - base_width / 2,
            base_top,
            center + base_width / 2,
            base_top + base_height,
        ),
        WHITE,
    );

    // Ridges across the base, in sixths of its height
    for i in 1..=4 {
        let y = base_top + i * base_height / 6;
        fill_rect(
            &mut img,
            Rect::new(
                center - base_width / 3,
                y,
                center + base_width / 3,
                y + line_width,
            ),
            palette.from,
        );
    }

    Ok(img)
}

fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(img.as_raw(), &mut out_file, img.width())
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file.flush()?;
    Ok(())
}

// Encode square RGBA data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}
