use anyhow::{Context, Result};
use image::io::Reader as ImageReader;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "client/public/icon-512.png".to_string());

    let img = ImageReader::open(&path)
        .with_context(|| format!("Failed to open image {}", path))?
        .decode()
        .context("Failed to decode image")?;

    let rgba_img = img.to_rgba8();
    let width = img.width();
    let height = img.height();

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);

    if width == 0 || height == 0 {
        println!("⚠ Icon is empty");
        return Ok(());
    }

    // The left column is never covered by shapes
    let top = rgba_img.get_pixel(0, 0);
    let bottom = rgba_img.get_pixel(0, height - 1);
    println!("\nGradient endpoints (left column):");
    println!("  Top RGBA:    [{}, {}, {}, {}]", top[0], top[1], top[2], top[3]);
    println!(
        "  Bottom RGBA: [{}, {}, {}, {}]",
        bottom[0], bottom[1], bottom[2], bottom[3]
    );

    let transparent = rgba_img.pixels().filter(|p| p[3] != 255).count();
    println!("\nOpacity analysis:");
    println!(
        "  {} out of {} pixels are not fully opaque",
        transparent,
        width * height
    );

    if width == height && transparent == 0 {
        println!("✓ Icon is square and fully opaque");
    } else {
        println!("⚠ Icon is not a square, fully opaque image");
    }

    Ok(())
}
