//! Web App Manifest icon entries
//!
//! Mirrors the `icons` member of the W3C Web App Manifest so the generated PNGs
//! can be pasted straight into a PWA's `manifest.json`.

use crate::icon_gen::icon_filename;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

pub const MANIFEST_FILENAME: &str = "manifest-icons.json";

/// Root of the generated manifest fragment
#[derive(Serialize, Debug, Clone, Default)]
pub struct ManifestIcons {
    pub icons: Vec<IconEntry>,
}

/// One image resource in the manifest's `icons` array
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    /// URL of the image, relative to the site root (e.g. "/icon-192.png")
    pub src: String,

    /// Space-separated list of dimensions (e.g. "192x192")
    pub sizes: String,

    /// MIME type of the image
    #[serde(rename = "type")]
    pub mime_type: String,

    /// How the browser may use the icon ("any", "maskable", "monochrome")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl IconEntry {
    pub fn png(size: u32) -> Self {
        Self {
            src: format!("/{}", icon_filename(size)),
            sizes: format!("{size}x{size}"),
            mime_type: "image/png".to_string(),
            purpose: Some("any".to_string()),
        }
    }
}

impl ManifestIcons {
    /// Build entries in list order, keeping only the first occurrence of each size
    pub fn from_sizes(sizes: &[u32]) -> Self {
        let mut manifest = Self::default();
        for &size in sizes {
            let entry = IconEntry::png(size);
            if !manifest.icons.contains(&entry) {
                manifest.icons.push(entry);
            }
        }
        manifest
    }
}

/// Write `manifest-icons.json` next to the generated icons
pub fn write_manifest(out_dir: &Path, sizes: &[u32]) -> Result<()> {
    let manifest = ManifestIcons::from_sizes(sizes);
    let manifest_json =
        serde_json::to_string_pretty(&manifest).context("Failed to serialize manifest icons")?;

    std::fs::write(out_dir.join(MANIFEST_FILENAME), manifest_json)
        .context("Failed to write manifest icons file")?;

    println!("  ✓ Generated {MANIFEST_FILENAME}");
    Ok(())
}
