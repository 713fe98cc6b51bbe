//! Icon rendering: layout, paint, raster
//!
//! `render_icon` runs the three stages and returns the encoded PNG;
//! `render` additionally writes it to disk.

pub mod layout;
pub mod paint;
pub mod raster;

use std::fs;
use std::path::Path;

use log::debug;
use sha2::{Digest, Sha256};

use crate::{Error, Palette, Result, Size};

/// An encoded icon
#[derive(Debug, Clone)]
pub struct Icon {
    pub size: Size,
    pub png_data: Vec<u8>,
}

impl Icon {
    pub fn width(&self) -> u32 {
        self.size.get()
    }

    pub fn height(&self) -> u32 {
        self.size.get()
    }

    /// Hex SHA-256 of the PNG bytes
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }
}

/// Draw an icon of the given size and encode it as PNG, without touching disk
pub fn render_icon(size: Size, palette: &Palette) -> Result<Icon> {
    let layout = layout::layout_icon(size);
    match &layout {
        layout::IconLayout::Detailed { lines, .. } => {
            debug!("{}: detailed layout, stroke width {}", size, lines[0].width)
        }
        layout::IconLayout::Minimal { .. } => debug!("{}: minimal layout", size),
    }

    let commands = paint::display_list(&layout, palette);
    let canvas = raster::rasterize(size, &commands)?;
    let png_data = raster::encode_png(&canvas)?;
    Ok(Icon { size, png_data })
}

/// Render an icon with the default palette and write it to `output_path`,
/// creating or overwriting the file.
pub fn render(size: Size, output_path: impl AsRef<Path>) -> Result<Icon> {
    render_with_palette(size, &Palette::default(), output_path)
}

/// [`render`] with explicit colors
pub fn render_with_palette(
    size: Size,
    palette: &Palette,
    output_path: impl AsRef<Path>,
) -> Result<Icon> {
    let path = output_path.as_ref();
    let icon = render_icon(size, palette)?;
    if path.exists() {
        debug!("Overwriting {}", path.display());
    }
    fs::write(path, &icon.png_data).map_err(|e| Error::io(path, e))?;
    Ok(icon)
}
