//! Rasterizer: display list to RGB canvas to PNG bytes

use std::io::Cursor;

use image::{ImageFormat, RgbImage};

use crate::rendering::layout::{Bounds, Stroke};
use crate::rendering::paint::PaintCommand;
use crate::{Color, Error, Result, Size};

/// Allocate a zeroed `size`×`size` canvas, failing instead of aborting when
/// the buffer length overflows or the allocation is refused.
pub fn allocate_canvas(size: Size) -> Result<RgbImage> {
    let side = size.get();
    let too_large = || Error::CanvasTooLarge(side);
    let len = usize::try_from(side)
        .ok()
        .and_then(|n| n.checked_mul(n))
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(too_large)?;

    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| too_large())?;
    buf.resize(len, 0u8);
    RgbImage::from_raw(side, side, buf).ok_or_else(too_large)
}

/// Execute `commands` in order on a fresh `size`×`size` canvas
pub fn rasterize(size: Size, commands: &[PaintCommand]) -> Result<RgbImage> {
    let mut canvas = allocate_canvas(size)?;
    for cmd in commands {
        match cmd {
            PaintCommand::Clear { color } => {
                for px in canvas.pixels_mut() {
                    *px = (*color).into();
                }
            }
            PaintCommand::Ellipse {
                bounds,
                fill,
                outline,
            } => {
                fill_ellipse(&mut canvas, bounds, *fill);
                if let Some(color) = outline {
                    outline_ellipse(&mut canvas, bounds, *color);
                }
            }
            PaintCommand::Line { stroke, color } => draw_line(&mut canvas, stroke, *color),
        }
    }
    Ok(canvas)
}

/// Encode a canvas as PNG in memory
pub fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    canvas.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Whether `(x, y)` lies inside the ellipse centered at `center` with the given radii.
/// A zero radius collapses that axis onto the center line.
fn inside(x: i64, y: i64, center: (f64, f64), rx: f64, ry: f64) -> bool {
    let axis = |d: f64, r: f64| {
        if r > 0.0 {
            (d / r) * (d / r)
        } else if d == 0.0 {
            0.0
        } else {
            f64::INFINITY
        }
    };
    axis(x as f64 - center.0, rx) + axis(y as f64 - center.1, ry) <= 1.0
}

/// Pixels of `bounds` that fall inside a `width`×`height` canvas
fn clipped(width: u32, height: u32, bounds: Bounds) -> impl Iterator<Item = (u32, u32)> {
    let max_x = i64::from(width) - 1;
    let max_y = i64::from(height) - 1;
    let xs = bounds.x0.max(0)..=bounds.x1.min(max_x);
    (bounds.y0.max(0)..=bounds.y1.min(max_y))
        .flat_map(move |y| xs.clone().map(move |x| (x as u32, y as u32)))
}

fn fill_ellipse(canvas: &mut RgbImage, bounds: &Bounds, color: Color) {
    let center = bounds.center();
    let (w, h) = bounds.extent();
    let (rx, ry) = (w as f64 / 2.0, h as f64 / 2.0);
    let (cw, ch) = canvas.dimensions();
    for (x, y) in clipped(cw, ch, *bounds) {
        if inside(x.into(), y.into(), center, rx, ry) {
            canvas.put_pixel(x, y, color.into());
        }
    }
}

fn outline_ellipse(canvas: &mut RgbImage, bounds: &Bounds, color: Color) {
    let center = bounds.center();
    let (w, h) = bounds.extent();
    let (rx, ry) = (w as f64 / 2.0, h as f64 / 2.0);
    let (irx, iry) = ((rx - 1.0).max(0.0), (ry - 1.0).max(0.0));
    let hollow = rx >= 1.0 && ry >= 1.0;
    let (cw, ch) = canvas.dimensions();
    for (x, y) in clipped(cw, ch, *bounds) {
        let (x64, y64) = (i64::from(x), i64::from(y));
        if inside(x64, y64, center, rx, ry) && !(hollow && inside(x64, y64, center, irx, iry)) {
            canvas.put_pixel(x, y, color.into());
        }
    }
}

fn draw_line(canvas: &mut RgbImage, stroke: &Stroke, color: Color) {
    if stroke.width <= 0 {
        return;
    }
    let (top, bottom) = stroke.rows();
    let bounds = Bounds {
        x0: stroke.x0,
        y0: top,
        x1: stroke.x1,
        y1: bottom,
    };
    let (cw, ch) = canvas.dimensions();
    for (x, y) in clipped(cw, ch, bounds) {
        canvas.put_pixel(x, y, color.into());
    }
}
