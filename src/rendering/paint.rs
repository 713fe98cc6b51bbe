//! Paint command set consumed by the rasterizer

use crate::rendering::layout::{Bounds, IconLayout, Stroke};
use crate::{Color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Fill the whole canvas
    Clear { color: Color },
    /// Ellipse inscribed in `bounds`, with an optional one-pixel outline
    Ellipse {
        bounds: Bounds,
        fill: Color,
        outline: Option<Color>,
    },
    /// Horizontal line of `stroke.width` rows
    Line { stroke: Stroke, color: Color },
}

/// Turn a layout into an ordered display list
pub fn display_list(layout: &IconLayout, palette: &Palette) -> Vec<PaintCommand> {
    let mut cmds = vec![PaintCommand::Clear {
        color: palette.background,
    }];

    match layout {
        IconLayout::Detailed { circle, lines } => {
            cmds.push(PaintCommand::Ellipse {
                bounds: *circle,
                fill: palette.foreground,
                outline: Some(palette.foreground),
            });
            cmds.extend(lines.iter().map(|stroke| PaintCommand::Line {
                stroke: *stroke,
                color: palette.foreground,
            }));
        }
        IconLayout::Minimal { dot } => {
            cmds.push(PaintCommand::Ellipse {
                bounds: *dot,
                fill: palette.foreground,
                outline: None,
            });
        }
    }

    cmds
}
