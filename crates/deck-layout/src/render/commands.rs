use crate::types::Rect;
use std::path::PathBuf;

/// A single drawing operation on a page, in points
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Rotate everything drawn after this command about a point.
    /// Degrees are counter-clockwise and always in `0..360`.
    Rotate {
        degrees: f32,
        center_x: f32,
        center_y: f32,
    },
    /// Draw an image file stretched to `rect`
    PlaceImage { path: PathBuf, rect: Rect },
    /// Fill `rect` with a gray level (0 = black, 1 = white)
    FillRect { rect: Rect, gray: f32 },
    /// Stroke a straight line
    Line {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        gray: f32,
    },
}

impl DrawCommand {
    pub fn is_image(&self) -> bool {
        matches!(self, DrawCommand::PlaceImage { .. })
    }

    pub fn is_rotation(&self) -> bool {
        matches!(self, DrawCommand::Rotate { .. })
    }
}

/// Map any angle into the positive range accepted by [`DrawCommand::Rotate`].
///
/// Negative angles turn the other way: `-30` becomes `330`.
pub fn normalize_rotation(degrees: f32) -> f32 {
    degrees.rem_euclid(360.0)
}
