//! Cutting guides and calibration crosshairs

use crate::constants::{
    CROSSHAIR_ARM, CROSSHAIR_INSET, CROSSHAIR_LINE_WIDTH, GUIDE_LINE_GRAY, GUIDE_LINE_WIDTH,
};
use crate::layout::PageGeometry;

use super::DrawCommand;

/// Faint full-page lines through every cell edge, for cutting fronts
pub fn guide_lines(geometry: &PageGeometry) -> Vec<DrawCommand> {
    let mut ops = Vec::new();

    for x in geometry.column_edges() {
        ops.push(DrawCommand::Line {
            from: (x, 0.0),
            to: (x, geometry.page_height),
            width: GUIDE_LINE_WIDTH,
            gray: GUIDE_LINE_GRAY,
        });
    }

    for y in geometry.row_edges() {
        ops.push(DrawCommand::Line {
            from: (0.0, y),
            to: (geometry.page_width, y),
            width: GUIDE_LINE_WIDTH,
            gray: GUIDE_LINE_GRAY,
        });
    }

    ops
}

/// Four crosshairs inset from the page corners.
///
/// `offset_x`/`offset_y` are the back registration offsets (zero on fronts),
/// so the marks move exactly like card backs do.
pub fn crosshairs(
    page_width: f32,
    page_height: f32,
    offset_x: f32,
    offset_y: f32,
) -> Vec<DrawCommand> {
    let left = CROSSHAIR_INSET + offset_x;
    let right = page_width - CROSSHAIR_INSET + offset_x;
    let bottom = CROSSHAIR_INSET + offset_y;
    let top = page_height - CROSSHAIR_INSET + offset_y;

    [(left, top), (right, top), (left, bottom), (right, bottom)]
        .into_iter()
        .flat_map(|(cx, cy)| crosshair(cx, cy))
        .collect()
}

fn crosshair(cx: f32, cy: f32) -> [DrawCommand; 2] {
    [
        DrawCommand::Line {
            from: (cx - CROSSHAIR_ARM, cy),
            to: (cx + CROSSHAIR_ARM, cy),
            width: CROSSHAIR_LINE_WIDTH,
            gray: 0.0,
        },
        DrawCommand::Line {
            from: (cx, cy - CROSSHAIR_ARM),
            to: (cx, cy + CROSSHAIR_ARM),
            width: CROSSHAIR_LINE_WIDTH,
            gray: 0.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centers(ops: &[DrawCommand]) -> Vec<(f32, f32)> {
        // Horizontal arms carry the center y; their midpoint is the center
        ops.iter()
            .filter_map(|op| match op {
                DrawCommand::Line { from, to, .. } if from.1 == to.1 => {
                    Some(((from.0 + to.0) / 2.0, from.1))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_crosshairs_near_each_corner() {
        let ops = crosshairs(600.0, 800.0, 0.0, 0.0);
        assert_eq!(ops.len(), 8);
        let c = centers(&ops);
        let close = |a: (f32, f32), b: (f32, f32)| {
            (a.0 - b.0).abs() < 1e-3 && (a.1 - b.1).abs() < 1e-3
        };
        assert!(close(c[0], (CROSSHAIR_INSET, 800.0 - CROSSHAIR_INSET)));
        assert!(close(c[3], (600.0 - CROSSHAIR_INSET, CROSSHAIR_INSET)));
    }

    #[test]
    fn test_crosshairs_follow_back_offsets() {
        let plain = centers(&crosshairs(600.0, 800.0, 0.0, 0.0));
        let shifted = centers(&crosshairs(600.0, 800.0, 5.0, -3.0));
        for (a, b) in plain.iter().zip(&shifted) {
            assert!((b.0 - a.0 - 5.0).abs() < 1e-3);
            assert!((b.1 - a.1 + 3.0).abs() < 1e-3);
        }
    }
}
