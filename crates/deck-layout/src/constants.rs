//! Shared constants for deck layout
//!
//! Unit conversion and the fixed geometry of guide lines and
//! calibration marks.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Guide Lines
// =============================================================================

/// Line width for cutting guides (points)
pub const GUIDE_LINE_WIDTH: f32 = 0.25;

/// Gray level for cutting guides (0 = black, 1 = white)
pub const GUIDE_LINE_GRAY: f32 = 0.8;

// =============================================================================
// Calibration Crosshairs
// =============================================================================

/// Distance from each page edge to the crosshair center (points)
pub const CROSSHAIR_INSET: f32 = 28.35; // 10mm

/// Half length of each crosshair arm (points)
pub const CROSSHAIR_ARM: f32 = 8.5; // 3mm

/// Line width for crosshairs (points)
pub const CROSSHAIR_LINE_WIDTH: f32 = 0.5;

// =============================================================================
// Fills
// =============================================================================

/// Gray level used for blank card backs (page background)
pub const BACKGROUND_GRAY: f32 = 1.0;

/// Tolerance below which a rotation angle counts as zero
pub const ROTATION_EPSILON: f32 = 0.001;
